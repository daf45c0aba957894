//! Shared testing utilities for phase-prompt CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Catalog with one phase mirroring the innovation form used across tests,
/// one phase with an optional chunk, and one archived phase.
pub const CATALOG: &str = r#"
[[phases]]
id = 1
title = "Fase de Prueba"
order = 1

[[phases.fields]]
name = "campo_1"
label = "Campo 1"
order = 0

[[phases.fields]]
name = "campo_2"
label = "Campo 2"
order = 1

[[phases.chunks]]
content = "Introduce tu idea: "
order = 0

[[phases.chunks]]
content = " con enfoque en: "
order = 1

[[phases.chunks]]
content = " resultado esperado."
order = 2

[[phases]]
id = 2
title = "Validación"
order = 0

[[phases.fields]]
name = "hipotesis"
order = 0

[[phases.fields]]
name = "metrica"
order = 1

[[phases.chunks]]
content = "Hipótesis: "
order = 0

[[phases.chunks]]
content = ". Métrica: "
is_optional = true
order = 1

[[phases]]
id = 3
title = "Fase Archivada"
is_active = false
"#;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment with [`CATALOG`] at the default catalog path.
    pub fn with_catalog() -> Self {
        let ctx = Self::new();
        ctx.write_file("phases.toml", CATALOG);
        ctx
    }

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("phase-prompt").expect("Failed to locate phase-prompt binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
