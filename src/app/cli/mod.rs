//! CLI Adapter.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, CatalogOptions};
use crate::app::config::load_config;
use crate::domain::{AppError, PhaseId};

#[derive(Parser)]
#[command(name = "phase-prompt")]
#[command(version)]
#[command(about = "Render innovation phase prompts from a phase catalog", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Config file (defaults to ./phase-prompt.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Phase catalog overriding the configured path
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List active phases
    #[clap(visible_alias = "ls")]
    Phases,
    /// Print the prompt assembled for a phase form
    #[clap(visible_alias = "r")]
    Render {
        /// Phase identifier
        #[arg(short, long)]
        phase: PhaseId,
        /// JSON file with the form submission
        #[arg(short, long)]
        form: Option<PathBuf>,
        /// Form value as name=value (repeatable, applied after --form)
        #[arg(short, long = "set", value_name = "NAME=VALUE")]
        set: Vec<String>,
    },
    /// Report authoring problems in phase definitions
    Check {
        /// Only check this phase
        #[arg(short, long)]
        phase: Option<PhaseId>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = std::env::current_dir()
        .map_err(AppError::from)
        .and_then(|work_dir| dispatch(cli, &work_dir));

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli, work_dir: &Path) -> Result<(), AppError> {
    init_tracing(cli.verbose, cli.config.as_deref(), work_dir);

    let options = CatalogOptions { config: cli.config, catalog: cli.catalog };
    match cli.command {
        Commands::Phases => run_phases(work_dir, &options),
        Commands::Render { phase, form, set } => {
            run_render(work_dir, &options, phase, form.as_deref(), &set)
        }
        Commands::Check { phase } => run_check(work_dir, &options, phase),
    }
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured filter.
fn init_tracing(verbose: bool, config: Option<&Path>, work_dir: &Path) {
    let configured = if verbose {
        "debug".to_string()
    } else {
        // A broken config is reported by the command itself.
        load_config(config, work_dir)
            .map(|config| config.logging.filter)
            .unwrap_or_else(|_| "info".into())
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(configured));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run_phases(work_dir: &Path, options: &CatalogOptions) -> Result<(), AppError> {
    let phases = api::list_phases_at(work_dir, options)?;
    if phases.is_empty() {
        println!("No active phases");
        return Ok(());
    }
    for phase in phases {
        println!("{:>4}  {:>3}  {}", phase.id, phase.order, phase.title);
    }
    Ok(())
}

fn run_render(
    work_dir: &Path,
    options: &CatalogOptions,
    phase: PhaseId,
    form: Option<&Path>,
    pairs: &[String],
) -> Result<(), AppError> {
    let form = api::read_form(form, pairs)?;
    let prompt = api::render_at(work_dir, options, phase, &form)?;
    println!("{}", prompt);
    Ok(())
}

fn run_check(
    work_dir: &Path,
    options: &CatalogOptions,
    phase: Option<PhaseId>,
) -> Result<(), AppError> {
    let reports = api::check_at(work_dir, options, phase)?;
    let mut issue_count = 0;
    for report in &reports {
        if report.is_clean() {
            println!("✅ {} ({})", report.title, report.id);
            continue;
        }
        println!("⚠️  {} ({})", report.title, report.id);
        for issue in &report.issues {
            println!("  • {}", issue);
        }
        issue_count += report.issues.len();
    }
    println!("{} phase(s) checked, {} issue(s)", reports.len(), issue_count);
    Ok(())
}
