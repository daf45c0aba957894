pub mod memory_store;
pub mod toml_phase_catalog;

pub use memory_store::MemoryStore;
pub use toml_phase_catalog::TomlPhaseCatalog;
