pub mod app_config;

pub use app_config::{AppConfig, CONFIG_FILE, CatalogConfig, LoggingConfig, parse_config_content};
