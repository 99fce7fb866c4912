//! Configuration and logging helpers shared by Finance Club site hosts.

pub mod config;
pub mod logging;

pub use config::{ConfigError, SiteConfig, default_config_path, expand_tilde};
pub use logging::init_tracing;
