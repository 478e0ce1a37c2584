//! Application configuration
//!
//! Defaults, TOML files and `IDX_*` environment variables layered with figment.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{
    AppConfig, ComponentsConfig, ContentConfig, EventsConfig, LoggingConfig, SiteConfig,
};
