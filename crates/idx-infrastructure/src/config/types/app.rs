//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{ComponentsConfig, ContentConfig, EventsConfig, LoggingConfig, SiteConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Site the indexables belong to
    #[serde(default)]
    pub site: SiteConfig,

    /// Event bus configuration
    #[serde(default)]
    pub events: EventsConfig,

    /// Component selection
    #[serde(default)]
    pub components: ComponentsConfig,

    /// Content source for the helpers
    #[serde(default)]
    pub content: ContentConfig,
}
