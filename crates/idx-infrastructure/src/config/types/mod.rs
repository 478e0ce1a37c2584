//! Configuration types

mod app;
mod logging;
mod site;

pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use site::{ComponentsConfig, ContentConfig, EventsConfig, SiteConfig};
