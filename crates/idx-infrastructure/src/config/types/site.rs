//! Site, events, components and content configuration types

use crate::constants::{DEFAULT_BLOG_ID, DEFAULT_EVENT_CAPACITY};
use idx_domain::BuildContext;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Site configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Blog id stamped on built records
    pub blog_id: u64,
}

impl SiteConfig {
    /// Build context for this site
    pub fn build_context(&self) -> BuildContext {
        BuildContext::new(self.blog_id)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            blog_id: DEFAULT_BLOG_ID,
        }
    }
}

/// Event bus configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Publish `indexable_saved` events
    pub enabled: bool,

    /// Broadcast channel capacity
    pub capacity: usize,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

/// Component selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    /// Ids of linked components left out of the registry
    pub disabled: Vec<String>,
}

/// Content source configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// JSON fixture answering the content helpers; empty content when unset
    pub fixture_path: Option<PathBuf>,
}
