//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "idx.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "idx";

/// Project-local configuration directory
pub const LOCAL_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "IDX";

/// Separator between nested keys in environment variables (`IDX_SITE__BLOG_ID`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_FILTER: &str = "IDX_LOG";

/// File stem of the rolling log when none can be derived from the path
pub const DEFAULT_LOG_FILE_STEM: &str = "idx";

// ============================================================================
// SITE AND EVENTS CONSTANTS
// ============================================================================

/// Blog id of a single-site install
pub const DEFAULT_BLOG_ID: u64 = 1;

/// Default event channel capacity
pub const DEFAULT_EVENT_CAPACITY: usize = 1024;
