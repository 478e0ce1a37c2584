//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the contextual variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the indexable pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// A component definition could not be introspected
    #[error("Reflection error for component '{component}': {message}")]
    Reflection {
        /// Id of the component that failed introspection
        component: String,
        /// Description of the failure
        message: String,
    },

    /// A builder could not produce a result for an object
    #[error("Builder '{builder}' failed: {message}")]
    Builder {
        /// Name of the failing builder
        builder: String,
        /// Description of the failure
        message: String,
    },

    /// Persisting an indexable failed
    #[error("Persist error: {message}")]
    Persist {
        /// Description of the failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// An indexable could not be located or created
    #[error("Lookup error: {message}")]
    Lookup {
        /// Description of the failure
        message: String,
    },

    /// Component registry misuse (duplicate or unknown ids)
    #[error("Registry error: {message}")]
    Registry {
        /// Description of the failure
        message: String,
    },

    /// Realizing compiled bindings into instances failed
    #[error("Injection error: {message}")]
    Injection {
        /// Description of the failure
        message: String,
    },

    /// A required collaborator was not wired
    #[error("Missing collaborator: {name}")]
    MissingCollaborator {
        /// Name of the missing collaborator
        name: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Pipeline error creation methods
impl Error {
    /// Create a reflection error for a component
    pub fn reflection<C: Into<String>, S: Into<String>>(component: C, message: S) -> Self {
        Self::Reflection {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a builder error
    pub fn builder<B: Into<String>, S: Into<String>>(builder: B, message: S) -> Self {
        Self::Builder {
            builder: builder.into(),
            message: message.into(),
        }
    }

    /// Create a persist error
    pub fn persist<S: Into<String>>(message: S) -> Self {
        Self::Persist {
            message: message.into(),
            source: None,
        }
    }

    /// Create a persist error with source
    pub fn persist_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Persist {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a lookup error
    pub fn lookup<S: Into<String>>(message: S) -> Self {
        Self::Lookup {
            message: message.into(),
        }
    }

    /// Whether the error is a recoverable builder failure
    pub fn is_builder_failure(&self) -> bool {
        matches!(self, Self::Builder { .. })
    }
}

// Container error creation methods
impl Error {
    /// Create a registry error
    pub fn registry<S: Into<String>>(message: S) -> Self {
        Self::Registry {
            message: message.into(),
        }
    }

    /// Create an injection error
    pub fn injection<S: Into<String>>(message: S) -> Self {
        Self::Injection {
            message: message.into(),
        }
    }

    /// Create a missing collaborator error
    pub fn missing_collaborator<S: Into<String>>(name: S) -> Self {
        Self::MissingCollaborator { name: name.into() }
    }
}

// Configuration and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
