//! Error handling for fieldlog

/// Result type for logger operations
pub type LogResult<T> = Result<T, LogError>;

/// Error type for logger operations
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    /// A required receiver or argument was absent
    #[error("Argument is null: {argument}")]
    NullArgument {
        /// Name of the missing argument
        argument: &'static str,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filter parsing error
    #[error("Invalid filter: {0}")]
    Filter(String),

    /// Global subscriber could not be installed
    #[error("Logger initialization failed: {0}")]
    Init(String),

    /// Value could not be converted into a property value
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl LogError {
    /// Create a null-argument error naming the missing parameter
    #[must_use]
    pub fn null_argument(argument: &'static str) -> Self {
        Self::NullArgument { argument }
    }

    /// Check whether this error was caused by a missing argument
    #[must_use]
    pub fn is_null_argument(&self) -> bool {
        matches!(self, Self::NullArgument { .. })
    }
}
