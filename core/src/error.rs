use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionError {
    /// A value of a kind the target store cannot represent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A contract violation surfaced at a runtime boundary
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    /// A URI that does not resolve to a target collection
    #[error("Invalid uri: {0}")]
    InvalidUri(String),

    /// Store failure reported by a handler without a structured error
    #[error("Execution error: {0}")]
    Execution(String),

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

/// Result type for action building and execution
pub type Result<T> = std::result::Result<T, ActionError>;
