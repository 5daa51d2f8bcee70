use thiserror::Error;

/// Unified error type for bump-version operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Patch error: {0}")]
    Patch(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Preflight check failed: {0}")]
    Preflight(String),

    #[error("Error running {step}: {detail}")]
    Command { step: String, detail: String },

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in bump-version
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        BumpError::Usage(msg.into())
    }

    /// Create a manifest error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        BumpError::Manifest(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        BumpError::Version(msg.into())
    }

    /// Create a patch error with context
    pub fn patch(msg: impl Into<String>) -> Self {
        BumpError::Patch(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a preflight error with context
    pub fn preflight(msg: impl Into<String>) -> Self {
        BumpError::Preflight(msg.into())
    }

    /// Create an external command error naming the failed step
    pub fn command(step: impl Into<String>, detail: impl Into<String>) -> Self {
        BumpError::Command {
            step: step.into(),
            detail: detail.into(),
        }
    }
}
