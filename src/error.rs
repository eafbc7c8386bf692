use thiserror::Error;

/// Unified error type for go-reqver operations
#[derive(Error, Debug)]
pub enum ReqverError {
    #[error("Version format error: {0}")]
    Format(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Toolchain query failed: {0}")]
    Toolchain(String),

    #[error("Config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in go-reqver
pub type Result<T> = std::result::Result<T, ReqverError>;

impl ReqverError {
    /// Create a version format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        ReqverError::Format(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReqverError::Config(msg.into())
    }

    /// Create a toolchain error with context
    pub fn toolchain(msg: impl Into<String>) -> Self {
        ReqverError::Toolchain(msg.into())
    }

    /// Returns true for errors raised while decomposing a version string
    pub fn is_format(&self) -> bool {
        matches!(self, ReqverError::Format(_))
    }
}
