//! Error types for kindred.

use thiserror::Error;

/// Errors that can occur in kindred operations.
#[derive(Error, Debug)]
pub enum KindredError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Not logged in. Run `kindred login` first")]
    NotLoggedIn,

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid family member: {0}")]
    InvalidMember(String),

    #[error("Unknown relation '{0}'")]
    UnknownRelation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for kindred operations.
pub type KindredResult<T> = Result<T, KindredError>;
