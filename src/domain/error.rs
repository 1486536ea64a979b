// src/domain/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid tag: {0}")]
    InvalidTag(String),

    #[error("Invalid version: {0}")]
    InvalidVersion(String),

    #[error("Native host unreachable: {0}")]
    HostUnreachable(String),

    #[error("Protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("Serialization failed: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn context<C: Into<String>>(self, context: C) -> Self {
        match self {
            DomainError::Other(msg) => DomainError::Other(format!("{}: {}", context.into(), msg)),
            DomainError::HostUnreachable(msg) => {
                DomainError::HostUnreachable(format!("{}: {}", context.into(), msg))
            }
            DomainError::ProtocolViolation(msg) => {
                DomainError::ProtocolViolation(format!("{}: {}", context.into(), msg))
            }
            err => DomainError::Other(format!("{}: {}", context.into(), err)),
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        DomainError::SerializationError(err.to_string())
    }
}
