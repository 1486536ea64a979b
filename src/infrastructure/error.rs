// src/infrastructure/error.rs
use crate::domain::error::DomainError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Host process error: {0}")]
    HostProcess(String),

    #[error("Host manifest error: {0}")]
    Manifest(String),

    #[error("Framing error: {0}")]
    Framing(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

// Implement conversion from infrastructure errors to domain errors
impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::HostProcess(msg) => DomainError::HostUnreachable(msg),
            InfrastructureError::Manifest(msg) => DomainError::HostUnreachable(msg),
            InfrastructureError::Framing(msg) => DomainError::ProtocolViolation(msg),
            InfrastructureError::Serialization(msg) => DomainError::SerializationError(msg),
        }
    }
}
