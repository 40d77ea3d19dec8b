//! Error types for messaging operations

use thiserror::Error;

/// Errors that can occur in messaging operations
#[derive(Debug, Error)]
pub enum RpcError {
    /// NATS connection error
    #[error("NATS connection error: {0}")]
    Connection(String),

    /// NATS publish error
    #[error("NATS publish error: {0}")]
    Publish(String),

    /// NATS subscribe error
    #[error("NATS subscribe error: {0}")]
    Subscribe(String),

    /// Request-reply error
    #[error("NATS request error: {0}")]
    Request(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Deserialization error
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

/// Result type for messaging operations
pub type RpcResult<T> = Result<T, RpcError>;

impl From<async_nats::Error> for RpcError {
    fn from(err: async_nats::Error) -> Self {
        RpcError::Connection(err.to_string())
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::Serialization(err.to_string())
    }
}
