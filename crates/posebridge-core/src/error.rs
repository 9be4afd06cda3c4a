//! Error types for posebridge

use thiserror::Error;

/// Errors shared across the posebridge workspace
#[derive(Error, Debug)]
pub enum BridgeError {
    // Wire errors
    #[error("Invalid wire format: {0}")]
    InvalidWireFormat(String),

    #[error("Buffer too short: expected {expected}, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("Unsupported wire version: {0}")]
    UnsupportedVersion(u8),

    // Transport errors
    #[error("Transport error: {0}")]
    Transport(String),

    // Runtime errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for posebridge operations
pub type BridgeResult<T> = Result<T, BridgeError>;
