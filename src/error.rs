//! Error types for idl-harvest

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for idl-harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("IDL not found for {0}")]
    IdlNotFound(String),

    #[error("Failed to decompress IDL data: {0}")]
    DecompressionError(String),

    #[error("Failed to parse IDL JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("RPC error: {0}")]
    RpcError(#[from] solana_client::client_error::ClientError),

    #[error("Invalid program ID: {0}")]
    InvalidProgramId(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Failed to read program IDs from {}: {source}", .path.display())]
    InputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for idl-harvest operations
pub type HarvestResult<T> = Result<T, HarvestError>;
