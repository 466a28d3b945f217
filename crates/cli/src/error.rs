//! Error types for padctl

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid hex input '{input}': {reason}")]
    InvalidHex { input: String, reason: String },

    #[error("Invalid report: {0}")]
    InvalidReport(#[from] hid_xbox360_protocol::ProtocolError),

    #[error("Invalid configuration {path}: {reason}")]
    InvalidConfiguration { path: PathBuf, reason: String },

    #[error("Device error: {0}")]
    Device(#[from] padbridge_hid::IoError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidHex { .. } | Self::InvalidReport(_) => 2,
            Self::InvalidConfiguration { .. } => 3,
            Self::Device(_) | Self::JsonError(_) => 1,
        }
    }
}
