//! Error types shared across Subsmith crates.

use std::path::PathBuf;

/// Top-level error type for Subsmith operations.
#[derive(Debug, thiserror::Error)]
pub enum SubsmithError {
    /// Transcription was requested before any audio was loaded.
    #[error("No audio input selected")]
    NoInputSelected,

    /// The audio payload could not be read into transmittable form.
    #[error("Failed to read audio at {path}: {source}")]
    ReadFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The transcription service returned a non-array or
    /// schema-violating payload. Nothing is committed.
    #[error("Malformed transcription response: {message}")]
    MalformedResponse { message: String },

    /// The transcription service call itself failed (network, quota,
    /// auth). The message is surfaced verbatim; there is no retry.
    #[error("Transcription service error: {message}")]
    Service { message: String },

    /// A transcription request is already outstanding for this session.
    #[error("A transcription is already in progress")]
    TranscriptionInFlight,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using SubsmithError.
pub type SubsmithResult<T> = Result<T, SubsmithError>;

impl SubsmithError {
    pub fn malformed_response(msg: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: msg.into(),
        }
    }

    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service {
            message: msg.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    pub fn read_failure(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailure {
            path: path.into(),
            source,
        }
    }
}
