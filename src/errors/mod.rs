//! Error handling module for the gripe backend.
//!
//! Storage faults are typed in [`StoreError`]; handlers convert them into
//! [`AppError`], which maps to an HTTP status and a plain-text body.

use std::path::{Path, PathBuf};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Failure reading or writing one of the JSON documents.
#[derive(Debug)]
pub enum StoreError {
    /// The file could not be read or written
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file exists but does not hold the expected JSON shape
    Corrupted {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The in-memory document could not be serialized
    Encode(serde_json::Error),
    /// Every generated ID collided with an existing one
    IdsExhausted,
}

impl StoreError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_corrupted(&self) -> bool {
        matches!(self, StoreError::Corrupted { .. })
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
            StoreError::Corrupted { path, source } => {
                write!(f, "corrupted store {}: {}", path.display(), source)
            }
            StoreError::Encode(source) => write!(f, "failed to encode document: {}", source),
            StoreError::IdsExhausted => write!(f, "could not generate a unique gripe ID"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            StoreError::Corrupted { source, .. } => Some(source),
            StoreError::Encode(source) => Some(source),
            StoreError::IdsExhausted => None,
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// A data file holds malformed JSON and cannot be curated until repaired
    CorruptedStore(PathBuf),
    /// Reading or writing a data file failed
    Storage(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::CorruptedStore(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message shown to the client.
    pub fn message(&self) -> String {
        match self {
            AppError::CorruptedStore(path) => format!(
                "The data file {} is corrupted and must be repaired by hand.",
                path.display()
            ),
            AppError::Storage(_) => "Storage error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::CorruptedStore(path) => write!(f, "corrupted store: {}", path.display()),
            AppError::Storage(msg) => write!(f, "storage error: {}", msg),
            AppError::Internal(msg) => write!(f, "internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Corrupted { path, source } => {
                tracing::warn!("Corrupted store {:?}: {}", path, source);
                AppError::CorruptedStore(path)
            }
            StoreError::IdsExhausted => {
                tracing::error!("Gripe ID space exhausted");
                AppError::Internal(StoreError::IdsExhausted.to_string())
            }
            other => {
                tracing::error!("Storage error: {:?}", other);
                AppError::Storage(other.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), self.message()).into_response()
    }
}
