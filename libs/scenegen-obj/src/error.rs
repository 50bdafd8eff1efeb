//! # Export Errors
//!
//! Error types for OBJ serialization.

use thiserror::Error;

/// Errors that can occur during OBJ export.
#[derive(Debug, Error)]
pub enum ObjError {
    /// Underlying I/O failure; the run aborts, nothing is retried
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The mesh references vertices that do not exist
    #[error("Invalid mesh: {message}")]
    InvalidMesh { message: String },
}

impl ObjError {
    /// Creates an invalid mesh error.
    pub fn invalid_mesh(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }
}
