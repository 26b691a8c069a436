//! Error types for confc-core

use std::path::PathBuf;

/// Result type for confc-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while compiling a configuration document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} document at {path}: {message}")]
    DocumentParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Document root must be an object")]
    RootNotObject,

    #[error("Invalid project metadata at {path}: {message}")]
    ProjectMetadata { path: String, message: String },

    #[error("Unsupported value at {path}: {reason}")]
    UnsupportedValue { path: String, reason: String },

    #[error("Invalid dependency axis '{axis}' at {path}: expected 'mode' or 'type'")]
    InvalidAxis { path: String, axis: String },

    #[error("Duplicate name '{name}' in {path}")]
    DuplicateName { path: String, name: String },

    #[error("Invalid C++ standard '{token}'")]
    InvalidStandard { token: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn unsupported(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
