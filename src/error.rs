use std::path::PathBuf;

use thiserror::Error;

use crate::models::room::RoomSummary;

/// Failures of the record store backing the repository.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed hotel record {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode hotel {id}: {source}")]
    Encode {
        id: u64,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A single shape violation in a request body.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct FieldError {
    pub msg: String,
    pub path: String,
    pub location: &'static str,
}

impl FieldError {
    pub fn body(path: impl Into<String>, msg: impl Into<String>) -> Self {
        FieldError {
            msg: msg.into(),
            path: path.into(),
            location: "body",
        }
    }
}

#[derive(Debug, Error)]
pub enum HotelError {
    /// Request body failed shape validation
    #[error("invalid request body ({} errors)", .0.len())]
    Invalid(Vec<FieldError>),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid hotel ID. It must be a number.")]
    InvalidId,

    #[error("Hotel with this ID already exists.")]
    Conflict(u64),

    #[error("Hotel not found.")]
    NotFound,

    #[error("Room not found.")]
    RoomNotFound {
        requested_slug: String,
        available_rooms: Vec<RoomSummary>,
    },

    #[error("No image file uploaded.")]
    MissingUpload,

    #[error("Too many files. At most {0} images can be uploaded at once.")]
    TooManyFiles(usize),

    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl HotelError {
    /// Whether the error is the server's fault rather than the caller's.
    pub fn is_internal(&self) -> bool {
        matches!(self, HotelError::Storage(_))
    }
}
