/// Error types for decoding and validating cloud properties
use std::path::PathBuf;

use thiserror::Error;

use crate::schema::{FieldKind, ResourceKind};
use crate::tags::TagError;

/// Errors surfaced by the cloud-properties model
#[derive(Debug, Error)]
pub enum PropertiesError {
    /// The raw property payload was not a JSON object
    #[error("{kind} cloud properties must be an object, got {found}")]
    NotAnObject { kind: ResourceKind, found: &'static str },

    /// A recognised key held a value of the wrong JSON type
    #[error("{kind} cloud property '{key}' must be {expected}, {problem}")]
    FieldType {
        kind: ResourceKind,
        key: &'static str,
        expected: FieldKind,
        problem: String,
    },

    /// The value passed the schema check but could not be converted
    #[error("Decoding {kind} cloud properties: {source}")]
    Decode {
        kind: ResourceKind,
        #[source]
        source: serde_json::Error,
    },

    /// A tag violated the naming rules
    #[error("Invalid tags: {0}")]
    InvalidTag(#[from] TagError),

    /// The resource kind name is not one we know about
    #[error("Unknown resource kind: {0}")]
    UnknownKind(String),

    /// Reading raw properties from disk failed
    #[error("Reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raw input was not valid JSON
    #[error("Parsing JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PropertiesError {
    /// True for errors produced by validation rather than decoding.
    pub fn is_validation(&self) -> bool {
        matches!(self, PropertiesError::InvalidTag(_))
    }
}
