//! Errors raised while building or decoding a catalog

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Invalid catalog document: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid template {id}: {reason}")]
    InvalidTemplate { id: String, reason: String },

    #[error("Duplicate template id: {0}")]
    DuplicateId(String),
}
