use thiserror::Error;

use crate::kind::EntityKind;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("{kind} payload has no usable `_id`")]
    MissingId { kind: EntityKind },

    #[error("invalid mediafile payload: {0}")]
    InvalidMediafile(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ModelError>;
