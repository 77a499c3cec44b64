use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid field path: '{0}' (expected 'category.field')")]
    InvalidFieldPath(String),

    #[error("unknown measurement category: {0}")]
    UnknownCategory(String),

    #[error("unknown field '{field}' in category '{category}'")]
    UnknownField { category: String, field: String },

    #[error("consultation {0} is finalized and can no longer change")]
    ConsultationFinalized(Uuid),
}
