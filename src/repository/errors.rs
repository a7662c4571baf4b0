use thiserror::Error;

use crate::domain::record::RecordError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Collection not found: {0}")]
    NotFound(String),

    #[error("Data source unavailable: {0}")]
    Unavailable(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(format!("JSON error: {err}"))
    }
}

impl From<RecordError> for RepositoryError {
    fn from(err: RecordError) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}
