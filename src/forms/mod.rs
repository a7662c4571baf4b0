//! Form definitions turning raw request input into domain values.

use thiserror::Error;
use validator::ValidationErrors;

pub mod list_query;
pub mod upload;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid field name")]
    InvalidFieldName,

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("invalid csv: {0}")]
    Csv(#[from] csv::Error),
}
