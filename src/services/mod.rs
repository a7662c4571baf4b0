use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod list;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("form error: {0}")]
    Form(#[from] FormError),

    #[error("type constraint violated: {0}")]
    TypeConstraint(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
