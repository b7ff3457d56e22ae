pub mod api;
pub mod main;

use thiserror::Error;

use crate::repository::errors::RepositoryError;

#[derive(Debug, Error)]
/// Errors surfaced by the service layer.
pub enum ServiceError {
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
