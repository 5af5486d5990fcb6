use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::Role;

/// Errors returned by catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Permission denied: {username} ({role}) may not {operation}")]
    PermissionDenied {
        username: String,
        role: Role,
        operation: &'static str,
    },
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Product ID already exists: {0}")]
    DuplicateId(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CatalogError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => CatalogError::NotFound(id),
            FrameworkError::AlreadyExists(id) => CatalogError::DuplicateId(id),
            FrameworkError::Validation(msg) => CatalogError::InvalidArgument(msg),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                CatalogError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
