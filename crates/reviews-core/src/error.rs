use reviews_sources::StoreError;
use thiserror::Error;

/// Reasons a submitted review body is rejected before it reaches the store
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Review body must be a JSON object")]
    NotAnObject,
    #[error("Title and rating are required")]
    MissingRequired,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("A review with id '{0}' already exists")]
    Conflict(String),

    #[error("Review '{0}' not found")]
    NotFound(String),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}
