// ABOUTME: Container store error types with SNAFU pattern.
// ABOUTME: Exposes an error kind for programmatic handling.

use snafu::Snafu;

use crate::types::ContainerId;

/// Errors from store mutation and lookup.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum StoreError {
    #[snafu(display("container already exists: {id}"))]
    AlreadyExists { id: ContainerId },

    #[snafu(display("container not found: {id}"))]
    NotFound { id: ContainerId },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorKind {
    AlreadyExists,
    NotFound,
}

impl StoreError {
    pub fn kind(&self) -> StoreErrorKind {
        match self {
            StoreError::AlreadyExists { .. } => StoreErrorKind::AlreadyExists,
            StoreError::NotFound { .. } => StoreErrorKind::NotFound,
        }
    }

    /// The container the error refers to.
    pub fn container_id(&self) -> &ContainerId {
        match self {
            StoreError::AlreadyExists { id } | StoreError::NotFound { id } => id,
        }
    }
}
