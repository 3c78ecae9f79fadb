use thiserror::Error;

use crate::infrastructure::StoreError;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("owner not found: {0}")]
    OwnerNotFound(String),
    #[error("place not found: {0}")]
    PlaceNotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("linkage failed: {0}")]
    LinkageFailure(String),
    #[error("unlinkage failed: {0}")]
    UnlinkageFailure(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn owner_not_found(message: impl Into<String>) -> Self {
        Self::OwnerNotFound(message.into())
    }

    pub fn place_not_found(message: impl Into<String>) -> Self {
        Self::PlaceNotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn linkage_failure(message: impl Into<String>) -> Self {
        Self::LinkageFailure(message.into())
    }

    pub fn unlinkage_failure(message: impl Into<String>) -> Self {
        Self::UnlinkageFailure(message.into())
    }

    /// The message the HTTP layer puts in the response body, without the
    /// variant prefix that `Display` adds.
    pub fn detail(&self) -> &str {
        match self {
            Self::Validation(detail)
            | Self::OwnerNotFound(detail)
            | Self::PlaceNotFound(detail)
            | Self::Conflict(detail)
            | Self::Unauthorized(detail)
            | Self::LinkageFailure(detail)
            | Self::UnlinkageFailure(detail)
            | Self::Storage(detail) => detail,
        }
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        Self::Storage(err.to_string())
    }
}
