use crate::store::StoreError;
use thiserror::Error;

pub(crate) const MISSING_CREDENTIALS: &str = "Missing username or password";
pub(crate) const MISSING_USERNAME: &str = "Missing username";
pub(crate) const MISSING_RENAME_FIELDS: &str = "Missing username or newUsername";

/// Outcome classes every service operation maps into.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A required field was absent or empty.
    #[error("{0}")]
    Validation(&'static str),
    #[error("Username already exists")]
    Conflict,
    #[error("Invalid username or password")]
    Auth,
    #[error("User not found")]
    NotFound,
    /// Unexpected store or collaborator failure; the source is logged, never returned.
    #[error("Internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ServiceError {
    pub(crate) fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        Self::internal(err)
    }
}
