//! Request-handling logic shared by the HTTP handlers.
//!
//! Services validate presence of required fields, issue a single store round
//! trip, and map the outcome onto [`ServiceError`]. They hold no state across
//! requests besides the injected store and notifier handles.

mod auth;
mod error;
mod notify;
mod profile;

pub use auth::AuthService;
pub use error::ServiceError;
pub use notify::{LogNotifier, NotificationService};
pub use profile::{Profile, ProfileService};

/// A required field is missing when absent or empty; nothing is trimmed.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::store::{StoreError, User, UserMutation, UserQuery, UserStore};
    use async_trait::async_trait;

    /// Store whose every call fails like a dropped database connection.
    pub(crate) struct BrokenStore;

    #[async_trait]
    impl UserStore for BrokenStore {
        async fn query(&self, _query: UserQuery<'_>) -> Result<Vec<User>, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn mutate(&self, _mutation: UserMutation<'_>) -> Result<u64, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn ping(&self) -> Result<(), StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolTimedOut))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::present;

    #[test]
    fn present_rejects_absent_and_empty() {
        assert_eq!(present(None), None);
        assert_eq!(present(Some("")), None);
        assert_eq!(present(Some(" ")), Some(" "));
        assert_eq!(present(Some("alice")), Some("alice"));
    }
}
