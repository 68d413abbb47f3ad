//! Persistence for user records.
//!
//! The store executes exactly the read or write it is asked for and reports
//! row-level outcomes: matching rows for queries, an affected-row count for
//! mutations. It performs no business validation. Username uniqueness is the
//! one invariant enforced here, surfaced as [`StoreError::Conflict`].

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::{PgUserStore, PoolConfig, SCHEMA_SQL};

use async_trait::async_trait;
use thiserror::Error;

/// A persisted user record, mapped once at the store boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
}

impl User {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Read predicates supported by [`UserStore::query`].
#[derive(Clone, Copy, Debug)]
pub enum UserQuery<'a> {
    ByUsername(&'a str),
    /// Exact match on both columns; passwords are compared verbatim.
    ByCredentials {
        username: &'a str,
        password: &'a str,
    },
}

/// Write operations supported by [`UserStore::mutate`].
#[derive(Clone, Copy, Debug)]
pub enum UserMutation<'a> {
    Insert(&'a User),
    Rename {
        username: &'a str,
        new_username: &'a str,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The write would break username uniqueness.
    #[error("username already exists")]
    Conflict,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Return every record matching the predicate.
    async fn query(&self, query: UserQuery<'_>) -> Result<Vec<User>, StoreError>;

    /// Apply a write and return the number of affected rows.
    async fn mutate(&self, mutation: UserMutation<'_>) -> Result<u64, StoreError>;

    /// Round trip to the backend without touching any record.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// First row for a predicate, if any.
///
/// # Errors
/// Propagates the store error unchanged.
pub async fn find_one(
    store: &dyn UserStore,
    query: UserQuery<'_>,
) -> Result<Option<User>, StoreError> {
    Ok(store.query(query).await?.into_iter().next())
}

/// Detect a Postgres unique violation (SQLSTATE 23505).
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().is_some_and(|code| code.as_ref() == "23505"),
        _ => false,
    }
}
