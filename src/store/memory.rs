//! In-process store used by tests and `memory://` local runs.

use super::{StoreError, User, UserMutation, UserQuery, UserStore};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Keeps `username -> password`; the map key enforces uniqueness the same way
/// the `users` primary key does in Postgres.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<BTreeMap<String, String>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(
                users
                    .into_iter()
                    .map(|user| (user.username, user.password))
                    .collect(),
            ),
        }
    }

    /// Snapshot of every stored record, ordered by username.
    pub async fn users(&self) -> Vec<User> {
        self.users
            .read()
            .await
            .iter()
            .map(|(username, password)| User::new(username.clone(), password.clone()))
            .collect()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn query(&self, query: UserQuery<'_>) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().await;

        let row = match query {
            UserQuery::ByUsername(username) => users.get_key_value(username),
            UserQuery::ByCredentials { username, password } => users
                .get_key_value(username)
                .filter(|(_, stored)| stored.as_str() == password),
        };

        Ok(row
            .map(|(username, password)| User::new(username.clone(), password.clone()))
            .into_iter()
            .collect())
    }

    async fn mutate(&self, mutation: UserMutation<'_>) -> Result<u64, StoreError> {
        let mut users = self.users.write().await;

        match mutation {
            UserMutation::Insert(user) => {
                if users.contains_key(&user.username) {
                    return Err(StoreError::Conflict);
                }
                users.insert(user.username.clone(), user.password.clone());
                Ok(1)
            }
            UserMutation::Rename {
                username,
                new_username,
            } => {
                if !users.contains_key(username) {
                    return Ok(0);
                }
                if username != new_username && users.contains_key(new_username) {
                    return Err(StoreError::Conflict);
                }
                if let Some(password) = users.remove(username) {
                    users.insert(new_username.to_string(), password);
                }
                Ok(1)
            }
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn insert_rejects_duplicate_username() {
        let store = MemoryUserStore::new();
        let alice = User::new("alice", "p1");

        assert!(matches!(
            store.mutate(UserMutation::Insert(&alice)).await,
            Ok(1)
        ));
        assert!(matches!(
            store
                .mutate(UserMutation::Insert(&User::new("alice", "p2")))
                .await,
            Err(StoreError::Conflict)
        ));
        assert_eq!(store.users().await, vec![alice]);
    }

    #[tokio::test]
    async fn credentials_must_match_exactly() {
        let store = MemoryUserStore::with_users([User::new("alice", "p1")]);

        let hit = store
            .query(UserQuery::ByCredentials {
                username: "alice",
                password: "p1",
            })
            .await
            .unwrap_or_default();
        assert_eq!(hit.len(), 1);

        let miss = store
            .query(UserQuery::ByCredentials {
                username: "alice",
                password: "P1",
            })
            .await
            .unwrap_or_default();
        assert!(miss.is_empty());
    }

    #[tokio::test]
    async fn rename_reports_affected_rows() {
        let store = MemoryUserStore::with_users([User::new("alice", "p1")]);

        let missing = store
            .mutate(UserMutation::Rename {
                username: "bob",
                new_username: "robert",
            })
            .await;
        assert!(matches!(missing, Ok(0)));

        let renamed = store
            .mutate(UserMutation::Rename {
                username: "alice",
                new_username: "alicia",
            })
            .await;
        assert!(matches!(renamed, Ok(1)));
        assert_eq!(store.users().await, vec![User::new("alicia", "p1")]);
    }

    #[tokio::test]
    async fn rename_onto_existing_username_conflicts() {
        let store =
            MemoryUserStore::with_users([User::new("alice", "p1"), User::new("bob", "p2")]);

        let result = store
            .mutate(UserMutation::Rename {
                username: "alice",
                new_username: "bob",
            })
            .await;
        assert!(matches!(result, Err(StoreError::Conflict)));
        assert_eq!(store.users().await.len(), 2);
    }
}
