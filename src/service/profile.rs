//! Profile read and rename.

use super::{
    error::{MISSING_RENAME_FIELDS, MISSING_USERNAME},
    present, ServiceError,
};
use crate::store::{find_one, UserMutation, UserQuery, UserStore};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Public view of a user; the password never leaves the service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Profile {
    pub username: String,
}

#[derive(Clone)]
pub struct ProfileService {
    store: Arc<dyn UserStore>,
}

impl ProfileService {
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    /// # Errors
    /// `Validation` on a missing username, `NotFound` for an unknown user,
    /// `Internal` on store failure.
    #[instrument(skip(self))]
    pub async fn get_profile(&self, username: Option<&str>) -> Result<Profile, ServiceError> {
        let Some(username) = present(username) else {
            return Err(ServiceError::Validation(MISSING_USERNAME));
        };

        find_one(self.store.as_ref(), UserQuery::ByUsername(username))
            .await?
            .map(|user| Profile {
                username: user.username,
            })
            .ok_or(ServiceError::NotFound)
    }

    /// Rename `username` to `new_username`.
    ///
    /// Whether `new_username` already belongs to someone else is not checked
    /// up front; a collision rejected by the store surfaces as `Internal`.
    ///
    /// # Errors
    /// `Validation` on a missing field, `NotFound` when no row was renamed,
    /// `Internal` on store failure.
    #[instrument(skip(self))]
    pub async fn update_profile(
        &self,
        username: Option<&str>,
        new_username: Option<&str>,
    ) -> Result<(), ServiceError> {
        let (Some(username), Some(new_username)) = (present(username), present(new_username))
        else {
            return Err(ServiceError::Validation(MISSING_RENAME_FIELDS));
        };

        let affected = self
            .store
            .mutate(UserMutation::Rename {
                username,
                new_username,
            })
            .await?;

        if affected == 0 {
            return Err(ServiceError::NotFound);
        }

        debug!(affected, "profile renamed");
        Ok(())
    }
}
