//! Signup, signin and the password-reset stub.

use super::{
    error::{MISSING_CREDENTIALS, MISSING_USERNAME},
    present, NotificationService, ServiceError,
};
use crate::store::{find_one, StoreError, User, UserMutation, UserQuery, UserStore};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct AuthService {
    store: Arc<dyn UserStore>,
    notifier: Arc<dyn NotificationService>,
}

impl AuthService {
    #[must_use]
    pub fn new(store: Arc<dyn UserStore>, notifier: Arc<dyn NotificationService>) -> Self {
        Self { store, notifier }
    }

    /// Create a user.
    ///
    /// There is no existence pre-check: the store's uniqueness constraint is
    /// the only conflict signal, so concurrent signups for the same username
    /// yield exactly one success.
    ///
    /// # Errors
    /// `Validation` on a missing field, `Conflict` if the username is taken,
    /// `Internal` on store failure.
    #[instrument(skip(self, password))]
    pub async fn signup(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<(), ServiceError> {
        let (Some(username), Some(password)) = (present(username), present(password)) else {
            return Err(ServiceError::Validation(MISSING_CREDENTIALS));
        };

        let user = User::new(username, password);
        match self.store.mutate(UserMutation::Insert(&user)).await {
            Ok(_) => {
                debug!("user created");
                Ok(())
            }
            Err(StoreError::Conflict) => Err(ServiceError::Conflict),
            Err(err) => Err(err.into()),
        }
    }

    /// Verify a username/password pair. No session or token is issued.
    ///
    /// # Errors
    /// `Validation` on a missing field, `Auth` when no record matches both,
    /// `Internal` on store failure.
    #[instrument(skip(self, password))]
    pub async fn signin(
        &self,
        username: Option<&str>,
        password: Option<&str>,
    ) -> Result<(), ServiceError> {
        let (Some(username), Some(password)) = (present(username), present(password)) else {
            return Err(ServiceError::Validation(MISSING_CREDENTIALS));
        };

        let query = UserQuery::ByCredentials { username, password };
        match find_one(self.store.as_ref(), query).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::Auth),
        }
    }

    /// Confirm the user exists and hand a reset notice to the notifier.
    /// Never writes to the store.
    ///
    /// # Errors
    /// `Validation` on a missing field, `NotFound` for an unknown user,
    /// `Internal` on store or notifier failure.
    #[instrument(skip(self))]
    pub async fn forgot_password(&self, username: Option<&str>) -> Result<(), ServiceError> {
        let Some(username) = present(username) else {
            return Err(ServiceError::Validation(MISSING_USERNAME));
        };

        let Some(user) = find_one(self.store.as_ref(), UserQuery::ByUsername(username)).await?
        else {
            return Err(ServiceError::NotFound);
        };

        self.notifier
            .send_reset_notice(&user.username)
            .await
            .map_err(ServiceError::internal)
    }
}
