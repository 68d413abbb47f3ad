//! Request/response bodies.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Every non-profile response carries a single human-readable message.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Fields are optional so that absence reaches the service as a validation
/// failure instead of a deserialization rejection.
#[derive(ToSchema, Deserialize, Debug, Default)]
pub struct Credentials {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(ToSchema, Deserialize, Debug, Default)]
pub struct ForgotPasswordRequest {
    pub username: Option<String>,
}

#[derive(IntoParams, Deserialize, Debug, Default)]
#[into_params(parameter_in = Query)]
pub struct ProfileQuery {
    /// Username whose profile to return.
    pub username: Option<String>,
}

#[derive(ToSchema, Deserialize, Debug, Default)]
pub struct ProfileUpdateRequest {
    pub username: Option<String>,
    #[serde(rename = "newUsername")]
    pub new_username: Option<String>,
}

#[derive(ToSchema, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ProfileResponse {
    pub username: String,
}
