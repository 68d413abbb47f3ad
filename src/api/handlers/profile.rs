use super::types::{MessageResponse, ProfileQuery, ProfileResponse, ProfileUpdateRequest};
use crate::service::ProfileService;
use axum::{
    extract::{Extension, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/profile",
    params(ProfileQuery),
    responses(
        (status = 200, description = "Profile of the requested user", body = ProfileResponse),
        (status = 400, description = "Missing username", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "profile"
)]
#[instrument(skip_all)]
pub async fn get_profile(
    profiles: Extension<ProfileService>,
    query: Option<Query<ProfileQuery>>,
) -> Response {
    let query = query.map(|Query(params)| params).unwrap_or_default();

    match profiles.get_profile(query.username.as_deref()).await {
        Ok(profile) => (
            StatusCode::OK,
            Json(ProfileResponse {
                username: profile.username,
            }),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/profile",
    request_body = ProfileUpdateRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = MessageResponse),
        (status = 400, description = "Missing username or newUsername", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "profile"
)]
#[instrument(skip_all)]
pub async fn update_profile(
    profiles: Extension<ProfileService>,
    payload: Option<Json<ProfileUpdateRequest>>,
) -> Response {
    let request = payload.map(|Json(body)| body).unwrap_or_default();

    match profiles
        .update_profile(
            request.username.as_deref(),
            request.new_username.as_deref(),
        )
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse::new("Profile updated successfully")),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
