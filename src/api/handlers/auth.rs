use super::types::{Credentials, ForgotPasswordRequest, MessageResponse};
use crate::service::AuthService;
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::instrument;

#[utoipa::path(
    post,
    path = "/auth/signup",
    request_body = Credentials,
    responses(
        (status = 201, description = "User created successfully", body = MessageResponse),
        (status = 400, description = "Missing username or password, or username already exists", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn signup(auth: Extension<AuthService>, payload: Option<Json<Credentials>>) -> Response {
    let credentials = payload.map(|Json(body)| body).unwrap_or_default();

    match auth
        .signup(
            credentials.username.as_deref(),
            credentials.password.as_deref(),
        )
        .await
    {
        Ok(()) => (
            StatusCode::CREATED,
            Json(MessageResponse::new("User created successfully")),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/auth/signin",
    request_body = Credentials,
    responses(
        (status = 200, description = "User signed in successfully", body = MessageResponse),
        (status = 400, description = "Missing username or password", body = MessageResponse),
        (status = 401, description = "Invalid username or password", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn signin(auth: Extension<AuthService>, payload: Option<Json<Credentials>>) -> Response {
    let credentials = payload.map(|Json(body)| body).unwrap_or_default();

    match auth
        .signin(
            credentials.username.as_deref(),
            credentials.password.as_deref(),
        )
        .await
    {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse::new("User signed in successfully")),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/auth/forgot-password",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Password reset email sent", body = MessageResponse),
        (status = 400, description = "Missing username", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse),
    ),
    tag = "auth"
)]
#[instrument(skip_all)]
pub async fn forgot_password(
    auth: Extension<AuthService>,
    payload: Option<Json<ForgotPasswordRequest>>,
) -> Response {
    let request = payload.map(|Json(body)| body).unwrap_or_default();

    match auth.forgot_password(request.username.as_deref()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(MessageResponse::new("Password reset email sent")),
        )
            .into_response(),
        Err(err) => err.into_response(),
    }
}
