use super::types::MessageResponse;
use axum::Json;

// Undocumented landing route.
pub async fn root() -> &'static str {
    "Hello from the backend!"
}

#[utoipa::path(
    get,
    path = "/api/test",
    responses(
        (status = 200, description = "Connectivity check used by the web UI", body = MessageResponse),
    ),
    tag = "demo"
)]
pub async fn api_test() -> Json<MessageResponse> {
    Json(MessageResponse::new("Test API call successful!"))
}
