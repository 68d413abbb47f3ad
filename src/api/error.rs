//! HTTP mapping for service outcomes.

use super::handlers::types::MessageResponse;
use crate::service::ServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, error};

impl ServiceError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            // Duplicate signup is reported as a plain bad request.
            Self::Validation(_) | Self::Conflict => StatusCode::BAD_REQUEST,
            Self::Auth => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();

        if let Self::Internal(source) = &self {
            error!("Internal error: {source:#}");
        } else {
            debug!(status = status.as_u16(), "request rejected: {self}");
        }

        // Display of Internal is the generic message, never the source.
        (status, Json(MessageResponse::new(self.to_string()))).into_response()
    }
}
