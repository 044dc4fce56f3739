use crate::ReactError;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

impl IntoResponse for ReactError {
    fn into_response(self) -> Response {
        let status = match self {
            ReactError::SessionLimit { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ReactError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ReactError::Config(_) => StatusCode::BAD_REQUEST,
            ref other => {
                tracing::error!(error = %other, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
