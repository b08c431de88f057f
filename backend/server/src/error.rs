use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use cart::orders::OrderResponse;
use thiserror::Error;
use tracing::error;

/// Generic retry-later message returned for any upstream failure. The real
/// cause stays in the server log.
pub const UPSTREAM_MESSAGE: &str = "Không thể gửi đơn hàng. Vui lòng thử lại.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("Upstream append failed: {0}")]
    Upstream(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(message) => (StatusCode::BAD_REQUEST, message),
            AppError::Upstream(cause) => {
                error!("Order submission error: {cause}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    UPSTREAM_MESSAGE.to_string(),
                )
            }
        };

        (status, Json(OrderResponse::failure(message))).into_response()
    }
}
