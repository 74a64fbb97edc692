use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Rejections produced before a handler body runs.
#[derive(Debug, Error, PartialEq)]
pub enum APIErrors {
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Permission denied")]
    Forbidden,
    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for APIErrors {
    fn into_response(self) -> Response {
        let status = match self {
            APIErrors::Unauthorized => StatusCode::UNAUTHORIZED,
            APIErrors::Forbidden => StatusCode::FORBIDDEN,
            APIErrors::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, self.to_string()).into_response()
    }
}
