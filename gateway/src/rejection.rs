use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use error::{AuthError, ErrorResponse};
use thiserror::Error;

/// Errors returned to HTTP clients.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Auth(err) = self;

        let status = match &err {
            AuthError::Forbidden => StatusCode::FORBIDDEN,
            e if e.is_verification_failure() => StatusCode::UNAUTHORIZED,
            AuthError::Unauthorized => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::from(err))).into_response()
    }
}
