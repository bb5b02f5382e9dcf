use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::document::DocumentError;
use crate::user::errors::AuthError;

pub mod health;
pub mod list_documents;
pub mod login;
pub mod me;
pub mod register;

/// API-level error with the wire shape `{"detail": ...}`.
///
/// `Unauthorized` carries no detail of its own: missing, malformed,
/// expired, and forged credentials all produce the same body, so the
/// response never reveals which check failed. Internal causes are logged
/// server-side and replaced with a generic message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    UnprocessableEntity(String),
    Unauthorized,
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(detail) => error_response(StatusCode::BAD_REQUEST, detail),
            ApiError::UnprocessableEntity(detail) => {
                error_response(StatusCode::UNPROCESSABLE_ENTITY, detail)
            }
            ApiError::Unauthorized => {
                let mut response = error_response(
                    StatusCode::UNAUTHORIZED,
                    "Not authenticated".to_string(),
                );
                response.headers_mut().insert(
                    header::WWW_AUTHENTICATE,
                    HeaderValue::from_static("Bearer"),
                );
                response
            }
            ApiError::InternalServerError(cause) => {
                tracing::error!(%cause, "Request failed with internal error");
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::DuplicateUser(_) | AuthError::InvalidCredentials => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::Unauthenticated => ApiError::Unauthorized,
            AuthError::InvalidUsername(_) | AuthError::InvalidEmail(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            AuthError::Password(_) | AuthError::Token(_) | AuthError::Store(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<DocumentError> for ApiError {
    fn from(err: DocumentError) -> Self {
        ApiError::InternalServerError(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct ErrorBody {
    detail: String,
}

fn error_response(status: StatusCode, detail: String) -> Response {
    (status, Json(ErrorBody { detail })).into_response()
}
