/*
 * Responsibility
 * - the request-terminating failures of the auth pipeline (AppError)
 * - IntoResponse (HTTP status + `{"message": ...}` body)
 * - conversion from authorizer outcomes
 */
use std::borrow::Cow;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::services::auth::AuthzError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Neither credential header carried a value.
    #[error("No token provided!")]
    MissingCredential,
    /// A credential was presented but failed validation.
    #[error("Unauthorized!")]
    InvalidCredential,
    #[error("User not found!")]
    SubjectNotFound,
    /// Authenticated, but without the role the route requires.
    #[error("{message}")]
    RoleDenied { message: Cow<'static, str> },
    /// Identity/role store failure; carries the underlying error text.
    #[error("{0}")]
    AuthorizerFault(String),
    /// A route that needs the subject was mounted outside the access middleware.
    #[error("authenticated context missing")]
    MissingAuthContext,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingCredential => StatusCode::FORBIDDEN,
            AppError::InvalidCredential => StatusCode::UNAUTHORIZED,
            AppError::SubjectNotFound => StatusCode::NOT_FOUND,
            AppError::RoleDenied { .. } => StatusCode::FORBIDDEN,
            AppError::AuthorizerFault(_) | AppError::MissingAuthContext => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthzError> for AppError {
    fn from(e: AuthzError) -> Self {
        match e {
            AuthzError::SubjectNotFound => AppError::SubjectNotFound,
            AuthzError::RoleDenied { message } => AppError::RoleDenied { message },
            AuthzError::Store(err) => AppError::AuthorizerFault(err.to_string()),
            AuthzError::MissingContext => AppError::MissingAuthContext,
        }
    }
}
