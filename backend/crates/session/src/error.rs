//! Session Error Types
//!
//! This module provides session-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docstore::StoreError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Session-specific result type alias
pub type SessionResult<T> = Result<T, SessionError>;

/// Session-specific error variants
#[derive(Debug, Error)]
pub enum SessionError {
    /// The store call itself failed
    #[error("Store Exception: {0}")]
    Store(#[source] StoreError),

    /// Anything that went wrong outside the store call
    #[error("Server Exception: {0}")]
    Server(String),

    /// Signup with a user name that is already registered
    #[error("Username is already in use.")]
    UserNameTaken,

    /// Login with an unknown user name
    #[error("Invalid username.")]
    InvalidUsername,

    /// Login with the wrong password
    #[error("Invalid password.")]
    InvalidPassword,
}

impl SessionError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SessionError::Store(_) => StatusCode::NOT_IMPLEMENTED,
            SessionError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SessionError::UserNameTaken
            | SessionError::InvalidUsername
            | SessionError::InvalidPassword => StatusCode::UNAUTHORIZED,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Store(_) => ErrorKind::NotImplemented,
            SessionError::Server(_) => ErrorKind::InternalServerError,
            SessionError::UserNameTaken
            | SessionError::InvalidUsername
            | SessionError::InvalidPassword => ErrorKind::Unauthorized,
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            SessionError::Store(e) => {
                tracing::error!(error = %e, "Session store error");
            }
            SessionError::Server(msg) => {
                tracing::error!(message = %msg, "Session server error");
            }
            SessionError::InvalidPassword => {
                tracing::warn!("Login rejected: password mismatch");
            }
            _ => {
                tracing::debug!(error = %self, "Session error");
            }
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(err: StoreError) -> Self {
        if err.is_codec() {
            SessionError::Server(err.to_string())
        } else {
            SessionError::Store(err)
        }
    }
}

impl From<JsonRejection> for SessionError {
    fn from(rejection: JsonRejection) -> Self {
        SessionError::Server(rejection.body_text())
    }
}

impl From<tokio::task::JoinError> for SessionError {
    fn from(err: tokio::task::JoinError) -> Self {
        SessionError::Server(err.to_string())
    }
}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        let app_error = AppError::new(err.kind(), err.to_string());
        match err {
            SessionError::Store(source) => app_error.with_source(source),
            _ => app_error,
        }
    }
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
