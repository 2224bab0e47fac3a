//! Records Error Types
//!
//! This module provides resource-handler error variants that integrate
//! with the unified `kernel::error::AppError` system.
//!
//! Status codes follow each route's established contract: store failures
//! are 501, handler failures are 500, and "not found" is 401 or 501
//! depending on the route.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use docstore::StoreError;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Records-specific result type alias
pub type RecordsResult<T> = Result<T, RecordsError>;

/// Records-specific error variants
#[derive(Debug, Error)]
pub enum RecordsError {
    /// The store call itself failed
    #[error("Store Exception: {0}")]
    Store(#[source] StoreError),

    /// Saving a parent after appending a sub-document failed
    #[error("Store Exception: {0}")]
    AppendSave(#[source] StoreError),

    /// Anything that went wrong outside the store call
    #[error("Server Exception: {0}")]
    Server(String),

    /// PUT /composers/{id} on an unknown composer
    #[error("Store Exception: This composer does not exist in the database.")]
    ComposerNotFound,

    /// DELETE /composers/{id} on an unknown composer
    #[error("Invalid composerId")]
    InvalidComposerId,

    /// Team routes on an unknown team
    #[error("Invalid teamId")]
    InvalidTeamId,

    /// Invoice routes on an unknown username
    #[error("Store Exception: Customer not found")]
    CustomerNotFound,

    /// Listing invoices of a customer that has none
    #[error("Store Exception: Customer has no invoices.")]
    NoInvoices,
}

impl RecordsError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordsError::Store(_)
            | RecordsError::ComposerNotFound
            | RecordsError::CustomerNotFound
            | RecordsError::NoInvoices => StatusCode::NOT_IMPLEMENTED,
            RecordsError::AppendSave(_) | RecordsError::Server(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RecordsError::InvalidComposerId | RecordsError::InvalidTeamId => {
                StatusCode::UNAUTHORIZED
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecordsError::Store(_)
            | RecordsError::ComposerNotFound
            | RecordsError::CustomerNotFound
            | RecordsError::NoInvoices => ErrorKind::NotImplemented,
            RecordsError::AppendSave(_) | RecordsError::Server(_) => {
                ErrorKind::InternalServerError
            }
            RecordsError::InvalidComposerId | RecordsError::InvalidTeamId => {
                ErrorKind::Unauthorized
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            RecordsError::Store(e) => {
                tracing::error!(error = %e, "Records store error");
            }
            RecordsError::AppendSave(e) => {
                tracing::error!(error = %e, "Records append save failed");
            }
            RecordsError::Server(msg) => {
                tracing::error!(message = %msg, "Records server error");
            }
            _ => {
                tracing::debug!(error = %self, "Records error");
            }
        }
    }
}

impl From<StoreError> for RecordsError {
    fn from(err: StoreError) -> Self {
        if err.is_codec() {
            RecordsError::Server(err.to_string())
        } else {
            RecordsError::Store(err)
        }
    }
}

impl From<JsonRejection> for RecordsError {
    fn from(rejection: JsonRejection) -> Self {
        RecordsError::Server(rejection.body_text())
    }
}

impl From<RecordsError> for AppError {
    fn from(err: RecordsError) -> Self {
        let app_error = AppError::new(err.kind(), err.to_string());
        match err {
            RecordsError::Store(source) | RecordsError::AppendSave(source) => {
                app_error.with_source(source)
            }
            _ => app_error,
        }
    }
}

impl IntoResponse for RecordsError {
    fn into_response(self) -> Response {
        self.log();
        AppError::from(self).into_response()
    }
}
