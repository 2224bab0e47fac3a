//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum_extra::extract::WithRejection;
use docstore::DocumentStore;
use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::application::{LogInInput, LogInUseCase, SignUpInput, SignUpUseCase};
use crate::error::{SessionError, SessionResult};
use crate::presentation::dto::{LogInRequest, MessageResponse, SignUpRequest};

pub const SESSIONS_TAG: &str = "Sessions";

/// Shared state for session handlers
#[derive(Clone)]
pub struct SessionAppState<S>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
    pub config: Arc<SessionConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/signup
#[utoipa::path(
    post,
    path = "/api/signup",
    tag = SESSIONS_TAG,
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Registered user.", body = MessageResponse),
        (status = 401, description = "Username is already in use.", body = MessageResponse),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn sign_up<S>(
    State(state): State<SessionAppState<S>>,
    WithRejection(Json(req), _): WithRejection<Json<SignUpRequest>, SessionError>,
) -> SessionResult<Json<MessageResponse>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.store.clone(), state.config.clone());

    let input = SignUpInput {
        user_name: req.username,
        password: req.password,
        email_address: req.email_address.into(),
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse::new("Registered user.")))
}

// ============================================================================
// Log In
// ============================================================================

/// POST /api/login
#[utoipa::path(
    post,
    path = "/api/login",
    tag = SESSIONS_TAG,
    request_body = LogInRequest,
    responses(
        (status = 200, description = "User logged in.", body = MessageResponse),
        (status = 401, description = "Invalid username. / Invalid password.", body = MessageResponse),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn log_in<S>(
    State(state): State<SessionAppState<S>>,
    WithRejection(Json(req), _): WithRejection<Json<LogInRequest>, SessionError>,
) -> SessionResult<Json<MessageResponse>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let use_case = LogInUseCase::new(state.store.clone(), state.config.clone());

    let input = LogInInput {
        user_name: req.username,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(Json(MessageResponse::new("User logged in.")))
}
