//! Session Router

use axum::{Router, routing::post};
use docstore::DocumentStore;
use std::sync::Arc;

use crate::application::config::SessionConfig;
use crate::presentation::handlers::{self, SessionAppState};

/// Create the session router for any document store implementation
pub fn session_router<S>(store: S, config: SessionConfig) -> Router
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let state = SessionAppState {
        store: Arc::new(store),
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<S>))
        .route("/login", post(handlers::log_in::<S>))
        .with_state(state)
}
