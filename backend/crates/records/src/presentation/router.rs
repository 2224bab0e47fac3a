//! Records Router

use axum::{
    Router,
    routing::{delete, get, post},
};
use docstore::DocumentStore;
use std::sync::Arc;

use crate::presentation::handlers::{self, RecordsAppState};

/// Create the records router for any document store implementation
///
/// Paths are relative; the caller nests the router under `/api`.
pub fn records_router<S>(store: S) -> Router
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let state = RecordsAppState {
        store: Arc::new(store),
    };

    Router::new()
        .route(
            "/composers",
            get(handlers::list_composers::<S>).post(handlers::create_composer::<S>),
        )
        .route(
            "/composers/{id}",
            get(handlers::get_composer::<S>)
                .put(handlers::update_composer::<S>)
                .delete(handlers::delete_composer::<S>),
        )
        .route(
            "/persons",
            get(handlers::list_persons::<S>).post(handlers::create_person::<S>),
        )
        .route(
            "/teams",
            get(handlers::list_teams::<S>).post(handlers::create_team::<S>),
        )
        .route("/teams/{id}", delete(handlers::delete_team::<S>))
        .route(
            "/teams/{id}/players",
            get(handlers::list_players::<S>).post(handlers::add_player::<S>),
        )
        .route("/customers", post(handlers::create_customer::<S>))
        .route(
            "/customers/{username}/invoices",
            get(handlers::list_invoices::<S>).post(handlers::add_invoice::<S>),
        )
        .with_state(state)
}
