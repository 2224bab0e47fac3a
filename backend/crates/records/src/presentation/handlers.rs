//! HTTP Handlers
//!
//! Every response body is either the JSON result or `{"message": ...}`.

use axum::Json;
use axum::extract::{Path, State};
use axum_extra::extract::WithRejection;
use docstore::{Document, DocumentStore};
use std::sync::Arc;

use crate::application::{ComposerService, CustomerService, PersonService, TeamService};
use crate::domain::{Composer, Customer, Invoice, Person, Player, Team};
use crate::error::{RecordsError, RecordsResult};
use crate::presentation::dto::{
    ComposerRequest, CustomerRequest, InvoiceRequest, MessageResponse, PersonRequest,
    PlayerRequest, TeamRequest,
};
use crate::presentation::schemas::{
    ComposerDocumentSchema, CustomerDocumentSchema, InvoiceSchema, PersonDocumentSchema,
    PlayerSchema, TeamDocumentSchema,
};

pub const COMPOSERS_TAG: &str = "Composers";
pub const PERSONS_TAG: &str = "Persons";
pub const TEAMS_TAG: &str = "Teams";
pub const CUSTOMERS_TAG: &str = "Customers";

/// JSON body whose rejection is reported as a handler-level failure
type JsonBody<T> = WithRejection<Json<T>, RecordsError>;

/// Shared state for record handlers
#[derive(Clone)]
pub struct RecordsAppState<S>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    pub store: Arc<S>,
}

// ============================================================================
// Composers
// ============================================================================

#[utoipa::path(
    get,
    path = "/api/composers",
    tag = COMPOSERS_TAG,
    responses(
        (status = 200, description = "All composers", body = Vec<ComposerDocumentSchema>),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn list_composers<S>(
    State(state): State<RecordsAppState<S>>,
) -> RecordsResult<Json<Vec<Document<Composer>>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let composers = ComposerService::new(state.store.as_ref()).list().await?;
    Ok(Json(composers))
}

#[utoipa::path(
    get,
    path = "/api/composers/{id}",
    tag = COMPOSERS_TAG,
    params(
        ("id" = String, Path, description = "Composer id")
    ),
    responses(
        (status = 200, description = "The composer, or null when it does not exist", body = Option<ComposerDocumentSchema>),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn get_composer<S>(
    State(state): State<RecordsAppState<S>>,
    Path(id): Path<String>,
) -> RecordsResult<Json<Option<Document<Composer>>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let composer = ComposerService::new(state.store.as_ref()).get(&id).await?;
    Ok(Json(composer))
}

#[utoipa::path(
    post,
    path = "/api/composers",
    tag = COMPOSERS_TAG,
    request_body = ComposerRequest,
    responses(
        (status = 200, description = "Created composer", body = ComposerDocumentSchema),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn create_composer<S>(
    State(state): State<RecordsAppState<S>>,
    WithRejection(Json(req), _): JsonBody<ComposerRequest>,
) -> RecordsResult<Json<Document<Composer>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let created = ComposerService::new(state.store.as_ref())
        .create(req.into())
        .await?;
    Ok(Json(created))
}

#[utoipa::path(
    put,
    path = "/api/composers/{id}",
    tag = COMPOSERS_TAG,
    params(
        ("id" = String, Path, description = "Composer id")
    ),
    request_body = ComposerRequest,
    responses(
        (status = 200, description = "Updated composer", body = ComposerDocumentSchema),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception, or the composer does not exist", body = MessageResponse)
    ),
)]
pub async fn update_composer<S>(
    State(state): State<RecordsAppState<S>>,
    Path(id): Path<String>,
    WithRejection(Json(req), _): JsonBody<ComposerRequest>,
) -> RecordsResult<Json<Document<Composer>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let saved = ComposerService::new(state.store.as_ref())
        .update(&id, req.into())
        .await?;
    Ok(Json(saved))
}

#[utoipa::path(
    delete,
    path = "/api/composers/{id}",
    tag = COMPOSERS_TAG,
    params(
        ("id" = String, Path, description = "Composer id")
    ),
    responses(
        (status = 200, description = "Deleted composer", body = ComposerDocumentSchema),
        (status = 401, description = "Invalid composerId", body = MessageResponse),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn delete_composer<S>(
    State(state): State<RecordsAppState<S>>,
    Path(id): Path<String>,
) -> RecordsResult<Json<Document<Composer>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let deleted = ComposerService::new(state.store.as_ref())
        .delete(&id)
        .await?;
    Ok(Json(deleted))
}

// ============================================================================
// Persons
// ============================================================================

#[utoipa::path(
    get,
    path = "/api/persons",
    tag = PERSONS_TAG,
    responses(
        (status = 200, description = "All persons", body = Vec<PersonDocumentSchema>),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn list_persons<S>(
    State(state): State<RecordsAppState<S>>,
) -> RecordsResult<Json<Vec<Document<Person>>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let persons = PersonService::new(state.store.as_ref()).list().await?;
    Ok(Json(persons))
}

#[utoipa::path(
    post,
    path = "/api/persons",
    tag = PERSONS_TAG,
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Created person", body = PersonDocumentSchema),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn create_person<S>(
    State(state): State<RecordsAppState<S>>,
    WithRejection(Json(req), _): JsonBody<PersonRequest>,
) -> RecordsResult<Json<Document<Person>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let created = PersonService::new(state.store.as_ref())
        .create(req.into())
        .await?;
    Ok(Json(created))
}

// ============================================================================
// Teams
// ============================================================================

#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAMS_TAG,
    responses(
        (status = 200, description = "All teams with their rosters", body = Vec<TeamDocumentSchema>),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn list_teams<S>(
    State(state): State<RecordsAppState<S>>,
) -> RecordsResult<Json<Vec<Document<Team>>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let teams = TeamService::new(state.store.as_ref()).list().await?;
    Ok(Json(teams))
}

#[utoipa::path(
    post,
    path = "/api/teams",
    tag = TEAMS_TAG,
    request_body = TeamRequest,
    responses(
        (status = 200, description = "Created team with an empty roster", body = TeamDocumentSchema),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn create_team<S>(
    State(state): State<RecordsAppState<S>>,
    WithRejection(Json(req), _): JsonBody<TeamRequest>,
) -> RecordsResult<Json<Document<Team>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let created = TeamService::new(state.store.as_ref())
        .create(req.into())
        .await?;
    Ok(Json(created))
}

#[utoipa::path(
    delete,
    path = "/api/teams/{id}",
    tag = TEAMS_TAG,
    params(
        ("id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Deleted team", body = TeamDocumentSchema),
        (status = 401, description = "Invalid teamId", body = MessageResponse),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn delete_team<S>(
    State(state): State<RecordsAppState<S>>,
    Path(id): Path<String>,
) -> RecordsResult<Json<Document<Team>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let deleted = TeamService::new(state.store.as_ref()).delete(&id).await?;
    Ok(Json(deleted))
}

#[utoipa::path(
    post,
    path = "/api/teams/{id}/players",
    tag = TEAMS_TAG,
    params(
        ("id" = String, Path, description = "Team id")
    ),
    request_body = PlayerRequest,
    responses(
        (status = 200, description = "The appended player", body = PlayerSchema),
        (status = 401, description = "Invalid teamId", body = MessageResponse),
        (status = 500, description = "Server Exception, or saving the team failed", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn add_player<S>(
    State(state): State<RecordsAppState<S>>,
    Path(id): Path<String>,
    WithRejection(Json(req), _): JsonBody<PlayerRequest>,
) -> RecordsResult<Json<Player>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let player = TeamService::new(state.store.as_ref())
        .add_player(&id, req.into())
        .await?;
    Ok(Json(player))
}

#[utoipa::path(
    get,
    path = "/api/teams/{id}/players",
    tag = TEAMS_TAG,
    params(
        ("id" = String, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "The team's players in roster order", body = Vec<PlayerSchema>),
        (status = 401, description = "Invalid teamId", body = MessageResponse),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn list_players<S>(
    State(state): State<RecordsAppState<S>>,
    Path(id): Path<String>,
) -> RecordsResult<Json<Vec<Player>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let players = TeamService::new(state.store.as_ref())
        .list_players(&id)
        .await?;
    Ok(Json(players))
}

// ============================================================================
// Customers
// ============================================================================

#[utoipa::path(
    post,
    path = "/api/customers",
    tag = CUSTOMERS_TAG,
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Created customer with no invoices", body = CustomerDocumentSchema),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception", body = MessageResponse)
    ),
)]
pub async fn create_customer<S>(
    State(state): State<RecordsAppState<S>>,
    WithRejection(Json(req), _): JsonBody<CustomerRequest>,
) -> RecordsResult<Json<Document<Customer>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let created = CustomerService::new(state.store.as_ref())
        .create(req.into())
        .await?;
    Ok(Json(created))
}

#[utoipa::path(
    post,
    path = "/api/customers/{username}/invoices",
    tag = CUSTOMERS_TAG,
    params(
        ("username" = String, Path, description = "Customer username")
    ),
    request_body = InvoiceRequest,
    responses(
        (status = 200, description = "Invoice added to customer.", body = MessageResponse),
        (status = 500, description = "Server Exception, or saving the customer failed", body = MessageResponse),
        (status = 501, description = "Store Exception, or the customer was not found", body = MessageResponse)
    ),
)]
pub async fn add_invoice<S>(
    State(state): State<RecordsAppState<S>>,
    Path(username): Path<String>,
    WithRejection(Json(req), _): JsonBody<InvoiceRequest>,
) -> RecordsResult<Json<MessageResponse>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    CustomerService::new(state.store.as_ref())
        .add_invoice(&username, req.into())
        .await?;
    Ok(Json(MessageResponse::new("Invoice added to customer.")))
}

#[utoipa::path(
    get,
    path = "/api/customers/{username}/invoices",
    tag = CUSTOMERS_TAG,
    params(
        ("username" = String, Path, description = "Customer username")
    ),
    responses(
        (status = 200, description = "The customer's invoices", body = Vec<InvoiceSchema>),
        (status = 500, description = "Server Exception", body = MessageResponse),
        (status = 501, description = "Store Exception, the customer was not found, or it has no invoices", body = MessageResponse)
    ),
)]
pub async fn list_invoices<S>(
    State(state): State<RecordsAppState<S>>,
    Path(username): Path<String>,
) -> RecordsResult<Json<Vec<Invoice>>>
where
    S: DocumentStore + Clone + Send + Sync + 'static,
{
    let invoices = CustomerService::new(state.store.as_ref())
        .list_invoices(&username)
        .await?;
    Ok(Json(invoices))
}
