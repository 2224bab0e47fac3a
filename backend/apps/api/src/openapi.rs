//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] gathers every annotated handler from the `records` and
//! `session` crates together with the request DTOs and the document schema
//! wrappers they reference.

use records::models::{
    ComposerDocumentSchema, ComposerRequest, CustomerDocumentSchema, CustomerRequest,
    InvoiceRequest, InvoiceSchema, LineItemRequest, MessageResponse, PersonDocumentSchema,
    PersonRequest, PlayerRequest, PlayerSchema, TeamDocumentSchema, TeamRequest,
};
use session::models::{EmailAddresses, LogInRequest, SignUpRequest};
use utoipa::OpenApi;

/// OpenAPI document for the gateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Document CRUD Gateway",
        description = "CRUD over composers, persons, teams and customers, plus user signup and login."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        records::handlers::list_composers,
        records::handlers::get_composer,
        records::handlers::create_composer,
        records::handlers::update_composer,
        records::handlers::delete_composer,
        records::handlers::list_persons,
        records::handlers::create_person,
        records::handlers::list_teams,
        records::handlers::create_team,
        records::handlers::delete_team,
        records::handlers::add_player,
        records::handlers::list_players,
        records::handlers::create_customer,
        records::handlers::add_invoice,
        records::handlers::list_invoices,
        session::handlers::sign_up,
        session::handlers::log_in,
    ),
    components(schemas(
        MessageResponse,
        ComposerRequest,
        ComposerDocumentSchema,
        PersonRequest,
        PersonDocumentSchema,
        TeamRequest,
        TeamDocumentSchema,
        PlayerRequest,
        PlayerSchema,
        CustomerRequest,
        CustomerDocumentSchema,
        InvoiceRequest,
        InvoiceSchema,
        LineItemRequest,
        SignUpRequest,
        EmailAddresses,
        LogInRequest,
    )),
    tags(
        (name = "Composers", description = "Composer documents"),
        (name = "Persons", description = "Person documents with roles and dependents"),
        (name = "Teams", description = "Teams and their player rosters"),
        (name = "Customers", description = "Customers and their invoices"),
        (name = "Sessions", description = "User signup and login"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    fn has_operation(doc: &utoipa::openapi::OpenApi, path: &str, method: &str) -> bool {
        doc.paths
            .paths
            .get(path)
            .map(|item| match method {
                "get" => item.get.is_some(),
                "post" => item.post.is_some(),
                "put" => item.put.is_some(),
                "delete" => item.delete.is_some(),
                _ => false,
            })
            .unwrap_or(false)
    }

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();

        let expected = [
            ("/api/composers", "get"),
            ("/api/composers", "post"),
            ("/api/composers/{id}", "get"),
            ("/api/composers/{id}", "put"),
            ("/api/composers/{id}", "delete"),
            ("/api/persons", "get"),
            ("/api/persons", "post"),
            ("/api/teams", "get"),
            ("/api/teams", "post"),
            ("/api/teams/{id}", "delete"),
            ("/api/teams/{id}/players", "get"),
            ("/api/teams/{id}/players", "post"),
            ("/api/customers", "post"),
            ("/api/customers/{username}/invoices", "get"),
            ("/api/customers/{username}/invoices", "post"),
            ("/api/signup", "post"),
            ("/api/login", "post"),
        ];

        for (path, method) in expected {
            assert!(
                has_operation(&doc, path, method),
                "missing {method} {path}"
            );
        }
    }

    #[test]
    fn test_document_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let schemas = doc.components.expect("components").schemas;

        for name in [
            "ComposerDocument",
            "PersonDocument",
            "TeamDocument",
            "CustomerDocument",
            "Invoice",
            "MessageResponse",
        ] {
            assert!(schemas.contains_key(name), "missing schema {name}");
        }
    }
}
