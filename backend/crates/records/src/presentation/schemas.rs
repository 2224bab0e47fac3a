//! OpenAPI schema definitions for stored documents.
//!
//! Domain types stay free of `ToSchema`; these wrappers describe the JSON
//! they serialize to, including the store-assigned `_id`.

use utoipa::ToSchema;

/// Stored composer
#[derive(ToSchema)]
#[schema(as = ComposerDocument, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ComposerDocumentSchema {
    #[schema(rename = "_id", example = "5d0e9a7c-2d1f-4b8e-9a39-0c2b3f1f6a11")]
    id: String,
    first_name: String,
    last_name: String,
}

/// Stored person
#[derive(ToSchema)]
#[schema(as = PersonDocument, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PersonDocumentSchema {
    #[schema(rename = "_id")]
    id: String,
    first_name: String,
    last_name: String,
    roles: Vec<RoleSchema>,
    dependents: Vec<DependentSchema>,
    birth_date: String,
}

#[derive(ToSchema)]
#[schema(as = Role)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct RoleSchema {
    text: String,
}

#[derive(ToSchema)]
#[schema(as = Dependent, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct DependentSchema {
    first_name: String,
    last_name: String,
}

/// Stored team with its roster
#[derive(ToSchema)]
#[schema(as = TeamDocument)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct TeamDocumentSchema {
    #[schema(rename = "_id")]
    id: String,
    name: String,
    mascot: String,
    players: Vec<PlayerSchema>,
}

#[derive(ToSchema)]
#[schema(as = Player, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PlayerSchema {
    first_name: String,
    last_name: String,
    salary: f64,
}

/// Stored customer with its invoices
#[derive(ToSchema)]
#[schema(as = CustomerDocument, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CustomerDocumentSchema {
    #[schema(rename = "_id")]
    id: String,
    first_name: String,
    last_name: String,
    username: String,
    invoices: Vec<InvoiceSchema>,
}

#[derive(ToSchema)]
#[schema(as = Invoice, rename_all = "camelCase")]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct InvoiceSchema {
    subtotal: f64,
    tax: f64,
    #[schema(example = "2023-04-13T09:30:00.000Z")]
    date_created: String,
    date_shipped: String,
    line_items: Vec<LineItemSchema>,
}

#[derive(ToSchema)]
#[schema(as = LineItem)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct LineItemSchema {
    name: String,
    price: f64,
    quantity: f64,
}
