//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::NewInvoice;
use crate::domain::{Composer, Customer, Dependent, LineItem, Person, Player, Role, Team};

// ============================================================================
// Common
// ============================================================================

/// Plain message body, used for both acknowledgements and errors
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Invoice added to customer.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Composers
// ============================================================================

/// Create / update composer request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ComposerRequest {
    #[schema(example = "Johann Sebastian")]
    pub first_name: String,
    #[schema(example = "Bach")]
    pub last_name: String,
}

impl From<ComposerRequest> for Composer {
    fn from(req: ComposerRequest) -> Self {
        Composer {
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

// ============================================================================
// Persons
// ============================================================================

/// Create person request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonRequest {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub roles: Vec<RoleRequest>,
    #[serde(default)]
    pub dependents: Vec<DependentRequest>,
    #[schema(example = "1980-04-12")]
    pub birth_date: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct RoleRequest {
    #[schema(example = "Teacher")]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DependentRequest {
    pub first_name: String,
    pub last_name: String,
}

impl From<PersonRequest> for Person {
    fn from(req: PersonRequest) -> Self {
        Person {
            first_name: req.first_name,
            last_name: req.last_name,
            roles: req
                .roles
                .into_iter()
                .map(|role| Role { text: role.text })
                .collect(),
            dependents: req
                .dependents
                .into_iter()
                .map(|d| Dependent {
                    first_name: d.first_name,
                    last_name: d.last_name,
                })
                .collect(),
            birth_date: req.birth_date,
        }
    }
}

// ============================================================================
// Teams
// ============================================================================

/// Create team request; the roster always starts empty
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TeamRequest {
    #[schema(example = "Bears")]
    pub name: String,
    #[schema(example = "Grizzly")]
    pub mascot: String,
}

impl From<TeamRequest> for Team {
    fn from(req: TeamRequest) -> Self {
        Team::new(req.name, req.mascot)
    }
}

/// Add player request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    pub first_name: String,
    pub last_name: String,
    #[schema(example = 52000.0)]
    pub salary: f64,
}

impl From<PlayerRequest> for Player {
    fn from(req: PlayerRequest) -> Self {
        Player {
            first_name: req.first_name,
            last_name: req.last_name,
            salary: req.salary,
        }
    }
}

// ============================================================================
// Customers
// ============================================================================

/// Create customer request; invoices always start empty
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub first_name: String,
    pub last_name: String,
    #[schema(example = "jdoe")]
    pub username: String,
}

impl From<CustomerRequest> for Customer {
    fn from(req: CustomerRequest) -> Self {
        Customer::new(req.first_name, req.last_name, req.username)
    }
}

/// Add invoice request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    pub subtotal: f64,
    pub tax: f64,
    /// Defaults to the current UTC time when omitted
    #[schema(example = "2023-04-13T09:30:00.000Z")]
    pub date_created: Option<String>,
    pub date_shipped: String,
    #[serde(default)]
    pub line_items: Vec<LineItemRequest>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LineItemRequest {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}

impl From<InvoiceRequest> for NewInvoice {
    fn from(req: InvoiceRequest) -> Self {
        NewInvoice {
            subtotal: req.subtotal,
            tax: req.tax,
            date_created: req.date_created,
            date_shipped: req.date_shipped,
            line_items: req
                .line_items
                .into_iter()
                .map(|item| LineItem {
                    name: item.name,
                    price: item.price,
                    quantity: item.quantity,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_request_defaults_sequences() {
        let req: PersonRequest = serde_json::from_str(
            r#"{"firstName":"Ada","lastName":"Lovelace","birthDate":"1815-12-10"}"#,
        )
        .unwrap();

        let person = Person::from(req);
        assert!(person.roles.is_empty());
        assert!(person.dependents.is_empty());
    }

    #[test]
    fn test_team_request_ignores_players() {
        let req: TeamRequest = serde_json::from_str(
            r#"{"name":"Bears","mascot":"Grizzly","players":[{"firstName":"x"}]}"#,
        )
        .unwrap();

        assert!(Team::from(req).players.is_empty());
    }

    #[test]
    fn test_invoice_request_without_date_created() {
        let req: InvoiceRequest = serde_json::from_str(
            r#"{"subtotal":10,"tax":1,"dateShipped":"2023-05-01","lineItems":[{"name":"pen","price":1.5,"quantity":2}]}"#,
        )
        .unwrap();

        let invoice = NewInvoice::from(req);
        assert!(invoice.date_created.is_none());
        assert_eq!(invoice.line_items.len(), 1);
        assert_eq!(invoice.line_items[0].quantity, 2.0);
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let result = serde_json::from_str::<ComposerRequest>(r#"{"firstName":"Only"}"#);
        assert!(result.is_err());
    }
}
