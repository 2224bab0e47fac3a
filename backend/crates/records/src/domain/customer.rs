//! Customer Entity
//!
//! A customer owns its invoices; `username` is the natural key used by the
//! invoice routes (assumed unique, not enforced).

use chrono::{SecondsFormat, Utc};
use docstore::Model;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub subtotal: f64,
    pub tax: f64,
    pub date_created: String,
    pub date_shipped: String,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
    pub quantity: f64,
}

impl Customer {
    /// Create a customer with no invoices
    pub fn new(first_name: String, last_name: String, username: String) -> Self {
        Self {
            first_name,
            last_name,
            username,
            invoices: Vec::new(),
        }
    }

    pub fn add_invoice(&mut self, invoice: Invoice) {
        self.invoices.push(invoice);
    }
}

impl Invoice {
    /// Build an invoice, stamping `dateCreated` with the current UTC time
    /// when the caller did not supply one.
    pub fn new(
        subtotal: f64,
        tax: f64,
        date_created: Option<String>,
        date_shipped: String,
        line_items: Vec<LineItem>,
    ) -> Self {
        Self {
            subtotal,
            tax,
            date_created: date_created
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
            date_shipped,
            line_items,
        }
    }
}

impl Model for Customer {
    const COLLECTION: &'static str = "customers";
}
