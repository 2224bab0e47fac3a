//! Customer Service
//!
//! Invoices are addressed through the owning customer's `username`.
//! Like team players, an invoice append rewrites the whole customer
//! document without a concurrency check.

use docstore::{Collection, Document, DocumentStore, Filter};

use crate::application::append_save_error;
use crate::domain::customer::{Customer, Invoice, LineItem};
use crate::error::{RecordsError, RecordsResult};

/// Invoice fields as submitted; `date_created` may be omitted
pub struct NewInvoice {
    pub subtotal: f64,
    pub tax: f64,
    pub date_created: Option<String>,
    pub date_shipped: String,
    pub line_items: Vec<LineItem>,
}

pub struct CustomerService<'a, S> {
    store: &'a S,
}

impl<'a, S> CustomerService<'a, S>
where
    S: DocumentStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn customers(&self) -> Collection<'a, S, Customer> {
        Collection::new(self.store)
    }

    async fn find_by_username(&self, username: &str) -> RecordsResult<Document<Customer>> {
        self.customers()
            .find_one(&Filter::all().eq("username", username))
            .await?
            .ok_or(RecordsError::CustomerNotFound)
    }

    pub async fn create(&self, customer: Customer) -> RecordsResult<Document<Customer>> {
        let created = self.customers().create(&customer).await?;

        tracing::info!(
            customer_id = %created.id,
            username = %created.data.username,
            "Customer created"
        );

        Ok(created)
    }

    pub async fn add_invoice(&self, username: &str, input: NewInvoice) -> RecordsResult<Invoice> {
        let mut customer = self.find_by_username(username).await?;

        let invoice = Invoice::new(
            input.subtotal,
            input.tax,
            input.date_created,
            input.date_shipped,
            input.line_items,
        );

        customer.data.add_invoice(invoice.clone());
        self.customers()
            .save(&customer)
            .await
            .map_err(append_save_error)?;

        tracing::info!(
            customer_id = %customer.id,
            username,
            invoices = customer.data.invoices.len(),
            "Invoice added to customer"
        );

        Ok(invoice)
    }

    /// A customer with an empty invoice list is reported as an error.
    pub async fn list_invoices(&self, username: &str) -> RecordsResult<Vec<Invoice>> {
        let customer = self.find_by_username(username).await?;

        if customer.data.invoices.is_empty() {
            return Err(RecordsError::NoInvoices);
        }

        Ok(customer.data.invoices)
    }
}
