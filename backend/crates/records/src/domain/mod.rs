//! Domain Layer
//!
//! Entities and their collection bindings. Sub-documents (roles,
//! dependents, players, invoices, line items) have no identity of their own
//! and live only inside their parent.

pub mod composer;
pub mod customer;
pub mod person;
pub mod team;

// Re-exports
pub use composer::Composer;
pub use customer::{Customer, Invoice, LineItem};
pub use person::{Dependent, Person, Role};
pub use team::{Player, Team};
