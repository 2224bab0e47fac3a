//! Records Backend Module
//!
//! CRUD over the composers, persons, teams, and customers collections.
//!
//! Structure:
//! - `domain/` - Entities and their collection bindings
//! - `application/` - One service per resource
//! - `presentation/` - HTTP handlers, DTOs, OpenAPI schemas, router
//!
//! Teams own an ordered roster of players and customers own an ordered list
//! of invoices; both are appended by rewriting the parent document.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{RecordsError, RecordsResult};
pub use presentation::router::records_router;

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod models {
    pub use crate::domain::*;
    pub use crate::presentation::dto::*;
    pub use crate::presentation::schemas::*;
}
