//! Presentation Layer
//!
//! HTTP handlers, DTOs, OpenAPI schemas, and router.

pub mod dto;
pub mod handlers;
pub mod router;
pub mod schemas;

pub use handlers::RecordsAppState;
pub use router::records_router;
