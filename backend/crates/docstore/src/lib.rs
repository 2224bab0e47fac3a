//! Document Store Module
//!
//! Schema-less JSON documents grouped into named collections.
//!
//! - `repository` - the [`DocumentStore`] trait (find / findOne / findById /
//!   create / save / findByIdAndDelete)
//! - `collection` - typed access through [`Collection`] and [`Model`]
//! - `postgres` - JSONB-backed implementation
//! - `memory` - in-process implementation
//!
//! ## Consistency Model
//! - Every call is a single round trip with no transaction around it
//! - `save` replaces the whole document; there is no version check, so two
//!   read-modify-save sequences against one document are last-write-wins

pub mod collection;
pub mod document;
pub mod error;
pub mod filter;
pub mod memory;
pub mod postgres;
pub mod repository;

// Re-exports for convenience
pub use collection::{Collection, Model};
pub use document::{Document, RawDocument};
pub use error::{StoreError, StoreResult};
pub use filter::Filter;
pub use memory::InMemoryDocumentStore;
pub use postgres::PgDocumentStore;
pub use repository::{DocumentStore, LocalDocumentStore};
