//! Application Layer
//!
//! One service per resource. Each operation performs the store call(s) for
//! a single route and reports business outcomes as `RecordsError` variants.

pub mod composers;
pub mod customers;
pub mod persons;
pub mod teams;

use docstore::StoreError;
use kernel::id::Id;

use crate::error::RecordsError;

// Re-exports
pub use composers::ComposerService;
pub use customers::{CustomerService, NewInvoice};
pub use persons::PersonService;
pub use teams::TeamService;

/// Parse a path identifier. Malformed input is reported as `None` so that it
/// takes the same route as an identifier that matches nothing.
pub(crate) fn parse_id<T>(raw: &str) -> Option<Id<T>> {
    raw.parse().ok()
}

/// Failures while re-saving a parent after an append are answered with 500.
pub(crate) fn append_save_error(err: StoreError) -> RecordsError {
    if err.is_codec() {
        err.into()
    } else {
        RecordsError::AppendSave(err)
    }
}
