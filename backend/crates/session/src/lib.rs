//! Session Backend Module
//!
//! User signup and login against the `users` collection.
//!
//! Structure:
//! - `domain/` - User entity
//! - `application/` - Sign up / log in use cases
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optionally peppered
//! - Hashing and verification run on the blocking thread pool
//! - Neither the password nor its hash ever appears in a response
//!
//! Login confirms credentials only; no session token or cookie is issued.

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;


// Re-exports for convenience
pub use application::config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use presentation::router::session_router;

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod models {
    pub use crate::domain::user::*;
    pub use crate::presentation::dto::*;
}
