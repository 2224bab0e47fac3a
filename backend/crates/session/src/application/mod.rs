//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod log_in;
pub mod sign_up;

// Re-exports
pub use config::SessionConfig;
pub use log_in::{LogInInput, LogInUseCase};
pub use sign_up::{SignUpInput, SignUpUseCase};
