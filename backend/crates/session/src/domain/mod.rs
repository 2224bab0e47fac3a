//! Domain Layer

pub mod user;

pub use user::User;
