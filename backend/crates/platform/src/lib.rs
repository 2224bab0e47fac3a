//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id with per-hash random salt)
//! - Constant-time password verification

pub mod password;
