//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============================================================================
// Common
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Registered user.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    #[schema(example = "jdoe")]
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub email_address: EmailAddresses,
}

/// One address or a list of addresses
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum EmailAddresses {
    One(String),
    Many(Vec<String>),
}

impl Default for EmailAddresses {
    fn default() -> Self {
        EmailAddresses::Many(Vec::new())
    }
}

impl From<EmailAddresses> for Vec<String> {
    fn from(addresses: EmailAddresses) -> Self {
        match addresses {
            EmailAddresses::One(address) => vec![address],
            EmailAddresses::Many(addresses) => addresses,
        }
    }
}

// ============================================================================
// Log In
// ============================================================================

/// Log in request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LogInRequest {
    #[schema(example = "jdoe")]
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_address_accepts_string() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"username":"a","password":"p","emailAddress":"a@example.com"}"#,
        )
        .unwrap();

        let addresses: Vec<String> = req.email_address.into();
        assert_eq!(addresses, vec!["a@example.com".to_string()]);
    }

    #[test]
    fn test_email_address_accepts_array() {
        let req: SignUpRequest = serde_json::from_str(
            r#"{"username":"a","password":"p","emailAddress":["a@example.com","b@example.com"]}"#,
        )
        .unwrap();

        let addresses: Vec<String> = req.email_address.into();
        assert_eq!(addresses.len(), 2);
    }

    #[test]
    fn test_email_address_optional() {
        let req: SignUpRequest =
            serde_json::from_str(r#"{"username":"a","password":"p"}"#).unwrap();

        let addresses: Vec<String> = req.email_address.into();
        assert!(addresses.is_empty());
    }
}
