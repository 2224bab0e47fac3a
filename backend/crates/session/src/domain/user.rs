//! User Entity

use docstore::Model;
use platform::password::{HashedPassword, PasswordHashError};
use serde::{Deserialize, Serialize};

/// Registered user
///
/// `password` holds the PHC string of the Argon2 hash, never the plaintext.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_name: String,
    pub password: String,
    #[serde(default)]
    pub email_address: Vec<String>,
}

impl User {
    pub fn new(user_name: String, password: &HashedPassword, email_address: Vec<String>) -> Self {
        Self {
            user_name,
            password: password.as_phc_string().to_string(),
            email_address,
        }
    }

    pub fn hashed_password(&self) -> Result<HashedPassword, PasswordHashError> {
        HashedPassword::from_phc_string(self.password.as_str())
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("user_name", &self.user_name)
            .field("password", &"[REDACTED]")
            .field("email_address", &self.email_address)
            .finish()
    }
}

impl Model for User {
    const COLLECTION: &'static str = "users";
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::password::ClearTextPassword;

    #[test]
    fn test_serializes_with_stored_field_names() {
        let hash = ClearTextPassword::new("secret".to_string())
            .hash(None)
            .unwrap();
        let user = User::new("ada".to_string(), &hash, vec!["ada@example.com".to_string()]);

        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["userName"], "ada");
        assert_eq!(json["emailAddress"], serde_json::json!(["ada@example.com"]));
        assert_ne!(json["password"], "secret");
        assert!(user.hashed_password().is_ok());
    }

    #[test]
    fn test_debug_redacts_password() {
        let user = User {
            user_name: "ada".to_string(),
            password: "$argon2id$v=19$stuff".to_string(),
            email_address: Vec::new(),
        };

        let debug = format!("{user:?}");
        assert!(!debug.contains("argon2id"));
        assert!(debug.contains("[REDACTED]"));
    }
}
