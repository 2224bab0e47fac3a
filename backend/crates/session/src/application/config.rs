//! Application Configuration
//!
//! Configuration for the Session application layer.

/// Session application configuration
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl SessionConfig {
    pub fn with_pepper(pepper: impl Into<Vec<u8>>) -> Self {
        Self {
            password_pepper: Some(pepper.into()),
        }
    }

    /// Get pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_pepper() {
        assert!(SessionConfig::default().pepper().is_none());
    }

    #[test]
    fn test_with_pepper() {
        let config = SessionConfig::with_pepper("spice");
        assert_eq!(config.pepper(), Some(b"spice".as_slice()));
    }
}
