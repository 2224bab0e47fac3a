//! Process Configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).

use anyhow::{Context, bail};
use session::SessionConfig;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Which document store backs the collections
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres {
        database_url: String,
        max_connections: u32,
    },
    Memory,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub store: StoreBackend,
    pub frontend_origins: Vec<String>,
    pub password_pepper: Option<Vec<u8>>,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let store = match lookup("DOCUMENT_STORE").as_deref().map(str::trim) {
            None | Some("") | Some("postgres") => {
                let database_url =
                    lookup("DATABASE_URL").context("DATABASE_URL must be set in environment")?;
                let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
                    Some(raw) => raw.trim().parse().with_context(|| {
                        format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got {raw:?}")
                    })?,
                    None => DEFAULT_MAX_CONNECTIONS,
                };
                StoreBackend::Postgres {
                    database_url,
                    max_connections,
                }
            }
            Some("memory") => StoreBackend::Memory,
            Some(other) => bail!("DOCUMENT_STORE must be `postgres` or `memory`, got {other:?}"),
        };

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let password_pepper = lookup("PASSWORD_PEPPER")
            .filter(|pepper| !pepper.is_empty())
            .map(String::into_bytes);

        Ok(Self {
            port,
            store,
            frontend_origins,
            password_pepper,
        })
    }

    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            password_pepper: self.password_pepper.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_with_database_url() {
        let config = config(&[("DATABASE_URL", "postgres://localhost/gateway")]).unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(
            config.store,
            StoreBackend::Postgres {
                database_url: "postgres://localhost/gateway".to_string(),
                max_connections: 5,
            }
        );
        assert_eq!(config.frontend_origins.len(), 2);
        assert!(config.password_pepper.is_none());
    }

    #[test]
    fn test_postgres_requires_database_url() {
        assert!(config(&[]).is_err());
        assert!(config(&[("DOCUMENT_STORE", "postgres")]).is_err());
    }

    #[test]
    fn test_memory_store_needs_no_database() {
        let config = config(&[("DOCUMENT_STORE", "memory"), ("PORT", "8080")]).unwrap();

        assert_eq!(config.store, StoreBackend::Memory);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(config(&[("DOCUMENT_STORE", "mongo")]).is_err());
        assert!(config(&[("DOCUMENT_STORE", "memory"), ("PORT", "http")]).is_err());
        assert!(
            config(&[
                ("DATABASE_URL", "postgres://localhost/gateway"),
                ("DATABASE_MAX_CONNECTIONS", "-1"),
            ])
            .is_err()
        );
    }

    #[test]
    fn test_origins_and_pepper() {
        let config = config(&[
            ("DOCUMENT_STORE", "memory"),
            ("FRONTEND_ORIGINS", " https://a.example , ,https://b.example"),
            ("PASSWORD_PEPPER", "spice"),
        ])
        .unwrap();

        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
        assert_eq!(config.session_config().pepper(), Some(b"spice".as_slice()));
    }
}
