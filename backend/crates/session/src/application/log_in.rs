//! Log In Use Case
//!
//! Checks a user name and password against the stored hash. Nothing is
//! issued on success.

use std::sync::Arc;

use docstore::{Collection, DocumentStore, Filter};
use platform::password::ClearTextPassword;

use crate::application::config::SessionConfig;
use crate::domain::user::User;
use crate::error::{SessionError, SessionResult};

/// Log in input
pub struct LogInInput {
    pub user_name: String,
    pub password: String,
}

/// Log in use case
pub struct LogInUseCase<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
    config: Arc<SessionConfig>,
}

impl<S> LogInUseCase<S>
where
    S: DocumentStore,
{
    pub fn new(store: Arc<S>, config: Arc<SessionConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: LogInInput) -> SessionResult<()> {
        let users = Collection::<_, User>::new(self.store.as_ref());

        let user = users
            .find_one(&Filter::all().eq("userName", input.user_name.as_str()))
            .await?
            .ok_or(SessionError::InvalidUsername)?;

        let stored = user
            .data
            .hashed_password()
            .map_err(|e| SessionError::Server(e.to_string()))?;

        let config = Arc::clone(&self.config);
        let password = input.password;
        let matches = tokio::task::spawn_blocking(move || {
            stored.verify(&ClearTextPassword::new(password), config.pepper())
        })
        .await?;

        if !matches {
            return Err(SessionError::InvalidPassword);
        }

        tracing::info!(user_id = %user.id, user_name = %user.data.user_name, "User logged in");

        Ok(())
    }
}
