//! Sign Up Use Case
//!
//! Registers a new user under a unique user name.

use std::sync::Arc;

use docstore::{Collection, DocumentStore, Filter};
use platform::password::ClearTextPassword;

use crate::application::config::SessionConfig;
use crate::domain::user::User;
use crate::error::{SessionError, SessionResult};

/// Sign up input
pub struct SignUpInput {
    pub user_name: String,
    pub password: String,
    pub email_address: Vec<String>,
}

/// Sign up use case
pub struct SignUpUseCase<S>
where
    S: DocumentStore,
{
    store: Arc<S>,
    config: Arc<SessionConfig>,
}

impl<S> SignUpUseCase<S>
where
    S: DocumentStore,
{
    pub fn new(store: Arc<S>, config: Arc<SessionConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, input: SignUpInput) -> SessionResult<()> {
        let users = Collection::<_, User>::new(self.store.as_ref());

        // Check if user name is taken
        let existing = users
            .find_one(&Filter::all().eq("userName", input.user_name.as_str()))
            .await?;
        if existing.is_some() {
            return Err(SessionError::UserNameTaken);
        }

        // Argon2 is CPU-bound
        let config = Arc::clone(&self.config);
        let password = input.password;
        let hashed = tokio::task::spawn_blocking(move || {
            ClearTextPassword::new(password).hash(config.pepper())
        })
        .await?
        .map_err(|e| SessionError::Server(e.to_string()))?;

        let user = User::new(input.user_name, &hashed, input.email_address);
        let created = users.create(&user).await?;

        tracing::info!(
            user_id = %created.id,
            user_name = %created.data.user_name,
            "User signed up"
        );

        Ok(())
    }
}
