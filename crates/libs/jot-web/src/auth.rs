//! Authentication flows: registration and login.
//!
//! The [`AuthService`] owns the pieces every flow needs: the identity
//! store, the credential hasher and the session codec. Hashing and
//! storage calls are synchronous and run on blocking threads so the
//! request executor never stalls on them.

use std::sync::Arc;

use jot_auth::password::CredentialHasher;
use jot_auth::session::SessionCodec;
use jot_models::identity::user::{NewUser, User};
use jot_models::repo::IdentityRepository;
use serde::{Deserialize, Serialize};
use tokio::task;
use tracing::info;

use crate::prelude::*;

/// Registration request payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Plaintext password, hashed before storage.
    pub password: String,
}

/// Login request payload.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account username.
    pub username: String,
    /// Plaintext password to verify.
    pub password: String,
}

/// Public view of a user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserView {
    /// Account username.
    pub username: String,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
        }
    }
}

/// Outcome of a successful login.
///
/// The token goes into the session cookie, never into a response body
/// or a log line.
pub struct LoginOutcome {
    /// The issued session token.
    pub token: String,
    /// The logged-in user.
    pub user: UserView,
}

/// Authentication service for registration and login.
#[derive(Clone)]
pub struct AuthService {
    identity: Arc<dyn IdentityRepository>,
    hasher: CredentialHasher,
    sessions: SessionCodec,
}

impl AuthService {
    /// Creates a new authentication service.
    pub fn new(
        identity: Arc<dyn IdentityRepository>,
        hasher: CredentialHasher,
        sessions: SessionCodec,
    ) -> Self {
        Self {
            identity,
            hasher,
            sessions,
        }
    }

    /// Registers a new account.
    ///
    /// Looks the username up first for a friendly error, then lets the
    /// storage unique constraint settle concurrent registrations of the
    /// same name. No session is issued; a fresh account logs in
    /// explicitly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use chrono::TimeDelta;
    /// use jot_auth::{password::CredentialHasher, session::SessionCodec};
    /// use jot_models::memory::MemoryStore;
    /// use jot_web::auth::{AuthService, RegisterRequest};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let service = AuthService::new(
    ///     Arc::new(MemoryStore::new()),
    ///     CredentialHasher::new(),
    ///     SessionCodec::new("secret", TimeDelta::hours(1)),
    /// );
    ///
    /// let user = service
    ///     .register(RegisterRequest {
    ///         username: "alice".to_string(),
    ///         password: "correct horse".to_string(),
    ///     })
    ///     .await?;
    /// assert_eq!(user.username, "alice");
    /// # Ok(())
    /// # }
    /// ```
    pub async fn register(&self, request: RegisterRequest) -> Result<UserView> {
        if request.username.is_empty() || request.password.is_empty() {
            return Err(Error::MissingCredentials);
        }

        let identity = Arc::clone(&self.identity);
        let lookup = request.username.clone();
        let existing = task::spawn_blocking(move || identity.find_by_username(&lookup)).await??;
        if existing.is_some() {
            return Err(Error::UsernameTaken);
        }

        let hasher = self.hasher.clone();
        let password = request.password;
        let digest = task::spawn_blocking(move || hasher.hash(&password)).await??;

        let identity = Arc::clone(&self.identity);
        let user = NewUser {
            username: request.username,
            password_digest: digest,
        };
        let created = task::spawn_blocking(move || identity.create_user(user)).await?;
        let user = match created {
            Ok(user) => user,
            // A concurrent registration won the race after our lookup.
            Err(jot_models::error::Error::DuplicateKey) => return Err(Error::UsernameTaken),
            Err(err) => return Err(err.into()),
        };

        info!("registered user {}", user.id);
        Ok(UserView::from(user))
    }

    /// Logs a user in and issues a session token.
    ///
    /// An unknown username and a wrong password both return
    /// [`Error::InvalidCredentials`]; the two cases are indistinguishable
    /// from outside.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginOutcome> {
        if request.username.is_empty() || request.password.is_empty() {
            return Err(Error::MissingCredentials);
        }

        let identity = Arc::clone(&self.identity);
        let lookup = request.username.clone();
        let found = task::spawn_blocking(move || identity.find_by_username(&lookup)).await??;

        let Some(user) = found else {
            return Err(Error::InvalidCredentials);
        };

        let hasher = self.hasher.clone();
        let password = request.password;
        let digest = user.password_digest.clone();
        let valid = task::spawn_blocking(move || hasher.verify(&password, &digest)).await?;
        if !valid {
            return Err(Error::InvalidCredentials);
        }

        let token = self.sessions.issue(user.id)?;
        info!("user {} logged in", user.id);
        Ok(LoginOutcome {
            token,
            user: UserView::from(user),
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeDelta;

    use super::*;

    /// Stand-in for a store where a concurrent registration wins the race
    /// between the lookup and the insert: the lookup sees nothing, the
    /// insert hits the unique constraint.
    struct RacedStore;

    impl IdentityRepository for RacedStore {
        fn find_by_username(&self, _username: &str) -> jot_models::prelude::Result<Option<User>> {
            Ok(None)
        }

        fn create_user(&self, _user: NewUser) -> jot_models::prelude::Result<User> {
            Err(jot_models::error::Error::DuplicateKey)
        }
    }

    #[tokio::test]
    async fn raced_registration_is_reported_as_username_taken() {
        let service = AuthService::new(
            Arc::new(RacedStore),
            CredentialHasher::with_cost(8, 1, 1).expect("hasher"),
            SessionCodec::new("test-secret", TimeDelta::hours(1)),
        );

        let outcome = service
            .register(RegisterRequest {
                username: "alice".to_string(),
                password: "correct horse".to_string(),
            })
            .await;
        assert!(matches!(outcome, Err(Error::UsernameTaken)));
    }
}
