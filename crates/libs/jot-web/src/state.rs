//! Shared application state for the web layer.

use std::sync::Arc;

use jot_auth::password::CredentialHasher;
use jot_auth::session::SessionCodec;
use jot_models::repo::{IdentityRepository, PostRepository};

use crate::auth::AuthService;

/// State shared by all routes.
///
/// Built once at startup from explicit configuration and handed to the
/// router; handlers receive it through axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Authentication flows.
    pub auth: AuthService,
    /// Post storage.
    pub posts: Arc<dyn PostRepository>,
    /// Session token codec, shared with the resolver middleware.
    pub sessions: SessionCodec,
}

impl AppState {
    /// Creates the application state from its parts.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use chrono::TimeDelta;
    /// use jot_auth::{password::CredentialHasher, session::SessionCodec};
    /// use jot_models::memory::MemoryStore;
    /// use jot_web::state::AppState;
    ///
    /// let store = Arc::new(MemoryStore::new());
    /// let state = AppState::new(
    ///     store.clone(),
    ///     store,
    ///     CredentialHasher::new(),
    ///     SessionCodec::new("secret", TimeDelta::hours(1)),
    /// );
    /// ```
    pub fn new(
        identity: Arc<dyn IdentityRepository>,
        posts: Arc<dyn PostRepository>,
        hasher: CredentialHasher,
        sessions: SessionCodec,
    ) -> Self {
        Self {
            auth: AuthService::new(identity, hasher, sessions.clone()),
            posts,
            sessions,
        }
    }
}
