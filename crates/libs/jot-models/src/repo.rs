//! Backend-agnostic storage contracts.
//!
//! The web layer talks to storage through these traits so the same
//! handlers run against PostgreSQL in production and against the
//! in-memory backend in tests. Implementations are synchronous; async
//! callers move them onto blocking threads.

use crate::content::post::{NewPost, Post};
use crate::db::connection::DbConnection;
use crate::identity::user::{NewUser, User};
use crate::prelude::*;

/// Storage contract for user accounts.
pub trait IdentityRepository: Send + Sync {
    /// Looks up a user by exact, case-sensitive username.
    fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Persists a new user.
    ///
    /// Returns [`Error::DuplicateKey`] when the username is already taken,
    /// including when a concurrent insert of the same name wins the race.
    fn create_user(&self, user: NewUser) -> Result<User>;
}

/// Storage contract for posts.
pub trait PostRepository: Send + Sync {
    /// Persists a new post.
    fn create_post(&self, post: NewPost) -> Result<Post>;
}

impl IdentityRepository for DbConnection {
    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        User::fetch_by_username(username, self)
    }

    fn create_user(&self, user: NewUser) -> Result<User> {
        user.create(self)
    }
}

impl PostRepository for DbConnection {
    fn create_post(&self, post: NewPost) -> Result<Post> {
        post.create(self)
    }
}
