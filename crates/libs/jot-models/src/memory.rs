//! In-memory storage backend.
//!
//! Implements the repository contracts on plain vectors behind mutexes.
//! Tests and local development use this backend to run the full web
//! stack without a database.

use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use crate::content::post::{NewPost, Post};
use crate::identity::user::{NewUser, User};
use crate::prelude::*;
use crate::repo::{IdentityRepository, PostRepository};

/// In-memory repository over plain vectors.
///
/// The uniqueness check and the insert happen under one lock, so the
/// username-uniqueness guarantee matches the database backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    posts: Mutex<Vec<Post>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored users.
    pub fn users(&self) -> Result<Vec<User>> {
        Ok(self.users.lock().map_err(|_| Error::LockPoisoned)?.clone())
    }

    /// Snapshot of all stored posts.
    pub fn posts(&self) -> Result<Vec<Post>> {
        Ok(self.posts.lock().map_err(|_| Error::LockPoisoned)?.clone())
    }
}

impl IdentityRepository for MemoryStore {
    fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let users = self.users.lock().map_err(|_| Error::LockPoisoned)?;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    fn create_user(&self, user: NewUser) -> Result<User> {
        let mut users = self.users.lock().map_err(|_| Error::LockPoisoned)?;
        if users.iter().any(|u| u.username == user.username) {
            return Err(Error::DuplicateKey);
        }
        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_digest: user.password_digest,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }
}

impl PostRepository for MemoryStore {
    fn create_post(&self, post: NewPost) -> Result<Post> {
        let mut posts = self.posts.lock().map_err(|_| Error::LockPoisoned)?;
        let post = Post {
            id: Uuid::new_v4(),
            title: post.title,
            content: post.content,
            author_id: post.author_id,
            created_at: Utc::now(),
        };
        posts.push(post.clone());
        Ok(post)
    }
}
