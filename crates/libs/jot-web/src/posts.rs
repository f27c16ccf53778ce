//! Post creation for authenticated users.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use jot_models::content::post::{NewPost, Post};
use jot_models::repo::PostRepository;
use serde::{Deserialize, Serialize};
use tokio::task;
use uuid::Uuid;

use crate::prelude::*;

/// Post creation payload.
///
/// There is deliberately no author field; the author always comes from
/// the verified session.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostCreate {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

/// Public view of a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    /// Unique post ID.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// The user that wrote the post.
    pub author: Uuid,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            author: post.author_id,
            created_at: post.created_at,
        }
    }
}

/// Persists a post on behalf of the authenticated author.
pub async fn create_post(
    posts: Arc<dyn PostRepository>,
    author: Uuid,
    payload: PostCreate,
) -> Result<PostView> {
    let post = NewPost {
        title: payload.title,
        content: payload.content,
        author_id: author,
    };
    let created = task::spawn_blocking(move || posts.create_post(post)).await??;
    Ok(PostView::from(created))
}
