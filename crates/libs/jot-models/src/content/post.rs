//! Post content model.

use crate::prelude::*;
use crate::{db::connection::DbConnection, schema::posts::dsl::*};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A post written by a registered user.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, PartialEq, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Post {
    /// Unique post ID.
    pub id: Uuid,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// The user that wrote this post.
    pub author_id: Uuid,
    /// When this post was created.
    pub created_at: DateTime<Utc>,
}

/// Data for creating a new post.
///
/// The author id always comes from the verified session, never from the
/// request body.
#[derive(Insertable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPost {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// The user writing the post.
    pub author_id: Uuid,
}

impl NewPost {
    /// Creates the post in the database.
    pub fn create(self, connection: &DbConnection) -> Result<Post> {
        let conn = &mut connection.pool.get()?;

        Ok(diesel::insert_into(posts)
            .values(&self)
            .returning(Post::as_returning())
            .get_result(conn)?)
    }
}
