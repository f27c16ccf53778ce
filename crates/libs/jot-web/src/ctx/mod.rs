//! Request context management for web handlers.
//!
//! This module provides the context structure attached to verified
//! sessions and the resolver middleware that produces it.

use uuid::Uuid;

pub mod resolver;

/// Identity of the authenticated user.
#[derive(Debug, Clone)]
pub struct CtxUser {
    /// The unique user ID.
    pub id: Uuid,
}

/// Request context for a verified session.
#[derive(Clone, Debug)]
pub struct Ctx {
    /// The authenticated user.
    pub user: CtxUser,
}

impl Ctx {
    /// Creates a new request context.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jot_web::ctx::Ctx;
    /// use uuid::Uuid;
    ///
    /// let user_id = Uuid::new_v4();
    /// let ctx = Ctx::new(user_id);
    /// assert_eq!(ctx.user.id, user_id);
    /// ```
    pub fn new(id: Uuid) -> Self {
        Self {
            user: CtxUser { id },
        }
    }
}
