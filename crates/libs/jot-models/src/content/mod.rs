//! Content models.
//!
//! This module contains the post model for user-authored content.

pub mod post;
