//! Database models and storage layer for the jot platform.
//!
//! Provides Diesel-based database models, queries, and connection
//! management for jot entities: user accounts and their posts. The
//! [`repo`] module defines backend-agnostic storage contracts; the
//! PostgreSQL pool in [`db`] and the in-process store in [`memory`]
//! both implement them.
//!
//! # Usage
//!
//! ```rust,no_run
//! use jot_models::db::{config::DbConfig, connection::DbConnection};
//! use jot_models::identity::user::User;
//!
//! // Connect and run pending migrations.
//! let config = DbConfig::from_env();
//! let db = DbConnection::new(&config).setup();
//!
//! // Query for a user.
//! let user = User::fetch_by_username("alice", &db).unwrap();
//! println!("found: {}", user.is_some());
//! ```

pub mod content;
pub mod db;
pub mod error;
pub mod identity;
pub mod memory;
pub mod prelude;
pub mod repo;
mod schema;
