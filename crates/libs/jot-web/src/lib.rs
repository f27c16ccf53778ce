//! Web layer for the jot platform.
//!
//! This library provides the HTTP routes, session middleware and
//! authentication flows for the jot service. State is explicit: the
//! router is built from an [`state::AppState`] carrying the storage
//! handles, the credential hasher and the session codec, and nothing
//! in here reads process globals.

pub mod auth;
pub mod ctx;
pub mod error;
pub mod mw_auth;
pub mod posts;
pub mod prelude;
pub mod routes;
pub mod state;
