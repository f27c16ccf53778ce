//! Authentication primitives for the jot platform.
//!
//! This library provides password hashing and signed session token
//! management used by the jot web service. Both components are plain
//! values that are constructed once at startup and passed into the
//! layers that need them; nothing in here reads process state.

pub mod error;
pub mod password;
pub mod prelude;
pub mod session;
