//! Common types and utilities.

/// Authentication error type.
pub use crate::error::Error;

/// Authentication result type.
pub type Result<T> = core::result::Result<T, Error>;
