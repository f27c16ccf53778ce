//! Error types for the jot backend service.
//!
//! Startup is the only fallible surface of this binary; request errors
//! are handled inside `jot-web` and never reach these variants.

/// Errors that can occur while bringing up the jot backend service.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    InvalidHeaderValue(#[from] axum::http::header::InvalidHeaderValue),
}
