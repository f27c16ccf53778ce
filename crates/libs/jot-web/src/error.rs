//! Main Crate Error

use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Models(#[from] jot_models::error::Error),

    #[error(transparent)]
    Auth(#[from] jot_auth::error::Error),

    #[error(transparent)]
    Join(#[from] tokio::task::JoinError),

    /* Api Errors */
    #[error("Missing Credentials")]
    MissingCredentials,

    #[error("Username Taken")]
    UsernameTaken,

    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("Context Missing")]
    CtxMissing,
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        error!("Creating API error response for error: {:?}", self);
        let (status, message) = match self {
            Error::MissingCredentials => (
                StatusCode::BAD_REQUEST,
                "username and password are required",
            ),
            Error::UsernameTaken => (StatusCode::BAD_REQUEST, "username already taken"),
            // Unknown username and wrong password share this variant, so
            // both produce this exact response.
            Error::InvalidCredentials => (StatusCode::BAD_REQUEST, "invalid username or password"),
            // Every session failure collapses into the same answer; the
            // body must not reveal which check failed.
            Error::CtxMissing => (StatusCode::UNAUTHORIZED, "authentication required"),
            Error::Auth(err) => match err {
                jot_auth::error::Error::TokenMissing
                | jot_auth::error::Error::TokenExpired
                | jot_auth::error::Error::TokenSignatureInvalid
                | jot_auth::error::Error::TokenMalformed => {
                    (StatusCode::UNAUTHORIZED, "authentication required")
                }
                jot_auth::error::Error::TokenCreation(_)
                | jot_auth::error::Error::TokenLifetimeOverflow
                | jot_auth::error::Error::PasswordHash(_)
                | jot_auth::error::Error::HashParams(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
                }
            },
            Error::Models(_) | Error::Join(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        let body = Json(json!({ "message": message }));
        (status, body).into_response()
    }
}
