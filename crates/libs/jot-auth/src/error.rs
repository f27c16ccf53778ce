#[derive(Debug, thiserror::Error, Clone)]
pub enum Error {
    #[error("Token Missing")]
    TokenMissing,
    #[error("Token Expired")]
    TokenExpired,
    #[error("Token Signature Invalid")]
    TokenSignatureInvalid,
    #[error("Token Malformed")]
    TokenMalformed,
    #[error("Token lifetime out of range")]
    TokenLifetimeOverflow,
    #[error(transparent)]
    TokenCreation(#[from] jsonwebtoken::errors::Error),

    #[error("Error hashing password {0}")]
    PasswordHash(argon2::password_hash::Error),

    #[error("Invalid hashing parameters {0}")]
    HashParams(argon2::Error),
}
