//! Signed session token management.
//!
//! This module provides the [`SessionCodec`], which issues and verifies the
//! signed, time-bounded tokens that represent a logged-in session. Tokens
//! are JSON Web Tokens signed with HMAC-SHA256; the claims carry the user
//! id plus issue and expiry timestamps and nothing else.
//!
//! The codec holds the keys derived from the process-wide session secret
//! together with the configured token lifetime. It is built once at startup
//! and passed into the layers that need it, so the secret itself never
//! travels through handler code and never appears in logs or error values.
//!
//! # Examples
//!
//! ```rust
//! use jot_auth::session::SessionCodec;
//! use chrono::TimeDelta;
//! use uuid::Uuid;
//!
//! let codec = SessionCodec::new("my-signing-secret", TimeDelta::hours(1));
//!
//! let user_id = Uuid::new_v4();
//! let token = codec.issue(user_id).unwrap();
//!
//! let claims = codec.verify(&token).unwrap();
//! assert_eq!(claims.sub, user_id);
//! ```

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::prelude::*;

/// JWT signing algorithm used for session tokens.
const ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by a session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject (user ID).
    pub sub: Uuid,
    /// Issued at time.
    pub iat: i64,
    /// Expiration time.
    pub exp: i64,
}

/// Issues and verifies signed session tokens.
///
/// Cloning the codec is cheap; all clones share the same secret-derived
/// keys and lifetime.
#[derive(Clone)]
pub struct SessionCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: TimeDelta,
}

impl SessionCodec {
    /// Creates a codec from the signing secret and token lifetime.
    pub fn new(secret: &str, ttl: TimeDelta) -> Self {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is exact; a token older than its lifetime is expired.
        validation.leeway = 0;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Lifetime applied to issued tokens.
    pub fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Issues a signed token for the given user.
    ///
    /// The token carries the user id as subject and expires `ttl` after
    /// issue.
    pub fn issue(&self, user_id: Uuid) -> Result<String> {
        let now = Utc::now();
        let expiration = now
            .checked_add_signed(self.ttl)
            .ok_or(Error::TokenLifetimeOverflow)?;
        let claims = SessionClaims {
            sub: user_id,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };
        Ok(encode(&Header::new(ALGORITHM), &claims, &self.encoding)?)
    }

    /// Verifies a token and extracts its claims.
    ///
    /// Expired tokens, signature mismatches and token strings that do not
    /// parse at all are reported as distinct errors so callers can log the
    /// reason while still answering clients generically.
    pub fn verify(&self, token: &str) -> Result<SessionClaims> {
        match decode::<SessionClaims>(token, &self.decoding, &self.validation) {
            Ok(data) => Ok(data.claims),
            Err(err) => Err(match err.kind() {
                ErrorKind::ExpiredSignature => Error::TokenExpired,
                ErrorKind::InvalidSignature => Error::TokenSignatureInvalid,
                _ => Error::TokenMalformed,
            }),
        }
    }
}
