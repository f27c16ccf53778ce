//! Session resolver for extracting user identity from HTTP requests.

use axum::{
    body::Body,
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use chrono::TimeDelta;
use jot_auth::session::SessionCodec;
use tower_cookies::{Cookie, Cookies, cookie::time::Duration};

use crate::ctx::Ctx;
use crate::prelude::*;

/// The name of the cookie used to store session tokens.
pub const SESSION_COOKIE: &str = "session-token";

/// Middleware for resolving request context from the session cookie.
///
/// Extracts the session token from the cookie, verifies it against the
/// codec and stores the outcome in the request extensions, where the
/// [`Ctx`] extractor and the auth gate pick it up. A failed
/// verification also clears the cookie so clients stop replaying a
/// stale token.
///
/// # Examples
///
/// ```rust
/// use axum::Router;
/// use chrono::TimeDelta;
/// use jot_auth::session::SessionCodec;
/// use jot_web::ctx::resolver::mw_ctx_resolver;
///
/// let codec = SessionCodec::new("secret", TimeDelta::hours(1));
/// let app: Router<()> = Router::new()
///     .layer(axum::middleware::from_fn_with_state(codec, mw_ctx_resolver));
/// ```
#[axum::debug_middleware]
pub async fn mw_ctx_resolver(
    State(sessions): State<SessionCodec>,
    cookies: Cookies,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let claims = cookies
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or(jot_auth::error::Error::TokenMissing)
        .and_then(|token| sessions.verify(&token));

    let ctx = claims.map(|claims| Ctx::new(claims.sub));

    if ctx.is_err() {
        let mut stale = Cookie::from(SESSION_COOKIE);
        stale.set_path("/");
        cookies.remove(stale);
    }
    req.extensions_mut().insert(ctx);

    next.run(req).await
}

/// Stores a freshly issued session token in the response cookies.
///
/// The cookie is HTTP-only and expires together with the token it
/// carries.
pub fn set_session_cookie(cookies: &Cookies, token: String, ttl: TimeDelta) {
    let mut cookie = Cookie::new(SESSION_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_path("/");
    cookie.set_max_age(Duration::seconds(ttl.num_seconds()));
    cookies.add(cookie);
}

impl<S: Send + Sync> FromRequestParts<S> for Ctx {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self> {
        Ok(parts
            .extensions
            .get::<std::result::Result<Ctx, jot_auth::error::Error>>()
            .ok_or(Error::CtxMissing)?
            .clone()?)
    }
}
