//! Authentication middleware for protecting routes.

use crate::prelude::*;
use axum::{extract::Request, middleware::Next, response::Response};

use super::ctx::Ctx;

/// Middleware that requires a verified session for a route.
///
/// The resolver has already stored the session outcome in the request
/// extensions; this gate rejects any request whose outcome is an error.
/// All failures map to the same generic unauthenticated response.
///
/// # Examples
///
/// ```rust,no_run
/// use axum::{Router, routing::post};
/// use jot_web::mw_auth::mw_require_auth;
///
/// let app: Router<()> = Router::new()
///     .route("/protected", post(protected_handler))
///     .route_layer(axum::middleware::from_fn(mw_require_auth));
///
/// async fn protected_handler() -> &'static str {
///     "only with a live session"
/// }
/// ```
pub async fn mw_require_auth(ctx: Result<Ctx>, req: Request, next: Next) -> Result<Response> {
    ctx?;
    Ok(next.run(req).await)
}
