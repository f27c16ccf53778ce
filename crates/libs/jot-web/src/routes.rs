//! HTTP routes for the jot service.
//!
//! Route map:
//!
//! | Method | Path                 | Auth | Success |
//! |--------|----------------------|------|---------|
//! | GET    | `/`                  | no   | 200     |
//! | POST   | `/api/auth/register` | no   | 201     |
//! | POST   | `/api/auth/login`    | no   | 200     |
//! | POST   | `/api/posts`         | yes  | 201     |

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tower_cookies::{CookieManagerLayer, Cookies};
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

use crate::auth::{LoginRequest, RegisterRequest, UserView};
use crate::ctx::Ctx;
use crate::ctx::resolver::{mw_ctx_resolver, set_session_cookie};
use crate::mw_auth::mw_require_auth;
use crate::posts::{self, PostCreate, PostView};
use crate::prelude::*;
use crate::state::AppState;

/// Plain confirmation body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable outcome message.
    pub message: String,
}

/// Body returned by a successful login.
///
/// The session token travels in the cookie, not in this body.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Human-readable outcome message.
    pub message: String,
    /// The logged-in user.
    pub user: UserView,
}

/// Builds the service router.
///
/// All routes run under the cookie manager and the session resolver;
/// only the post routes sit behind the auth gate. The cookie layer is
/// outermost so the resolver can read cookies, and tracing wraps the
/// handlers themselves.
pub fn router(state: AppState) -> Router {
    let sessions = state.sessions.clone();

    let protected = Router::new()
        .route("/api/posts", post(create_post))
        .route_layer(middleware::from_fn(mw_require_auth));

    Router::new()
        .route("/", get(root))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .merge(protected)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(middleware::from_fn_with_state(sessions, mw_ctx_resolver))
        .layer(CookieManagerLayer::new())
}

/// Liveness probe.
async fn root() -> &'static str {
    "jot backend is live"
}

async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>)> {
    let user = state.auth.register(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: format!("user '{}' registered", user.username),
        }),
    ))
}

async fn login(
    State(state): State<AppState>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let outcome = state.auth.login(payload).await?;
    set_session_cookie(&cookies, outcome.token, state.sessions.ttl());
    Ok(Json(LoginResponse {
        message: "login successful".to_string(),
        user: outcome.user,
    }))
}

async fn create_post(
    State(state): State<AppState>,
    ctx: Ctx,
    Json(payload): Json<PostCreate>,
) -> Result<(StatusCode, Json<PostView>)> {
    let post = posts::create_post(state.posts.clone(), ctx.user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(post)))
}
