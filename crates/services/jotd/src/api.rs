//! API server setup for the jot backend service.

use axum::http::{HeaderValue, Method, header::CONTENT_TYPE};
use jot_web::state::AppState;
use tokio::task::JoinHandle;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::ServiceConfig;
use crate::prelude::*;

/// Starts the API server and returns its task handle.
///
/// The router comes fully layered from `jot-web`; only the cross-origin
/// policy is added here. The browser client sends the session cookie with
/// its requests, so the policy names one exact origin and allows
/// credentials; a wildcard origin cannot carry credentials.
pub async fn setup_api(state: AppState, config: &ServiceConfig) -> Result<JoinHandle<Result<()>>> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .allow_origin(AllowOrigin::exact(
            config.frontend_origin.parse::<HeaderValue>()?,
        ))
        .allow_credentials(true);

    let app = jot_web::routes::router(state).layer(cors);

    // run it with hyper
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::debug!("listening on {}", listener.local_addr().unwrap());
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await?;
        Ok(())
    });

    Ok(handle)
}
