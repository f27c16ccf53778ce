use std::net::SocketAddr;
use std::sync::Arc;

use chrono::TimeDelta;
use jot_auth::{password::CredentialHasher, session::SessionCodec};
use jot_models::db::{config::DbConfig, connection::DbConnection};
use jot_web::state::AppState;

pub mod db_test_context;
pub mod test_context;

pub const TEST_SECRET: &str = "jotd-integration-secret";

pub fn from_env(var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| panic!("Env Variable '{var}' missing"))
}

/// True when the suite has a database to talk to.
///
/// The whole suite needs PostgreSQL; without `DATABASE_URL` each test
/// passes as a skip so the rest of the workspace can still be checked.
pub fn database_configured() -> bool {
    std::env::var("DATABASE_URL").is_ok()
}

/// Serves the real router over the configured database on an ephemeral port.
///
/// The caller is expected to have migrated the database already.
pub async fn spawn_service() -> SocketAddr {
    let db = Arc::new(DbConnection::new(&DbConfig::from_env()));
    let state = AppState::new(
        db.clone(),
        db,
        // Cheap hashing parameters keep the suite fast.
        CredentialHasher::with_cost(8, 1, 1).expect("Failed to build credential hasher"),
        SessionCodec::new(TEST_SECRET, TimeDelta::hours(1)),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read test listener address");
    tokio::spawn(async move {
        axum::serve(listener, jot_web::routes::router(state))
            .await
            .expect("Test server stopped");
    });

    addr
}
