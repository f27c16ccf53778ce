//! Service configuration management.

use std::fmt::Display;

use chrono::TimeDelta;

/// Default address the API server binds to.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5001";
/// Default origin allowed to send credentialed requests.
const DEFAULT_FRONTEND_ORIGIN: &str = "http://localhost:5173";
/// Default session lifetime in seconds, one hour.
const DEFAULT_SESSION_TTL_SECS: i64 = 3600;

/// Runtime configuration for the jot backend service.
///
/// Built once at startup and handed to the constructors that need it;
/// nothing reads the environment after this point.
pub struct ServiceConfig {
    /// Key used to sign and verify session tokens.
    pub session_secret: String,
    /// How long an issued session stays valid.
    pub session_ttl: TimeDelta,
    /// Address the API server binds to.
    pub bind_addr: String,
    /// Origin allowed to send credentialed requests.
    pub frontend_origin: String,
}

/// Get required environment variable or panic.
fn get_env_variable(var: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| panic!("Env Variable '{var}' missing"))
}

/// Get optional environment variable with a fallback.
fn get_env_variable_or(var: &str, fallback: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| fallback.to_string())
}

impl ServiceConfig {
    /// Create service configuration from environment variables.
    ///
    /// `SESSION_SECRET` is required and the service panics when it is
    /// absent, so an instance without a signing key refuses to start
    /// instead of issuing sessions nobody can verify. `BIND_ADDR`,
    /// `FRONTEND_ORIGIN` and `SESSION_TTL_SECS` fall back to defaults.
    pub fn from_env() -> Self {
        let session_ttl = match std::env::var("SESSION_TTL_SECS") {
            Ok(raw) => TimeDelta::seconds(
                raw.parse()
                    .unwrap_or_else(|_| panic!("Env Variable 'SESSION_TTL_SECS' is not a number")),
            ),
            Err(_) => TimeDelta::seconds(DEFAULT_SESSION_TTL_SECS),
        };

        Self {
            session_secret: get_env_variable("SESSION_SECRET"),
            session_ttl,
            bind_addr: get_env_variable_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            frontend_origin: get_env_variable_or("FRONTEND_ORIGIN", DEFAULT_FRONTEND_ORIGIN),
        }
    }
}

// The secret must never reach the logs.
impl Display for ServiceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bind_addr={} frontend_origin={} session_ttl={}s session_secret=REDACTED",
            self.bind_addr,
            self.frontend_origin,
            self.session_ttl.num_seconds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_redacts_the_session_secret() {
        let config = ServiceConfig {
            session_secret: "swordfish".to_string(),
            session_ttl: TimeDelta::seconds(DEFAULT_SESSION_TTL_SECS),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            frontend_origin: DEFAULT_FRONTEND_ORIGIN.to_string(),
        };

        let rendered = format!("{config}");
        assert!(!rendered.contains("swordfish"));
        assert!(rendered.contains("session_secret=REDACTED"));
        assert!(rendered.contains("session_ttl=3600s"));
    }
}
