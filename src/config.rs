//! Configuration management.
//!
//! # Data Flow
//! ```text
//! process environment (APP_ENV, HTTP_PORT)
//!     → Config::load() (defaults substituted for unset/empty)
//!     → Config (immutable)
//!     → owned by main, passed to the HTTP server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no reload path
//! - Loading cannot fail: every variable has a default
//! - Values are passed through verbatim with no parsing; a malformed
//!   port surfaces when the listener bind is attempted

use std::env;

/// Runtime configuration, loaded once at process start.
#[derive(Debug, Clone)]
pub struct Config {
    /// Runtime environment label (e.g. "dev", "staging", "prod").
    pub env: String,

    /// TCP port the HTTP listener binds to, kept as a string verbatim.
    pub http_port: String,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Recognized variables: `APP_ENV` (default `"dev"`) and `HTTP_PORT`
    /// (default `"8080"`). Unset or empty variables fall back to defaults.
    pub fn load() -> Self {
        Self {
            env: env_or("APP_ENV", "dev"),
            http_port: env_or("HTTP_PORT", "8080"),
        }
    }
}

/// Read an environment variable, substituting `default` when it is
/// unset or empty.
fn env_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(v) if !v.is_empty() => v,
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Process environment is global; serialize tests that touch it.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn load_defaults_when_unset() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::remove_var("APP_ENV");
        env::remove_var("HTTP_PORT");

        let config = Config::load();

        assert_eq!(config.env, "dev");
        assert_eq!(config.http_port, "8080");
    }

    #[test]
    fn load_uses_set_values_verbatim() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("APP_ENV", "staging");
        env::set_var("HTTP_PORT", "not-a-port");

        let config = Config::load();

        // No parsing or validation; the value is carried as-is.
        assert_eq!(config.env, "staging");
        assert_eq!(config.http_port, "not-a-port");

        env::remove_var("APP_ENV");
        env::remove_var("HTTP_PORT");
    }

    #[test]
    fn empty_value_falls_back_to_default() {
        let _guard = ENV_LOCK.lock().unwrap();
        env::set_var("HTTP_PORT", "");

        let config = Config::load();

        assert_eq!(config.http_port, "8080");

        env::remove_var("HTTP_PORT");
    }
}
