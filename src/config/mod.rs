//! Configuration module for the gripe backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::{AddrParseError, SocketAddr};
use std::path::PathBuf;

/// Default admin password; a warning is logged at startup while it is in use.
pub const DEFAULT_ADMIN_PASS: &str = "test";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the gripe mapping (id -> text)
    pub gripes_path: PathBuf,
    /// Path to the pending submission list
    pub submissions_path: PathBuf,
    /// Basic auth username for the admin area
    pub admin_user: String,
    /// Basic auth password for the admin area
    pub admin_pass: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AddrParseError> {
        dotenvy::dotenv().ok();

        let gripes_path = env::var("GRIPES_FILE")
            .unwrap_or_else(|_| "data/gripes.json".to_string())
            .into();

        let submissions_path = env::var("SUBMISSIONS_FILE")
            .unwrap_or_else(|_| "data/submissions.json".to_string())
            .into();

        let admin_user = env::var("ADMIN_USER").unwrap_or_else(|_| "gripemaster".to_string());
        let admin_pass = env::var("ADMIN_PASS").unwrap_or_else(|_| DEFAULT_ADMIN_PASS.to_string());

        let bind_addr = env::var("GRIPES_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()?;

        let log_level = env::var("GRIPES_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            gripes_path,
            submissions_path,
            admin_user,
            admin_pass,
            bind_addr,
            log_level,
        })
    }

    /// True while the admin password equals the built-in default,
    /// whether it came from the environment or the fallback.
    pub fn uses_default_admin_pass(&self) -> bool {
        self.admin_pass == DEFAULT_ADMIN_PASS
    }
}
