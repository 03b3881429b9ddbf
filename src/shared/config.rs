//! Environment-driven configuration.
//!
//! Everything the crate needs from the outside world is read once at
//! bootstrap: the REST collaborator base URL, the Jikan base URL and the
//! path of the durable session file.

use std::env;
use std::path::PathBuf;

const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";
const DEFAULT_JIKAN_BASE_URL: &str = "https://api.jikan.moe/v4";
const DEFAULT_SESSION_FILE: &str = ".miteru/session.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the REST collaborator (no trailing slash).
    pub api_base_url: String,
    /// Base URL of the Jikan enrichment API (no trailing slash).
    pub jikan_base_url: String,
    /// Path of the durable key-value session file.
    pub session_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url = env::var("API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let jikan_base_url = env::var("JIKAN_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_JIKAN_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let session_file = env::var("MITERU_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        Self {
            api_base_url,
            jikan_base_url,
            session_file,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            jikan_base_url: DEFAULT_JIKAN_BASE_URL.to_string(),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}
