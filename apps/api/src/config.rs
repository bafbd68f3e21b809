use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::locale::Language;

/// Application configuration loaded from environment variables.
/// Every variable has a default; only malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent keys are allowed; enhancement endpoints then answer 500.
    pub gemini_api_key: Option<String>,
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub snapshot_path: PathBuf,
    pub default_language: Language,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // .env.local wins over .env; both are optional
        dotenvy::from_filename(".env.local").ok();
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Config {
            gemini_api_key: var("GEMINI_API_KEY").or_else(|| var("API_KEY")),
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            cors_origin: var("CORS_ORIGIN").unwrap_or_else(|| "*".to_string()),
            snapshot_path: var("SNAPSHOT_PATH")
                .unwrap_or_else(|| "cv_editor_data_v1.json".to_string())
                .into(),
            default_language: var("DEFAULT_LANGUAGE")
                .unwrap_or_else(|| "it".to_string())
                .parse::<Language>()
                .map_err(anyhow::Error::msg)
                .context("DEFAULT_LANGUAGE must be one of it, pt, en, es")?,
            rust_log: var("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("'{}:{}' is not a valid listen address", self.host, self.port))
    }
}
