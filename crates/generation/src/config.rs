use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const BASE_URL_ENV: &str = "FLASHCARDS_API_BASE";
pub const READ_TIMEOUT_ENV: &str = "FLASHCARDS_READ_TIMEOUT_SECS";

/// Where the generation service lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service root, e.g. `http://localhost:5000`
    pub base_url: String,

    pub connect_timeout_secs: u64,

    /// Generation can take a while on the server side.
    pub read_timeout_secs: u64,

    pub write_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout_secs: 5,
            read_timeout_secs: 120,
            write_timeout_secs: 45,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by `FLASHCARDS_API_BASE` / `FLASHCARDS_READ_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base) = std::env::var(BASE_URL_ENV) {
            if !base.trim().is_empty() {
                config.base_url = base.trim().to_string();
            }
        }
        if let Some(secs) = std::env::var(READ_TIMEOUT_ENV)
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
        {
            config.read_timeout_secs = secs;
        }
        config
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_read_timeout(mut self, secs: u64) -> Self {
        self.read_timeout_secs = secs;
        self
    }

    pub fn with_connect_timeout(mut self, secs: u64) -> Self {
        self.connect_timeout_secs = secs;
        self
    }

    /// `<base>/<path>` with exactly one slash between.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Download link for an exported file name returned by the service.
    pub fn export_url(&self, file: &str) -> String {
        format!("{}?file={}", self.endpoint("export"), urlencoding::encode(file))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)
            .with_context(|| format!("write client config {}", path.display()))?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read client config {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("parse client config {}", path.display()))?;
        Ok(config)
    }
}
