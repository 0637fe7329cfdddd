use anyhow::{bail, Result};

use crate::types::AuthMode;

/// Environment key holding the account service base URL.
pub const BASE_URL_ENV: &str = "ACCOUNT_BASE_URL";

/// Environment key selecting [`AppMode`].
pub const MODE_ENV: &str = "APP_MODE";

/// Base URL used in local mode when nothing is configured.
pub const LOCAL_BASE_URL: &str = "http://localhost:8080";

// Baked in at compile time. The browser bundle has no process environment,
// so the server and the client must both read these.
const BUILD_MODE: Option<&str> = option_env!("APP_MODE");
const BUILD_BASE_URL: Option<&str> = option_env!("ACCOUNT_BASE_URL");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    /// Mode compiled into this build.
    pub fn from_build_env() -> Self {
        Self::parse(BUILD_MODE.unwrap_or_default())
    }

    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Deployment configuration for the account service client.
///
/// Built once per app instance and handed to the client; business logic
/// never reads the environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountConfig {
    pub mode: AppMode,
    base_url: String,
}

impl AccountConfig {
    /// Build a config for an explicit base URL. Trailing slashes are dropped.
    pub fn new(mode: AppMode, base_url: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into().trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            bail!("{BASE_URL_ENV} must not be empty");
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            bail!("{BASE_URL_ENV} must be an http(s) URL, got {base_url:?}");
        }
        Ok(Self { mode, base_url })
    }

    /// Load the config compiled into this build from `APP_MODE` and
    /// `ACCOUNT_BASE_URL`.
    ///
    /// The runtime environment is ignored, so a server render and the
    /// hydrated browser bundle built from the same environment agree.
    pub fn from_build_env() -> Result<Self> {
        Self::from_values(
            AppMode::from_build_env(),
            BUILD_BASE_URL.map(str::to_string),
        )
    }

    pub fn from_values(mode: AppMode, base_url: Option<String>) -> Result<Self> {
        match base_url.filter(|v| !v.trim().is_empty()) {
            Some(url) => Self::new(mode, url),
            None if mode == AppMode::Local => {
                tracing::info!("config: {BASE_URL_ENV} not set, using {LOCAL_BASE_URL}");
                Self::new(mode, LOCAL_BASE_URL)
            }
            None => bail!("{BASE_URL_ENV} must be set"),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the endpoint serving `mode`.
    pub fn endpoint(&self, mode: AuthMode) -> String {
        format!("{}{}", self.base_url, mode.endpoint_path())
    }
}

/// Load `.env` into the server process (log filter, bind address).
///
/// Returns the loaded path, or `None` when there is no file. Runs before the
/// tracing subscriber is installed, so the caller logs the outcome.
#[cfg(feature = "server")]
pub fn load_dotenv() -> std::result::Result<Option<std::path::PathBuf>, dotenvy::Error> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(e),
    }
}
