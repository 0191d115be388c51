//! Settings structures for the proxy configuration

use anyhow::{bail, Context, Result};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default upstream search endpoint
pub const DEFAULT_UPSTREAM_URL: &str = "https://data.gopher-ai.com/api/v1/search/live/twitter";

/// Main settings structure, read from settings.yml and the environment
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub upstream: UpstreamSettings,
    pub public: PublicSettings,
    pub static_files: StaticSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse settings from a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with process environment variables
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge overrides from an arbitrary variable source
    pub fn merge_vars<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var("SAMUDRA_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("SAMUDRA_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = var("SAMUDRA_DEBUG") {
            self.server.debug = parse_flag(&val);
        }
        if let Some(val) = var("GOPHER_API_URL") {
            self.upstream.url = val;
        }
        if let Some(val) = var("GOPHER_AUTH_TOKEN") {
            self.upstream.auth_token = Secret::new(val);
        }
        if let Some(val) = var("SUPABASE_URL") {
            self.public.supabase_url = val;
        }
        if let Some(val) = var("SUPABASE_ANON_KEY") {
            self.public.supabase_anon_key = val;
        }
        if let Some(val) = var("SAMUDRA_STATIC_ROOT") {
            self.static_files.root = PathBuf::from(val);
        }
        if let Some(val) = var("SAMUDRA_DASHBOARD") {
            self.static_files.dashboard = val;
        }
    }

    /// Check values that would only fail later, at request time.
    /// The upstream url is checked when the upstream client is built.
    pub fn validate(&self) -> Result<()> {
        if self.upstream.search_timeout == 0 || self.upstream.result_timeout == 0 {
            bail!("upstream timeouts must be greater than zero");
        }
        Ok(())
    }
}

fn parse_flag(val: &str) -> bool {
    matches!(
        val.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Server settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Bind address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Verbose logging
    pub debug: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5002,
            debug: false,
        }
    }
}

/// Upstream search API settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamSettings {
    /// Search submission URL; results live under `{url}/result/{uuid}`
    pub url: String,
    /// Bearer token sent with every upstream call
    pub auth_token: Secret<String>,
    /// Search submission timeout in seconds
    pub search_timeout: u64,
    /// Result lookup timeout in seconds
    pub result_timeout: u64,
}

impl UpstreamSettings {
    /// Whether a bearer token was configured
    pub fn has_token(&self) -> bool {
        !self.auth_token.expose_secret().is_empty()
    }

    pub fn search_timeout(&self) -> Duration {
        Duration::from_secs(self.search_timeout)
    }

    pub fn result_timeout(&self) -> Duration {
        Duration::from_secs(self.result_timeout)
    }
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
            auth_token: Secret::new(String::new()),
            search_timeout: crate::SEARCH_TIMEOUT,
            result_timeout: crate::RESULT_TIMEOUT,
        }
    }
}

/// Values the dashboard is allowed to read from `/api/config`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PublicSettings {
    pub supabase_url: String,
    pub supabase_anon_key: String,
}

/// Static file serving
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StaticSettings {
    /// Directory every static lookup is scoped to
    pub root: PathBuf,
    /// Document served at `/`, relative to `root`
    pub dashboard: String,
    /// Files never served even if they resolve under `root`, such as the
    /// loaded settings file and `.env`
    #[serde(skip)]
    pub private_files: Vec<PathBuf>,
}

impl StaticSettings {
    pub fn dashboard_path(&self) -> PathBuf {
        self.root.join(&self.dashboard)
    }
}

impl Default for StaticSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("static"),
            dashboard: "samudradashboard.html".to_string(),
            private_files: Vec::new(),
        }
    }
}
