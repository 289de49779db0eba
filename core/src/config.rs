//! Service configuration
//!
//! Defaults come from the environment; an optional TOML file overlays them.
//! Every knob has a working default so the server starts with nothing but
//! `GLOT_API_KEY` set.

use std::fs;
use std::path::Path;

/// Top-level configuration for the Glot server
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
    pub limits: LimitsConfig,
}

/// HTTP listener address
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Upstream translation API endpoint and credentials
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    /// DeepL-compatible translate endpoint
    pub endpoint: String,
    /// Auth key sent as `Authorization: DeepL-Auth-Key {key}`
    pub api_key: Option<String>,
    /// Timeout for the forwarded request in milliseconds
    pub timeout_ms: u64,
    /// User agent string
    pub user_agent: String,
}

/// Request validation limits
#[derive(Clone, Debug)]
pub struct LimitsConfig {
    /// Longest accepted input, counted in characters
    pub max_text_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: std::env::var("GLOT_HOST")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            port: std::env::var("GLOT_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            endpoint: std::env::var("GLOT_API_ENDPOINT")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "https://api-free.deepl.com/v2/translate".to_string()),
            api_key: std::env::var("GLOT_API_KEY").ok().filter(|s| !s.is_empty()),
            timeout_ms: std::env::var("GLOT_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(10_000),
            user_agent: "glot/0.1".to_string(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_text_chars: std::env::var("GLOT_MAX_TEXT_CHARS")
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(5_000),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file (path via GLOT_CONFIG or ./glot.toml),
    /// overlaying values onto env-driven defaults.
    pub fn load() -> Self {
        let default = Self::default();
        let path = std::env::var("GLOT_CONFIG").unwrap_or_else(|_| "glot.toml".into());
        let p = Path::new(&path);
        if !p.exists() {
            tracing::debug!(target: "config", path = %path, "No TOML config found; using defaults/env");
            return default;
        }
        match fs::read_to_string(p) {
            Ok(s) => match toml::from_str::<AppToml>(&s) {
                Ok(t) => t.overlay(default),
                Err(e) => {
                    tracing::warn!(target: "config", error = %e, "Failed to parse TOML; using defaults");
                    default
                }
            },
            Err(e) => {
                tracing::warn!(target: "config", error = %e, "Failed to read TOML; using defaults");
                default
            }
        }
    }
}

// =========================
// TOML overlay definitions
// =========================

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct AppToml {
    pub server: Option<ServerToml>,
    pub upstream: Option<UpstreamToml>,
    pub limits: Option<LimitsToml>,
}

impl AppToml {
    fn overlay(self, mut base: AppConfig) -> AppConfig {
        if let Some(s) = self.server {
            s.apply(&mut base.server);
        }
        if let Some(u) = self.upstream {
            u.apply(&mut base.upstream);
        }
        if let Some(l) = self.limits {
            l.apply(&mut base.limits);
        }
        base
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct ServerToml {
    pub host: Option<String>,
    pub port: Option<u16>,
}
impl ServerToml {
    fn apply(self, s: &mut ServerConfig) {
        if let Some(v) = self.host {
            s.host = v;
        }
        if let Some(v) = self.port {
            s.port = v;
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct UpstreamToml {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub timeout_ms: Option<u64>,
    pub user_agent: Option<String>,
}
impl UpstreamToml {
    fn apply(self, u: &mut UpstreamConfig) {
        if let Some(v) = self.endpoint {
            u.endpoint = v;
        }
        if let Some(v) = self.api_key {
            u.api_key = Some(v);
        }
        if let Some(v) = self.timeout_ms {
            u.timeout_ms = v;
        }
        if let Some(v) = self.user_agent {
            u.user_agent = v;
        }
    }
}

#[derive(Debug, Clone, Default, serde::Deserialize)]
struct LimitsToml {
    pub max_text_chars: Option<usize>,
}
impl LimitsToml {
    fn apply(self, l: &mut LimitsConfig) {
        if let Some(v) = self.max_text_chars {
            l.max_text_chars = v;
        }
    }
}
