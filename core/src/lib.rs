// Glot Core Library
// Translation relay domain: configuration, language catalog, upstream client

pub mod config;
pub mod languages;
pub mod translate;

// Export core types
pub use config::{AppConfig, LimitsConfig, ServerConfig, UpstreamConfig};
pub use languages::Language;
pub use translate::{validate_text, Translation, Translator};

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlotError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream rejected credentials: {0}")]
    UpstreamAuth(String),

    #[error("Upstream quota exhausted: {0}")]
    UpstreamQuota(String),

    #[error("Upstream request timed out: {0}")]
    UpstreamTimeout(String),

    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("Unusable upstream response: {0}")]
    UpstreamResponse(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GlotError>;
