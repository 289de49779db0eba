use glot_core::{AppConfig, Translator};
use glot_server::{AppState, GlotServer};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Environment from .env if present, then logging / tracing
    dotenvy::dotenv().ok();
    let filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,glot_core=info,glot_server=info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    // Load configuration (defaults + env + optional TOML overlay)
    let cfg = AppConfig::load();
    info!(
        target = "server",
        endpoint = %cfg.upstream.endpoint,
        api_key_set = cfg.upstream.api_key.is_some(),
        max_text_chars = cfg.limits.max_text_chars,
        "Starting Glot"
    );

    let translator = Translator::new(cfg.upstream.clone())?;
    let state = AppState {
        translator: Arc::new(translator),
        limits: cfg.limits.clone(),
    };

    GlotServer::new(cfg.server.clone(), state).serve().await?;

    Ok(())
}
