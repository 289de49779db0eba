// Glot HTTP API server
//
// Serves the embedded web UI and the /api routes that relay translation
// requests to the configured upstream API.

use crate::static_assets;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use glot_core::{languages, GlotError, LimitsConfig, ServerConfig, Translator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub translator: Arc<Translator>,
    pub limits: LimitsConfig,
}

/// Glot HTTP server
pub struct GlotServer {
    config: ServerConfig,
    state: AppState,
}

impl GlotServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Start the server and block until shutdown
    pub async fn serve(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        info!(
            target: "server",
            addr = %addr,
            "Starting Glot server"
        );

        let app = router(self.state);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        info!(
            target: "server",
            url = %format!("http://{}", addr),
            "Glot server ready"
        );

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

/// Build the route stack
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/static/*asset", get(static_asset_handler))
        .route("/api/languages", get(languages_handler))
        .route("/api/translate", post(translate_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(target: "server", error = %e, "Failed to install Ctrl+C handler");
        // Returning here would start the graceful shutdown immediately
        std::future::pending::<()>().await;
    }
    info!(target: "server", "Shutdown signal received");
}

/// POST /api/translate request body
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct TranslateBody {
    text: Option<String>,
    target_lang: Option<String>,
    source_lang: Option<String>,
}

/// Successful translation reply
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateReply {
    translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detected_source_lang: Option<String>,
}

/// Error payload shared by every non-2xx reply
#[derive(Debug, Serialize)]
struct ErrorReply {
    message: String,
}

/// Entry in the /api/languages listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LanguageEntry {
    code: &'static str,
    name: &'static str,
    speech_tag: &'static str,
}

/// Serve the main HTML page
async fn index_handler() -> Html<&'static str> {
    Html(static_assets::index())
}

async fn static_asset_handler(Path(asset): Path<String>) -> impl IntoResponse {
    match static_assets::get(asset.as_str()) {
        Some(asset) => {
            let mut headers = HeaderMap::new();
            if let Ok(value) = header::HeaderValue::from_str(asset.content_type) {
                headers.insert(header::CONTENT_TYPE, value);
            }
            (StatusCode::OK, headers, asset.body).into_response()
        }
        None => {
            let headers = HeaderMap::new();
            (StatusCode::NOT_FOUND, headers, b"Not found".as_slice()).into_response()
        }
    }
}

/// List the supported target languages
async fn languages_handler() -> Json<Vec<LanguageEntry>> {
    let entries = languages::catalog()
        .iter()
        .map(|l| LanguageEntry {
            code: l.code,
            name: l.name,
            speech_tag: l.speech_tag,
        })
        .collect();
    Json(entries)
}

/// Proxy one translation request upstream
async fn translate_handler(
    State(state): State<AppState>,
    body: Result<Json<TranslateBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            warn!(target: "api", error = %rejection, "Rejected malformed translate request");
            return error_reply(
                StatusCode::BAD_REQUEST,
                "Request body must be JSON with text and targetLang fields.",
            );
        }
    };

    let text = body.text.as_deref().unwrap_or("");
    let target_code = body.target_lang.as_deref().unwrap_or("");
    if text.trim().is_empty() || target_code.trim().is_empty() {
        return error_reply(
            StatusCode::BAD_REQUEST,
            "Text and target language are required.",
        );
    }

    if let Err(e) = glot_core::validate_text(text, state.limits.max_text_chars) {
        return translate_error(e);
    }

    let Some(target) = languages::lookup(target_code) else {
        return error_reply(
            StatusCode::BAD_REQUEST,
            &format!("Unsupported target language: {}", target_code.trim()),
        );
    };
    // Optional hint; unknown values fall back to upstream auto-detection
    let source = body.source_lang.as_deref().and_then(languages::lookup);

    info!(
        target: "api",
        lang = %target.code,
        chars = text.chars().count(),
        "Translation requested"
    );

    match state.translator.translate(text, target, source).await {
        Ok(t) => (
            StatusCode::OK,
            Json(TranslateReply {
                translation: t.text,
                detected_source_lang: t.detected_source_lang,
            }),
        )
            .into_response(),
        Err(e) => translate_error(e),
    }
}

/// Map a translation failure onto a status code and a client-safe message
///
/// Upstream details stay in the logs; clients only ever see the fixed
/// messages below.
fn translate_error(err: GlotError) -> Response {
    let (status, message) = match &err {
        GlotError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        GlotError::Config(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Translation service is not configured.".to_string(),
        ),
        GlotError::UpstreamAuth(_) => (
            StatusCode::BAD_GATEWAY,
            "Translation service rejected the configured API key.".to_string(),
        ),
        GlotError::UpstreamQuota(_) => (
            StatusCode::TOO_MANY_REQUESTS,
            "Translation quota exceeded. Try again later.".to_string(),
        ),
        GlotError::UpstreamTimeout(_) => (
            StatusCode::GATEWAY_TIMEOUT,
            "Translation service timed out.".to_string(),
        ),
        GlotError::UpstreamUnavailable(_) => (
            StatusCode::BAD_GATEWAY,
            "Translation service is unavailable.".to_string(),
        ),
        GlotError::UpstreamResponse(_) => (
            StatusCode::BAD_GATEWAY,
            "Translation service returned an unexpected response.".to_string(),
        ),
        GlotError::IoError(_) | GlotError::SerializationError(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal error.".to_string(),
        ),
    };

    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
        warn!(target: "api", error = %err, status = %status, "Translation failed");
    }

    error_reply(status, &message)
}

fn error_reply(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorReply {
            message: message.to_string(),
        }),
    )
        .into_response()
}
