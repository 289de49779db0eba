//! Upstream translation client
//!
//! The outbound half of the proxy route: one POST to a DeepL-compatible
//! endpoint, the response status mapped onto [`GlotError`], and the first
//! translation returned. No retries and no caching; callers see the outcome
//! of exactly one attempt.

use crate::config::UpstreamConfig;
use crate::languages::Language;
use crate::{GlotError, Result};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Longest upstream body fragment kept in error details
const ERROR_BODY_LIMIT: usize = 256;

/// DeepL signals an exhausted character quota with this non-standard status
const STATUS_QUOTA_EXCEEDED: u16 = 456;

/// A completed translation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub text: String,
    pub detected_source_lang: Option<String>,
}

#[derive(Debug, Serialize)]
struct WireRequest<'a> {
    text: [&'a str; 1],
    target_lang: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_lang: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    translations: Vec<WireTranslation>,
}

#[derive(Debug, Deserialize)]
struct WireTranslation {
    text: String,
    detected_source_language: Option<String>,
}

/// Reject text the proxy should not forward
///
/// Errors with `InvalidRequest` when the trimmed text is empty or the char
/// count exceeds `max_chars`. The messages are safe to surface to clients.
pub fn validate_text(text: &str, max_chars: usize) -> Result<()> {
    if text.trim().is_empty() {
        return Err(GlotError::InvalidRequest(
            "Text must not be empty.".to_string(),
        ));
    }
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(GlotError::InvalidRequest(format!(
            "Text is too long: {} characters (limit {}).",
            chars, max_chars
        )));
    }
    Ok(())
}

/// HTTP client for the configured translation API
pub struct Translator {
    cfg: UpstreamConfig,
    http: Client,
}

impl Translator {
    /// Build a client with the configured timeout and user agent
    pub fn new(cfg: UpstreamConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .user_agent(&cfg.user_agent)
            .build()
            .map_err(|e| GlotError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { cfg, http })
    }

    /// Forward one translation request upstream
    ///
    /// Contract:
    /// - Input: validated text plus a catalog target (and optional source hint)
    /// - Output: the first upstream translation, with the detected source
    ///   language when the upstream reports one
    /// - Error: one `GlotError` variant per failure class; no retries
    pub async fn translate(
        &self,
        text: &str,
        target: &Language,
        source: Option<&Language>,
    ) -> Result<Translation> {
        let api_key = self
            .cfg
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                GlotError::Config("Translation API key is not configured (GLOT_API_KEY)".to_string())
            })?;

        debug!(
            target: "translator",
            endpoint = %self.cfg.endpoint,
            lang = %target.code,
            chars = text.chars().count(),
            "Forwarding translation request"
        );

        let body = WireRequest {
            text: [text],
            target_lang: target.code,
            source_lang: source.map(|l| l.code),
        };

        let response = self
            .http
            .post(&self.cfg.endpoint)
            .header("Authorization", format!("DeepL-Auth-Key {api_key}"))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    warn!(target: "translator", error = %e, "Upstream request timed out");
                    GlotError::UpstreamTimeout(format!(
                        "No response within {} ms",
                        self.cfg.timeout_ms
                    ))
                } else {
                    warn!(target: "translator", error = %e, "Upstream request failed");
                    GlotError::UpstreamUnavailable(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = read_error_body(response).await;
            warn!(target: "translator", %status, detail = %detail, "Upstream returned error status");
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    GlotError::UpstreamAuth(format!("status {status}: {detail}"))
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    GlotError::UpstreamQuota(format!("too many requests: {detail}"))
                }
                s if s.as_u16() == STATUS_QUOTA_EXCEEDED => {
                    GlotError::UpstreamQuota(format!("character quota exceeded: {detail}"))
                }
                s if s.is_server_error() => {
                    GlotError::UpstreamUnavailable(format!("status {status}: {detail}"))
                }
                _ => GlotError::UpstreamResponse(format!("status {status}: {detail}")),
            });
        }

        let parsed: WireResponse = response.json().await.map_err(|e| {
            warn!(target: "translator", error = %e, "Failed to parse upstream response");
            GlotError::UpstreamResponse(format!("Failed to parse response: {e}"))
        })?;

        let first = parsed.translations.into_iter().next().ok_or_else(|| {
            GlotError::UpstreamResponse("Response contained no translations".to_string())
        })?;

        debug!(
            target: "translator",
            lang = %target.code,
            detected = ?first.detected_source_language,
            "Translation received"
        );

        Ok(Translation {
            text: first.text,
            detected_source_lang: first.detected_source_language,
        })
    }
}

/// Best-effort capture of an upstream error body for logs
async fn read_error_body(response: reqwest::Response) -> String {
    match response.text().await {
        Ok(body) => {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                return "<empty body>".to_string();
            }
            let mut detail: String = trimmed.chars().take(ERROR_BODY_LIMIT).collect();
            if trimmed.chars().count() > ERROR_BODY_LIMIT {
                detail.push_str("...");
            }
            detail
        }
        Err(_) => "<unreadable body>".to_string(),
    }
}
