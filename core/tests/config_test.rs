/// Configuration loading tests
///
/// These mutate process environment variables, so every test that touches
/// them runs under `#[serial]`.
use glot_core::{AppConfig, LimitsConfig, ServerConfig, UpstreamConfig};
use serial_test::serial;

fn clear_glot_env() {
    std::env::remove_var("GLOT_HOST");
    std::env::remove_var("GLOT_PORT");
    std::env::remove_var("GLOT_API_ENDPOINT");
    std::env::remove_var("GLOT_API_KEY");
    std::env::remove_var("GLOT_TIMEOUT_MS");
    std::env::remove_var("GLOT_MAX_TEXT_CHARS");
    std::env::remove_var("GLOT_CONFIG");
}

#[test]
#[serial]
fn config_loads_from_defaults() {
    clear_glot_env();

    let server = ServerConfig::default();
    assert_eq!(server.host, "127.0.0.1");
    assert_eq!(server.port, 8080);

    let upstream = UpstreamConfig::default();
    assert_eq!(upstream.endpoint, "https://api-free.deepl.com/v2/translate");
    assert_eq!(upstream.api_key, None);
    assert_eq!(upstream.timeout_ms, 10_000);
    assert_eq!(upstream.user_agent, "glot/0.1");

    let limits = LimitsConfig::default();
    assert_eq!(limits.max_text_chars, 5_000);
}

#[test]
#[serial]
fn config_loads_from_env() {
    clear_glot_env();
    std::env::set_var("GLOT_HOST", "0.0.0.0");
    std::env::set_var("GLOT_PORT", "9100");
    std::env::set_var("GLOT_API_ENDPOINT", "http://localhost:1234/v2/translate");
    std::env::set_var("GLOT_API_KEY", "env-key");
    std::env::set_var("GLOT_TIMEOUT_MS", "2500");
    std::env::set_var("GLOT_MAX_TEXT_CHARS", "800");

    let cfg = AppConfig::default();
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.server.port, 9100);
    assert_eq!(cfg.upstream.endpoint, "http://localhost:1234/v2/translate");
    assert_eq!(cfg.upstream.api_key, Some("env-key".to_string()));
    assert_eq!(cfg.upstream.timeout_ms, 2500);
    assert_eq!(cfg.limits.max_text_chars, 800);

    clear_glot_env();
}

#[test]
#[serial]
fn config_ignores_empty_and_invalid_env_values() {
    clear_glot_env();
    std::env::set_var("GLOT_HOST", "");
    std::env::set_var("GLOT_PORT", "not-a-port");
    std::env::set_var("GLOT_API_KEY", "");
    std::env::set_var("GLOT_TIMEOUT_MS", "soon");

    let cfg = AppConfig::default();
    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.upstream.api_key, None);
    assert_eq!(cfg.upstream.timeout_ms, 10_000);

    clear_glot_env();
}

#[test]
#[serial]
fn load_without_toml_file_uses_defaults() {
    clear_glot_env();
    // Point at a path that does not exist so a stray glot.toml in the
    // working directory cannot leak into the test
    std::env::set_var("GLOT_CONFIG", "/nonexistent/glot-test.toml");

    let cfg = AppConfig::load();
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.upstream.api_key, None);

    clear_glot_env();
}

#[test]
#[serial]
fn load_overlays_toml_on_env_defaults() {
    clear_glot_env();
    std::env::set_var("GLOT_PORT", "9100");
    std::env::set_var("GLOT_API_KEY", "env-key");

    let path = std::env::temp_dir().join(format!("glot_config_test_{}.toml", std::process::id()));
    std::fs::write(
        &path,
        r#"
[server]
host = "0.0.0.0"

[upstream]
endpoint = "http://localhost:9999/v2/translate"
timeout_ms = 1500

[limits]
max_text_chars = 300
"#,
    )
    .expect("test config should be writable");
    std::env::set_var("GLOT_CONFIG", &path);

    let cfg = AppConfig::load();
    // TOML values win where present
    assert_eq!(cfg.server.host, "0.0.0.0");
    assert_eq!(cfg.upstream.endpoint, "http://localhost:9999/v2/translate");
    assert_eq!(cfg.upstream.timeout_ms, 1500);
    assert_eq!(cfg.limits.max_text_chars, 300);
    // Env-driven values survive where the TOML is silent
    assert_eq!(cfg.server.port, 9100);
    assert_eq!(cfg.upstream.api_key, Some("env-key".to_string()));

    let _ = std::fs::remove_file(&path);
    clear_glot_env();
}

#[test]
#[serial]
fn load_with_malformed_toml_falls_back_to_defaults() {
    clear_glot_env();

    let path = std::env::temp_dir().join(format!("glot_bad_config_{}.toml", std::process::id()));
    std::fs::write(&path, "this is [not valid toml").expect("test config should be writable");
    std::env::set_var("GLOT_CONFIG", &path);

    let cfg = AppConfig::load();
    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.server.port, 8080);

    let _ = std::fs::remove_file(&path);
    clear_glot_env();
}
