//! Static host for the Trunk output directory.
//!
//! The page itself has no backend: it needs no API and keeps no state on the
//! server. This host only serves the built files, plus `/healthz` for
//! deployments. Serving `dist/` with any other static file server works the
//! same.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::{
    path::PathBuf,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;
const PORT_BOUNDS: (u16, u16) = (1, u16::MAX);
const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    pub dist_dir: PathBuf,
    pub log_level: LogLevel,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = parse_u16_with_bounds(lookup("PORT"), DEFAULT_PORT, PORT_BOUNDS);
        let dist_dir = non_empty(lookup("DIST_DIR"))
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));
        let log_level = parse_log_level(lookup("LOG_LEVEL"), DEFAULT_LOG_LEVEL);

        Self {
            port,
            dist_dir,
            log_level,
        }
    }
}

#[derive(Clone)]
struct AppState {
    config: ServerConfig,
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    log_event(
        &config,
        LogLevel::Info,
        "server_started",
        serde_json::json!({
            "addr": listener.local_addr()?.to_string(),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );

    axum::serve(listener, router(config)).await?;
    Ok(())
}

pub fn router(config: ServerConfig) -> Router {
    let index = config.dist_dir.join("index.html");
    let static_service = ServeDir::new(&config.dist_dir).not_found_service(ServeFile::new(index));
    let state = AppState { config };

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), track_request))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "no-store")],
        Json(HealthPayload { ok: true }),
    )
}

async fn track_request(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        headers.insert(REQUEST_ID_HEADER, value);
    }
    if is_html(headers) {
        headers.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    }

    log_event(
        &state.config,
        LogLevel::Info,
        "request_completed",
        serde_json::json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": response.status().as_u16(),
            "elapsed_ms": started.elapsed().as_millis() as u64,
        }),
    );

    response
}

fn is_html(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("text/html"))
}

fn parse_u16_with_bounds(value: Option<String>, default: u16, bounds: (u16, u16)) -> u16 {
    value
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(value: Option<String>, default: LogLevel) -> LogLevel {
    match non_empty(value)
        .unwrap_or_else(|| default.as_str().to_string())
        .to_ascii_lowercase()
        .as_str()
    {
        "debug" => LogLevel::Debug,
        "info" => LogLevel::Info,
        _ => default,
    }
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, AtomicOrdering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    let value = headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string);

    value.unwrap_or_else(generate_request_id)
}

fn render_event(
    min_level: LogLevel,
    level: LogLevel,
    event: &str,
    fields: serde_json::Value,
) -> Option<serde_json::Value> {
    if level < min_level {
        return None;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert("level".to_string(), serde_json::Value::String(level.as_str().to_string()));
    payload.insert("event".to_string(), serde_json::Value::String(event.to_string()));

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    Some(serde_json::Value::Object(payload))
}

fn log_event(config: &ServerConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if let Some(line) = render_event(config.log_level, level, event, fields) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::Path;

    fn config_from(vars: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        ServerConfig::from_lookup(|name| vars.get(name).cloned())
    }

    fn temp_dist(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("portfolio-site-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).expect("create dist dir");
        std::fs::write(dir.join("index.html"), "<!doctype html><div id=\"app\"></div>")
            .expect("write index");
        std::fs::write(dir.join("styles.css"), "body { margin: 0; }").expect("write stylesheet");
        dir
    }

    async fn spawn_server(dist_dir: &Path) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind ephemeral port");
        let addr = listener.local_addr().expect("local addr");
        let config = ServerConfig {
            port: addr.port(),
            dist_dir: dist_dir.to_path_buf(),
            log_level: LogLevel::Info,
        };

        tokio::spawn(async move { axum::serve(listener, router(config)).await });
        format!("http://{addr}")
    }

    #[test]
    fn config_defaults_when_unset() {
        let config = config_from(&[]);

        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn config_reads_valid_values() {
        let config = config_from(&[
            ("PORT", " 3000 "),
            ("DIST_DIR", "public"),
            ("LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(config.port, 3000);
        assert_eq!(config.dist_dir, PathBuf::from("public"));
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn config_rejects_out_of_bounds_values() {
        let config = config_from(&[
            ("PORT", "0"),
            ("DIST_DIR", "   "),
            ("LOG_LEVEL", "verbose"),
        ]);
        assert_eq!(config, config_from(&[]));

        assert_eq!(config_from(&[("PORT", "70000")]).port, DEFAULT_PORT);
    }

    #[test]
    fn debug_events_are_filtered_at_info_level() {
        let fields = serde_json::json!({ "path": "/" });

        assert!(render_event(LogLevel::Info, LogLevel::Debug, "noise", fields.clone()).is_none());

        let line = render_event(LogLevel::Debug, LogLevel::Info, "request_completed", fields)
            .expect("info passes debug filter");
        assert_eq!(line["level"], "info");
        assert_eq!(line["event"], "request_completed");
        assert_eq!(line["path"], "/");
        assert!(line["ts"].is_u64());
    }

    #[test]
    fn request_id_reuses_incoming_header() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static(" abc-123 "));
        assert_eq!(resolve_request_id(&headers), "abc-123");

        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  "));
        let generated = resolve_request_id(&headers);
        assert!(generated.starts_with("req-"));
        assert_ne!(generated, resolve_request_id(&headers));
    }

    #[tokio::test]
    async fn health_endpoint_reports_ok_and_echoes_request_id() {
        let dist = temp_dist("health");
        let base = spawn_server(&dist).await;

        let response = reqwest::Client::new()
            .get(format!("{base}/healthz"))
            .header(REQUEST_ID_HEADER, "probe-1")
            .send()
            .await
            .expect("health request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers().get(REQUEST_ID_HEADER).and_then(|v| v.to_str().ok()),
            Some("probe-1")
        );
        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body, serde_json::json!({ "ok": true }));
    }

    #[tokio::test]
    async fn index_is_served_without_caching() {
        let dist = temp_dist("index");
        let base = spawn_server(&dist).await;

        let response = reqwest::get(format!("{base}/")).await.expect("index request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert_eq!(
            response.headers().get("cache-control").and_then(|v| v.to_str().ok()),
            Some("no-cache")
        );
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));
        let body = response.text().await.expect("index body");
        assert!(body.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn stylesheet_keeps_default_caching() {
        let dist = temp_dist("assets");
        let base = spawn_server(&dist).await;

        let response = reqwest::get(format!("{base}/styles.css")).await.expect("asset request");

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        assert!(response.headers().get("cache-control").is_none());
        assert_eq!(response.text().await.expect("asset body"), "body { margin: 0; }");
    }

    #[tokio::test]
    async fn unknown_path_falls_back_to_index_with_not_found() {
        let dist = temp_dist("fallback");
        let base = spawn_server(&dist).await;

        let response = reqwest::get(format!("{base}/no/such/page")).await.expect("fallback request");

        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
        let body = response.text().await.expect("fallback body");
        assert!(body.contains("id=\"app\""));
    }

    #[tokio::test]
    async fn only_health_is_answered_outside_static_files() {
        let dist = temp_dist("no-api");
        let base = spawn_server(&dist).await;
        let client = reqwest::Client::new();

        for path in ["/api/preview", "/api/content"] {
            let response = client.get(format!("{base}{path}")).send().await.expect("api request");
            assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND, "{path}");
        }

        let response = client
            .post(format!("{base}/healthz"))
            .send()
            .await
            .expect("post request");
        assert_eq!(response.status(), reqwest::StatusCode::METHOD_NOT_ALLOWED);
    }
}
