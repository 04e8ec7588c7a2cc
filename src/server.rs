use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{Instant, SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};

use crate::{
    config::ServerConfig,
    logging::{LogLevel, Logger},
};

const REQUEST_ID_HEADER: &str = "x-request-id";

static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

#[derive(Clone)]
struct AppState {
    logger: Logger,
}

#[derive(Serialize)]
struct HealthPayload {
    ok: bool,
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let logger = Logger::new(config.log_level);
    let bind_address = format!("0.0.0.0:{}", config.port);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    logger.event(
        LogLevel::Info,
        "server_listening",
        json!({
            "url": format!("http://127.0.0.1:{}", config.port),
            "dist_dir": config.dist_dir.display().to_string(),
        }),
    );
    axum::serve(listener, router(&config)).await?;
    Ok(())
}

/// Serves the dist directory, falling back to `index.html` for unknown paths.
pub fn router(config: &ServerConfig) -> Router {
    let state = AppState {
        logger: Logger::new(config.log_level),
    };
    let static_service =
        ServeDir::new(&config.dist_dir).fallback(ServeFile::new(config.index_file()));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_service)
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

async fn healthz() -> Json<HealthPayload> {
    Json(HealthPayload { ok: true })
}

async fn log_requests(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let started = Instant::now();
    let request_id = resolve_request_id(request.headers());
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, header_value);
    }

    let status = response.status();
    let level = if status.is_success() || status.is_redirection() {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    state.logger.event(
        level,
        "request_completed",
        json!({
            "request_id": request_id,
            "method": method,
            "path": path,
            "status": status.as_u16(),
            "elapsed_ms": u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
        }),
    );

    response
}

fn now_unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_millis())
        .unwrap_or(0)
}

fn generate_request_id() -> String {
    let counter = REQUEST_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("req-{}-{counter}", now_unix_millis())
}

fn resolve_request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|raw| raw.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ToString::to_string)
        .unwrap_or_else(generate_request_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, net::SocketAddr, path::PathBuf};

    fn test_dist_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "portfolio-site-{name}-{}",
            std::process::id()
        ));
        fs::create_dir_all(&dir).expect("create dist dir");
        fs::write(dir.join("index.html"), "<div id=\"app\"></div>").expect("write index");
        fs::write(dir.join("main.css"), "body { margin: 0; }").expect("write stylesheet");
        dir
    }

    async fn spawn_server(dist_dir: PathBuf) -> SocketAddr {
        let config = ServerConfig {
            port: 0,
            dist_dir,
            log_level: LogLevel::Warn,
        };
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test listener");
        let address = listener.local_addr().expect("listener address");

        tokio::spawn(async move {
            let _ = axum::serve(listener, router(&config)).await;
        });

        address
    }

    #[test]
    fn request_id_is_echoed_when_present() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("  abc-123 "));

        assert_eq!(resolve_request_id(&headers), "abc-123");
    }

    #[test]
    fn blank_request_id_is_replaced() {
        let mut headers = HeaderMap::new();
        headers.insert(REQUEST_ID_HEADER, HeaderValue::from_static("   "));

        let first = resolve_request_id(&headers);
        let second = resolve_request_id(&HeaderMap::new());

        assert!(first.starts_with("req-"));
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let address = spawn_server(test_dist_dir("healthz")).await;

        let response = reqwest::get(format!("http://{address}/healthz"))
            .await
            .expect("healthz request");
        assert!(response.headers().contains_key(REQUEST_ID_HEADER));

        let body: serde_json::Value = response.json().await.expect("json body");
        assert_eq!(body, json!({ "ok": true }));
    }

    #[tokio::test]
    async fn static_files_are_served_from_dist() {
        let address = spawn_server(test_dist_dir("static")).await;

        let response = reqwest::get(format!("http://{address}/main.css"))
            .await
            .expect("stylesheet request");
        assert!(response.status().is_success());
        assert_eq!(response.text().await.expect("body"), "body { margin: 0; }");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let address = spawn_server(test_dist_dir("fallback")).await;

        let client = reqwest::Client::new();
        let response = client
            .get(format!("http://{address}/projects"))
            .header(REQUEST_ID_HEADER, "trace-7")
            .send()
            .await
            .expect("fallback request");

        assert!(response.status().is_success());
        assert_eq!(
            response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("trace-7")
        );
        assert!(response.text().await.expect("body").contains("id=\"app\""));
    }
}
