use axum::{
    http::Method,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::chat;
use crate::config::Config;
use crate::monitor::MonitorClient;

const CORS_ALLOW_ORIGIN: &str = "*";
const CORS_ALLOW_METHODS: &str = "GET, POST, OPTIONS";
const CORS_ALLOW_HEADERS: &str = "*";

/// Shared per-request state; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub monitor: MonitorClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            monitor: MonitorClient::new(config.api_key.clone()),
        }
    }
}

/// Build the application router: status page, liveness probe, the two chat
/// routes, and the CORS diagnostic, all behind a permissive CORS policy and
/// request tracing.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/healthz", get(healthz))
        .route("/v1/chat/completions", post(chat::chat_completions))
        .route("/chat", post(chat::simple_chat))
        .route("/cors-test", get(cors_test))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> &'static str {
    "UptimeRobot chat adapter is running"
}

async fn healthz() -> &'static str {
    "OK"
}

/// Reports the CORS policy the router was built with, for debugging
/// browser-side integration.
async fn cors_test() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "cors": {
            "access-control-allow-origin": CORS_ALLOW_ORIGIN,
            "access-control-allow-methods": CORS_ALLOW_METHODS,
            "access-control-allow-headers": CORS_ALLOW_HEADERS,
        },
    }))
}
