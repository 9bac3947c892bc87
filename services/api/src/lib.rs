pub mod config;
pub mod errors;
pub mod logging;
pub mod proxy;
pub mod routes;

#[cfg(feature = "lambda")]
pub mod lambda;

use axum::{routing::get, Json, Router};
use notion_client::{NotionClient, RecordStore};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::Config;
use crate::proxy::SubmissionProxy;

pub const SERVICE_NAME: &str = "waitlist-proxy-api";

#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<SubmissionProxy>,
}

impl AppState {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = NotionClient::new(&config.notion_api_url)
            .map_err(|e| anyhow::anyhow!("Failed to create Notion client: {}", e))?;

        Ok(Self::with_store(config.proxy.clone(), Arc::new(client)))
    }

    pub fn with_store(proxy_config: config::ProxyConfig, store: Arc<dyn RecordStore>) -> Self {
        Self {
            proxy: Arc::new(SubmissionProxy::new(proxy_config, store)),
        }
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}

/// Build the HTTP application: health check plus the submission proxy under `/api`.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", routes::router())
        .layer(
            ServiceBuilder::new().layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            ),
        )
        .with_state(state)
}
