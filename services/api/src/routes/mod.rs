use axum::{routing::any, Router};

mod notion_proxy;

pub fn router() -> Router<crate::AppState> {
    Router::new()
        .route("/notion-proxy", any(notion_proxy::handler))
}
