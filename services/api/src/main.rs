use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{info, warn};

use waitlist_proxy_api::{app, config::Config, logging, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv().ok();

    let config = Config::from_env()?;
    logging::init(config.is_production());

    for name in config.proxy.missing_settings() {
        warn!("{} is not set; matching submissions will fail", name);
    }

    let state = AppState::new(&config)?;
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
