use lambda_http::{run, service_fn, Error, Request};
use std::sync::Arc;
use tracing::warn;

use waitlist_proxy_api::{config::Config, lambda::handle_event, logging, AppState};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dotenvy::dotenv().ok();
    logging::init_lambda();

    let config = Config::from_env()?;
    for name in config.proxy.missing_settings() {
        warn!("{} is not set; matching submissions will fail", name);
    }

    let proxy = AppState::new(&config)?.proxy;

    run(service_fn(move |request: Request| {
        let proxy = Arc::clone(&proxy);
        async move { handle_event(&proxy, request).await }
    }))
    .await
}
