use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use news_sentiment_proxy::{
    build_app, config::AppConfig, run_server, upstream::HttpFetcher, AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    for name in config.missing_credentials() {
        warn!(variable = name, "credential not set; upstream calls will be rejected");
    }
    info!(?config, "loaded configuration");

    let fetcher = HttpFetcher::new(config.timeout_ms).context("building HTTP client")?;
    let port = config.port;
    let app = build_app(AppState::new(config, fetcher));

    run_server(app, port).await.context("server failed")
}
