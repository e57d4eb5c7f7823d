use axum::body::Bytes;
use serde::de::IgnoredAny;
use tracing::info;

use crate::config::AppConfig;
use crate::upstream::{Fetcher, UpstreamError, UpstreamRequest};

pub async fn fetch_news(
    topic: Option<&str>,
    config: &AppConfig,
    fetcher: &dyn Fetcher,
) -> Result<Bytes, UpstreamError> {
    let request = UpstreamRequest::Get {
        url: config.news_api_url.clone(),
        query: vec![
            ("q", topic.unwrap_or_default().to_string()),
            ("apiKey", config.news_api_key.clone()),
        ],
    };

    // Status is not checked; API-level error objects are relayed as-is.
    let response = fetcher.fetch(request).await?;
    info!(status = %response.status, bytes = response.body.len(), "news upstream responded");

    serde_json::from_slice::<IgnoredAny>(&response.body)?;
    Ok(response.body)
}
