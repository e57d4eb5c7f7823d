use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::upstream::{Fetcher, UpstreamError, UpstreamRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Unknown(String),
}

impl SentimentLabel {
    // Case-sensitive.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "POSITIVE" => Self::Positive,
            "NEGATIVE" => Self::Negative,
            "NEUTRAL" => Self::Neutral,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Positive => "POSITIVE",
            Self::Negative => "NEGATIVE",
            Self::Neutral => "NEUTRAL",
            Self::Unknown(raw) => raw,
        }
    }

    pub fn score(&self) -> Option<u8> {
        match self {
            Self::Positive => Some(10),
            Self::Negative => Some(1),
            Self::Neutral => Some(5),
            Self::Unknown(_) => None,
        }
    }
}

/// Sends `text` as a single-element batch and maps the first label to 1, 5 or 10.
pub async fn analyze_sentiment(
    text: &str,
    config: &AppConfig,
    fetcher: &dyn Fetcher,
) -> Result<u8, UpstreamError> {
    let request = UpstreamRequest::PostJson {
        url: config.sentiment_api_url.clone(),
        bearer: config.sentiment_api_key.clone(),
        body: json!({ "inputs": [text] }),
    };

    let response = fetcher.fetch(request).await?;
    info!(status = %response.status, "sentiment upstream responded");

    if !response.status.is_success() {
        return Err(UpstreamError::Status {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).trim().to_string(),
        });
    }

    let data: Value = serde_json::from_slice(&response.body)?;
    debug!(payload = %data, "sentiment upstream payload");

    let label = extract_label(&data)?;
    label
        .score()
        .ok_or_else(|| UpstreamError::UnrecognizedLabel(label.as_str().to_string()))
}

fn extract_label(data: &Value) -> Result<SentimentLabel, UpstreamError> {
    match data.get(0).and_then(|first| first.get("label")) {
        None | Some(Value::Null) => Err(UpstreamError::MissingLabel),
        Some(Value::String(raw)) if raw.is_empty() => Err(UpstreamError::MissingLabel),
        Some(Value::String(raw)) => Ok(SentimentLabel::parse(raw)),
        Some(other) => Ok(SentimentLabel::Unknown(other.to_string())),
    }
}
