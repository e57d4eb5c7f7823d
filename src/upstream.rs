use async_trait::async_trait;
use axum::body::Bytes;
use http::StatusCode;
use thiserror::Error;
use tokio::time::{timeout, Duration};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone, PartialEq)]
pub enum UpstreamRequest {
    Get {
        url: String,
        query: Vec<(&'static str, String)>,
    },
    PostJson {
        url: String,
        bearer: String,
        body: serde_json::Value,
    },
}

#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream request timed out after {0}ms")]
    Timeout(u64),
    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("upstream body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("upstream response has no label")]
    MissingLabel,
    #[error("unrecognized sentiment label {0:?}")]
    UnrecognizedLabel(String),
}

#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError>;
}

pub struct HttpFetcher {
    client: reqwest::Client,
    timeout_ms: u64,
}

impl HttpFetcher {
    pub fn new(timeout_ms: u64) -> Result<Self, UpstreamError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, timeout_ms })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: UpstreamRequest) -> Result<UpstreamResponse, UpstreamError> {
        let builder = match request {
            UpstreamRequest::Get { url, query } => self.client.get(url).query(&query),
            UpstreamRequest::PostJson { url, bearer, body } => {
                self.client.post(url).bearer_auth(bearer).json(&body)
            }
        };

        let fut = async {
            let response = builder.send().await?;
            let status = response.status();
            let body = response.bytes().await?;
            Ok::<_, UpstreamError>(UpstreamResponse { status, body })
        };

        timeout(Duration::from_millis(self.timeout_ms), fut)
            .await
            .map_err(|_| UpstreamError::Timeout(self.timeout_ms))?
    }
}
