use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SentimentRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SentimentResponse {
    #[serde(rename = "sentimentScore")]
    pub sentiment_score: u8,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
