use std::env;

pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_SENTIMENT_API_URL: &str =
    "https://api-inference.huggingface.co/models/cardiffnlp/twitter-roberta-base-sentiment";

#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub news_api_key: String,
    pub news_api_url: String,
    pub sentiment_api_key: String,
    pub sentiment_api_url: String,
    pub timeout_ms: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(3000);

        let news_api_key = env::var("NEWS_API_KEY").unwrap_or_default();
        let news_api_url =
            env::var("NEWS_API_URL").unwrap_or_else(|_| DEFAULT_NEWS_API_URL.to_string());

        let sentiment_api_key = env::var("HUGGING_FACE_API_KEY").unwrap_or_default();
        let sentiment_api_url = env::var("SENTIMENT_API_URL")
            .unwrap_or_else(|_| DEFAULT_SENTIMENT_API_URL.to_string());

        let timeout_ms = env::var("UPSTREAM_TIMEOUT_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(20_000);

        Self {
            port,
            news_api_key,
            news_api_url,
            sentiment_api_key,
            sentiment_api_url,
            timeout_ms,
        }
    }

    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.news_api_key.is_empty() {
            missing.push("NEWS_API_KEY");
        }
        if self.sentiment_api_key.is_empty() {
            missing.push("HUGGING_FACE_API_KEY");
        }
        missing
    }
}

// Keys stay out of logs.
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("port", &self.port)
            .field("news_api_url", &self.news_api_url)
            .field("sentiment_api_url", &self.sentiment_api_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish_non_exhaustive()
    }
}
