#![allow(dead_code)]

use axum::{body::Body, Router};
use http::{Method, Request};
use http_body_util::BodyExt;
use news_sentiment_proxy::{build_app, config::AppConfig, upstream::HttpFetcher, AppState};

pub const NEWS_KEY: &str = "news-test-key";
pub const SENTIMENT_KEY: &str = "hf-test-key";

/// Binds `app` on an ephemeral port and returns its base URL.
pub async fn spawn_upstream(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

pub fn build_test_app(news_api_url: &str, sentiment_api_url: &str) -> Router {
    build_test_app_with_timeout(news_api_url, sentiment_api_url, 5_000)
}

pub fn build_test_app_with_timeout(
    news_api_url: &str,
    sentiment_api_url: &str,
    timeout_ms: u64,
) -> Router {
    let config = AppConfig {
        port: 0,
        news_api_key: NEWS_KEY.to_string(),
        news_api_url: news_api_url.to_string(),
        sentiment_api_key: SENTIMENT_KEY.to_string(),
        sentiment_api_url: sentiment_api_url.to_string(),
        timeout_ms,
    };
    build_app(AppState::new(config, HttpFetcher::new(timeout_ms).unwrap()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_raw(uri: &str, content_type: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
