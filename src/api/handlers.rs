use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::{news::fetch_news, sentiment::analyze_sentiment, AppState};

use super::error::{ApiError, TEXT_REQUIRED};
use super::models::{ErrorResponse, HealthResponse, SentimentRequest, SentimentResponse};

pub async fn analyze(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SentimentResponse>, ApiError> {
    let payload = parse_sentiment_request(&headers, &body)?;

    let text = match payload.text {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ApiError::Validation(TEXT_REQUIRED.to_string())),
    };

    let sentiment_score = analyze_sentiment(&text, &state.config, state.fetcher.as_ref())
        .await
        .map_err(ApiError::Sentiment)?;

    Ok(Json(SentimentResponse { sentiment_score }))
}

// A non-JSON or empty body carries no text at all.
fn parse_sentiment_request(headers: &HeaderMap, body: &[u8]) -> Result<SentimentRequest, ApiError> {
    if !is_json_content_type(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(SentimentRequest { text: None });
    }

    Json::<SentimentRequest>::from_bytes(body)
        .map(|Json(payload)| payload)
        .map_err(|rejection| ApiError::Validation(rejection.body_text()))
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()) else {
        return false;
    };
    let mime = value.split(';').next().unwrap_or_default().trim();
    mime.eq_ignore_ascii_case("application/json")
        || mime
            .strip_prefix("application/")
            .is_some_and(|subtype| subtype.to_ascii_lowercase().ends_with("+json"))
}

pub async fn news(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let topic = topic_param(&params);
    let body = fetch_news(topic.as_deref(), &state.config, state.fetcher.as_ref())
        .await
        .map_err(ApiError::News)?;

    Ok(([(CONTENT_TYPE, "application/json")], body).into_response())
}

// Repeated `topic` values are joined with commas.
fn topic_param(params: &[(String, String)]) -> Option<String> {
    let values: Vec<&str> = params
        .iter()
        .filter(|(key, _)| key == "topic")
        .map(|(_, value)| value.as_str())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(","))
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".to_string(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn json_headers(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn topic_param_joins_repeated_values() {
        assert_eq!(topic_param(&pairs(&[("topic", "ai")])).as_deref(), Some("ai"));
        assert_eq!(
            topic_param(&pairs(&[("topic", "a"), ("page", "2"), ("topic", "b")])).as_deref(),
            Some("a,b")
        );
        assert_eq!(topic_param(&pairs(&[("page", "2")])), None);
    }

    #[test]
    fn recognizes_json_content_types() {
        assert!(is_json_content_type(&json_headers("application/json")));
        assert!(is_json_content_type(&json_headers("application/json; charset=utf-8")));
        assert!(is_json_content_type(&json_headers("application/merge-patch+json")));
        assert!(!is_json_content_type(&json_headers("text/plain")));
        assert!(!is_json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn empty_or_untyped_body_has_no_text() {
        let untyped = parse_sentiment_request(&HeaderMap::new(), br#"{"text":"hi"}"#).unwrap();
        assert_eq!(untyped.text, None);

        let empty = parse_sentiment_request(&json_headers("application/json"), b"  \n").unwrap();
        assert_eq!(empty.text, None);
    }

    #[test]
    fn malformed_json_keeps_parser_message() {
        let err = parse_sentiment_request(&json_headers("application/json"), b"{not json")
            .unwrap_err();
        let ApiError::Validation(message) = err else {
            panic!("expected a validation error");
        };
        assert_ne!(message, TEXT_REQUIRED);
    }
}
