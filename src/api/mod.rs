mod error;
mod handlers;
mod models;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub use error::ApiError;
pub use handlers::{analyze, health, news, not_found};
pub use models::{ErrorResponse, SentimentRequest, SentimentResponse};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/news", get(news))
        .route("/analyze-sentiment", post(analyze))
        .route("/health", get(health))
        .fallback(not_found)
        .with_state(state)
}
