use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::upstream::UpstreamError;

use super::models::ErrorResponse;

pub const TEXT_REQUIRED: &str = "Text is required for sentiment analysis.";
pub const ANALYSIS_FAILED: &str = "Could not analyze sentiment.";
pub const INTERNAL_ERROR: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("sentiment analysis failed")]
    Sentiment(#[source] UpstreamError),
    #[error("news lookup failed")]
    News(#[source] UpstreamError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse { error: message }),
            )
                .into_response(),
            Self::Sentiment(err) => {
                error!(error = %err, "error analyzing sentiment");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorResponse {
                        error: ANALYSIS_FAILED.to_string(),
                    }),
                )
                    .into_response()
            }
            Self::News(err) => {
                error!(error = %err, "error fetching news");
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR).into_response()
            }
        }
    }
}
