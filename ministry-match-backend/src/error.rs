use axum::response::{IntoResponse, Response};
use axum::Json;
use http::StatusCode;
use ministry_match_config::ConfigError;
use ministry_match_matcher::AssessmentError;
use ministry_match_store::StoreError;
use serde_json::json;
use tracing::error;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("invalid assessment: {0}")]
    Assessment(#[from] AssessmentError),
    #[error("unknown attribute key: {0}")]
    UnknownAttributeKey(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Store(_) => StatusCode::NOT_FOUND,
            Self::Assessment(_) | Self::UnknownAttributeKey(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Config(_) | Self::Io(_) | Self::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("internal error: {self}");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
