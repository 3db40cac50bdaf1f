use axum::{http::StatusCode, response::IntoResponse, Json};
use circl_rs::errors::CirclError;
use serde_json::json;
use thiserror::Error;

use crate::domain::geo::NormalizeError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CIRCL error or parsing failed: {0}")]
    Upstream(#[from] CirclError),
    #[error("CIRCL error or parsing failed: {0}")]
    Normalize(#[from] NormalizeError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // Both failure kinds carry bad-gateway semantics: either the
        // upstream could not be reached or its body did not parse.
        (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
