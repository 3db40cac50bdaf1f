use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::domain::{errors::AppError, geo};

use super::app_state::AppState;

/// Liveness marker, kept payload-free on purpose.
pub async fn root_handler() -> impl IntoResponse {
    Json(json!({ "Hello": "World" }))
}

/// Relays one lookup: forward the IP to the upstream provider as-is,
/// normalize whatever comes back, echo the caller's IP in the result.
pub async fn geolookup_handler(
    State(state): State<AppState>,
    Path(ip): Path<String>,
) -> Result<Json<geo::GeoResult>, AppError> {
    tracing::debug!(%ip, "relaying geolookup");
    let raw = state.circl.geolookup(&ip).await?;
    let result = geo::normalize(&ip, &raw)?;
    Ok(Json(result))
}
