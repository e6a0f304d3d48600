use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::Json;
use std::sync::Arc;
use tracing::info;

use crate::errors::AppError;
use crate::models::WeatherBatchResult;
use crate::service::WeatherService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<dyn WeatherService>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check")
    )
)]
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "service": "weather-server" }))
}

#[utoipa::path(
    post,
    path = "/weather",
    request_body = Vec<String>,
    responses(
        (status = 200, description = "One weather report per requested city", body = WeatherBatchResult),
        (status = 400, description = "Request body is not a JSON array of strings"),
        (status = 502, description = "Weather provider failure, no partial results")
    )
)]
pub async fn weather(
    State(state): State<AppState>,
    body: Result<Json<Vec<String>>, JsonRejection>,
) -> Result<Json<WeatherBatchResult>, AppError> {
    // Reject a malformed body before any provider call is made.
    let Json(cities) = body.map_err(|rejection| AppError::RequestDecode(rejection.body_text()))?;

    info!(count = cities.len(), "weather batch request received");

    let reports = state.service.get_city_weather(cities).await?;

    Ok(Json(reports))
}
