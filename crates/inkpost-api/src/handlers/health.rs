//! Health check handler.

use axum::Json;
use axum::extract::State;
use chrono::Utc;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = state.stores.health_check().await;

    Json(HealthResponse {
        status: "OK".to_string(),
        database: database.as_str().to_string(),
        timestamp: Utc::now(),
    })
}
