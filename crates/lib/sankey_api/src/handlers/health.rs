//! Health endpoint.

use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::models::HealthResponse;

/// `GET /health` — reports the core version and active provider.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let provider = state.services.read().await.kind();
    Json(HealthResponse {
        status: "ok".into(),
        greeting: sankey_core::hello::hello_world(),
        version: sankey_core::version().into(),
        provider: provider.into(),
    })
}
