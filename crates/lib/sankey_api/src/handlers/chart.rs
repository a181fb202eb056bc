// @awa-component: CHART-Handlers
//
//! Chart data handlers.
//!
//! Each handler snapshots what it needs from the provider, releases the lock,
//! then streams the rows through [`JsonArrayChunks`].

use axum::Json;
use axum::extract::{Path, State};
use axum::response::Response;
use sankey_core::model::{Entity, SankeyFlow, distinct_nodes};
use sankey_core::services::ServiceData;
use tracing::info;

use crate::AppState;
use crate::chunks::{JsonArrayChunks, streaming_json};
use crate::error::{AppError, AppResult};

fn stream_flows(endpoint: &'static str, flows: Vec<SankeyFlow>) -> Response {
    let rows = flows.into_iter().map(|flow| flow.flow_json());
    streaming_json(endpoint, JsonArrayChunks::new(rows))
}

/// `GET /chart/serviceflow` — every known flow as
/// `[fromLabel, toLabel, weight, "color: #rrggbb"]`.
pub async fn service_flow(State(state): State<AppState>) -> Response {
    let flows = state.services.read().await.flows().to_vec();
    info!(flows = flows.len(), "==== Service Flow ====");
    stream_flows("serviceflow", flows)
}

/// `GET /chart/servicestatus` — distinct flow endpoints as
/// `[label, nodeType, live]`, after the configured delay.
pub async fn service_status(State(state): State<AppState>) -> Response {
    tokio::time::sleep(state.config.status_delay).await;

    let nodes = {
        let services = state.services.read().await;
        distinct_nodes(services.flows())
    };
    info!(nodes = nodes.len(), "==== Service Status ====");

    let rows = nodes.into_iter().map(|node| node.status_json());
    streaming_json("servicestatus", JsonArrayChunks::new(rows))
}

/// `GET /chart/entities` — entity names in provider order.
pub async fn entities(State(state): State<AppState>) -> Json<Vec<String>> {
    let services = state.services.read().await;
    Json(services.entities().iter().map(|e| e.name.clone()).collect())
}

/// `GET /chart/serviceflow/{entity}` — one entity's service group, framed
/// like `/chart/serviceflow`.
pub async fn service_group_flow(
    State(state): State<AppState>,
    Path(entity): Path<String>,
) -> AppResult<Response> {
    let flows = {
        let services = state.services.read().await;
        if !services.has_entity(&entity) {
            return Err(AppError::NotFound(format!("entity '{entity}'")));
        }
        services.service_group(&Entity::new(entity.as_str()))
    };
    info!(%entity, flows = flows.len(), "==== Service Group ====");
    Ok(stream_flows("servicegroup", flows))
}
