//! # sankey_api
//!
//! HTTP API for the Sankey chart service.

pub mod chunks;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use sankey_core::services::ServiceCatalog;
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{chart, health};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Provider the chart endpoints read from.
    pub services: Arc<RwLock<ServiceCatalog>>,
    /// API configuration.
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(services: ServiceCatalog, config: ApiConfig) -> Self {
        Self {
            services: Arc::new(RwLock::new(services)),
            config,
        }
    }
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    // The chart front end is served from a different origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(routes::GET_HEALTH, get(health::health))
        .route(routes::GET_CHART_SERVICEFLOW, get(chart::service_flow))
        .route(
            routes::GET_CHART_SERVICEFLOW_ENTITY,
            get(chart::service_group_flow),
        )
        .route(routes::GET_CHART_SERVICESTATUS, get(chart::service_status))
        .route(routes::GET_CHART_ENTITIES, get(chart::entities))
        .layer(cors)
        .with_state(state)
}
