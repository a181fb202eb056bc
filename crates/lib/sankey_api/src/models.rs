//! JSON response bodies.

use serde::{Deserialize, Serialize};

/// Error body returned by every failing handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `GET /health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub greeting: String,
    pub version: String,
    /// Active data provider (`redacted` or `static`).
    pub provider: String,
}
