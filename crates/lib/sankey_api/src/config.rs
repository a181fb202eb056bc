//! API server configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default artificial latency before the status endpoint answers.
pub const DEFAULT_STATUS_DELAY: Duration = Duration::from_millis(50);

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:8080").
    pub bind_addr: String,
    /// Delay applied before `/chart/servicestatus` produces output.
    pub status_delay: Duration,
    /// YAML catalog backing the static provider. `None` serves redacted data.
    pub catalog_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".into(),
            status_delay: DEFAULT_STATUS_DELAY,
            catalog_path: None,
        }
    }
}
