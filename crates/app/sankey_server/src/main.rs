//! Sankey chart data server binary.
//!
//! Serves `/chart/serviceflow` and `/chart/servicestatus` from either the
//! redacted provider (default) or a YAML catalog given with `--catalog`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::Parser;
use sankey_api::config::ApiConfig;
use sankey_core::catalog::{self, CatalogError};
use sankey_core::liveness::{FixedLiveness, LivenessProbe, RandomLiveness};
use sankey_core::palette::ColorRotation;
use sankey_core::services::{ServiceCatalog, ServiceData};
use tracing::info;

/// CLI arguments for the chart server.
#[derive(Parser, Debug)]
#[command(name = "sankey_server", about = "Sankey chart data server")]
struct Args {
    /// Interface to bind.
    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on (0 = ephemeral).
    #[arg(long, env = "PORT", default_value_t = 8080)]
    port: u16,

    /// YAML catalog of entities and flows. Without it all data is redacted.
    #[arg(long, env = "CATALOG_PATH")]
    catalog: Option<PathBuf>,

    /// Delay before `/chart/servicestatus` answers, in milliseconds.
    #[arg(long, env = "STATUS_DELAY_MS", default_value_t = 50)]
    status_delay_ms: u64,

    /// Give catalog nodes without an explicit `live` this value instead of a
    /// random draw.
    #[arg(long, env = "FIXED_LIVENESS")]
    fixed_liveness: Option<bool>,
}

fn load_services(
    catalog_path: Option<&Path>,
    rotation: &ColorRotation,
    probe: &dyn LivenessProbe,
) -> Result<ServiceCatalog, CatalogError> {
    match catalog_path {
        Some(path) => Ok(catalog::load(path, rotation, probe)?.into()),
        None => Ok(ServiceCatalog::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
                tracing_subscriber::EnvFilter::try_new("info,sankey_api=debug,sankey_core=debug")
            })?,
        )
        .init();

    let args = Args::parse();

    info!(host = %args.host, port = args.port, "starting sankey_server");

    let config = ApiConfig {
        bind_addr: format!("{}:{}", args.host, args.port),
        status_delay: Duration::from_millis(args.status_delay_ms),
        catalog_path: args.catalog,
    };

    let rotation = ColorRotation::new();
    let probe: Box<dyn LivenessProbe> = match args.fixed_liveness {
        Some(live) => Box::new(FixedLiveness(live)),
        None => Box::new(RandomLiveness),
    };
    let services = load_services(config.catalog_path.as_deref(), &rotation, probe.as_ref())?;

    info!(
        provider = services.kind(),
        entities = services.entities().len(),
        flows = services.flows().len(),
        "data provider ready"
    );

    let state = sankey_api::AppState::new(services, config.clone());
    let app = sankey_api::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    let local_addr = listener.local_addr()?;

    info!(addr = %local_addr, "chart API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
