// @awa-component: CHART-Catalog
//
//! YAML catalog of entities and their service-group flows.
//!
//! ```yaml
//! entities:
//!   - name: billing
//!     flows:
//!       - from: { type: DAEMON, name: ingest }
//!         to: { type: DATASET, name: invoices, live: false }
//!         weight: 5
//! ```
//!
//! Nodes without `live` draw their liveness from the probe. Flows are built
//! in file order, so palette colors follow file order too.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::liveness::LivenessProbe;
use crate::model::{Entity, Node, NodeType, SankeyFlow};
use crate::palette::ColorRotation;
use crate::services::StaticServices;

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

/// Parsed catalog document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub entities: Vec<EntitySpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntitySpec {
    pub name: String,
    #[serde(default)]
    pub flows: Vec<FlowSpec>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlowSpec {
    pub from: NodeSpec,
    pub to: NodeSpec,
    pub weight: i32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeSpec {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub name: String,
    pub live: Option<bool>,
}

impl NodeSpec {
    fn build(&self, probe: &dyn LivenessProbe) -> Node {
        match self.live {
            Some(live) => Node::with_liveness(self.node_type, &self.name, live),
            None => Node::new(self.node_type, &self.name, probe),
        }
    }
}

impl Catalog {
    /// Parse and validate a YAML catalog.
    pub fn parse(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_yaml::from_str(yaml)?;
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut names = HashSet::new();
        for entity in &self.entities {
            if entity.name.trim().is_empty() {
                return Err(CatalogError::Invalid("entity name must not be empty".into()));
            }
            if !names.insert(entity.name.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate entity '{}'",
                    entity.name
                )));
            }
            for (idx, flow) in entity.flows.iter().enumerate() {
                if flow.from.name.trim().is_empty() || flow.to.name.trim().is_empty() {
                    return Err(CatalogError::Invalid(format!(
                        "entity '{}' flow {idx}: node name must not be empty",
                        entity.name
                    )));
                }
                if flow.weight < 0 {
                    return Err(CatalogError::Invalid(format!(
                        "entity '{}' flow {idx}: weight {} is negative",
                        entity.name, flow.weight
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build the provider, drawing colors from `rotation` and missing
    /// liveness values from `probe`.
    pub fn build(&self, rotation: &ColorRotation, probe: &dyn LivenessProbe) -> StaticServices {
        let groups = self
            .entities
            .iter()
            .map(|entity| {
                let flows: Vec<SankeyFlow> = entity
                    .flows
                    .iter()
                    .map(|f| {
                        SankeyFlow::new(f.from.build(probe), f.to.build(probe), f.weight, rotation)
                    })
                    .collect();
                (Entity::new(&entity.name), flows)
            })
            .collect();
        StaticServices::new(groups)
    }
}

/// Read, validate and build a catalog file.
pub fn load(
    path: &Path,
    rotation: &ColorRotation,
    probe: &dyn LivenessProbe,
) -> Result<StaticServices, CatalogError> {
    let yaml = std::fs::read_to_string(path)?;
    let catalog = Catalog::parse(&yaml)?;
    info!(
        path = %path.display(),
        entities = catalog.entities.len(),
        "loaded service catalog"
    );
    Ok(catalog.build(rotation, probe))
}
