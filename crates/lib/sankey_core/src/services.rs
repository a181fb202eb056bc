// @awa-component: CHART-ServiceData
//
//! Chart data providers.
//!
//! [`ServiceData`] is the capability set the chart endpoints read from.
//! [`ServiceCatalog`] is the closed set of shipped providers:
//!
//! - `Redacted` — every query answers with an empty collection
//! - `Static` — entities and flows loaded from a catalog file

use std::collections::HashMap;

use crate::model::{Entity, SankeyFlow};

/// Source of entities and flows for the chart endpoints.
pub trait ServiceData {
    /// All known entities, in provider order.
    fn entities(&self) -> &[Entity];

    /// Flows that belong to `entity`. Unknown entities have none.
    fn service_group(&self, entity: &Entity) -> Vec<SankeyFlow>;

    /// Every flow currently known.
    fn flows(&self) -> &[SankeyFlow];

    /// Replace the list of known flows.
    fn set_flows(&mut self, flows: Vec<SankeyFlow>);

    /// Whether an entity with this name exists.
    fn has_entity(&self, name: &str) -> bool {
        self.entities().iter().any(|e| e.name == name)
    }
}

/// Provider with all data withheld.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedactedServices;

impl ServiceData for RedactedServices {
    fn entities(&self) -> &[Entity] {
        &[]
    }

    fn service_group(&self, _entity: &Entity) -> Vec<SankeyFlow> {
        Vec::new()
    }

    fn flows(&self) -> &[SankeyFlow] {
        &[]
    }

    fn set_flows(&mut self, flows: Vec<SankeyFlow>) {
        tracing::debug!(dropped = flows.len(), "redacted provider ignores flow updates");
    }
}

/// Provider over a fixed set of entity groups.
#[derive(Debug, Clone, Default)]
pub struct StaticServices {
    entities: Vec<Entity>,
    groups: HashMap<String, Vec<SankeyFlow>>,
    flows: Vec<SankeyFlow>,
}

impl StaticServices {
    /// Build from `(entity, group)` pairs. The all-flows list starts as every
    /// group concatenated in the given order.
    pub fn new(groups: Vec<(Entity, Vec<SankeyFlow>)>) -> Self {
        let mut services = Self::default();
        for (entity, group) in groups {
            services.flows.extend(group.iter().cloned());
            services.groups.insert(entity.name.clone(), group);
            services.entities.push(entity);
        }
        services
    }
}

impl ServiceData for StaticServices {
    fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn service_group(&self, entity: &Entity) -> Vec<SankeyFlow> {
        self.groups.get(&entity.name).cloned().unwrap_or_default()
    }

    fn flows(&self) -> &[SankeyFlow] {
        &self.flows
    }

    fn set_flows(&mut self, flows: Vec<SankeyFlow>) {
        self.flows = flows;
    }
}

/// The shipped providers.
#[derive(Debug, Clone)]
pub enum ServiceCatalog {
    Redacted(RedactedServices),
    Static(StaticServices),
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        ServiceCatalog::Redacted(RedactedServices)
    }
}

impl ServiceCatalog {
    /// Short provider name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceCatalog::Redacted(_) => "redacted",
            ServiceCatalog::Static(_) => "static",
        }
    }
}

impl From<StaticServices> for ServiceCatalog {
    fn from(services: StaticServices) -> Self {
        ServiceCatalog::Static(services)
    }
}

impl ServiceData for ServiceCatalog {
    fn entities(&self) -> &[Entity] {
        match self {
            ServiceCatalog::Redacted(s) => s.entities(),
            ServiceCatalog::Static(s) => s.entities(),
        }
    }

    fn service_group(&self, entity: &Entity) -> Vec<SankeyFlow> {
        match self {
            ServiceCatalog::Redacted(s) => s.service_group(entity),
            ServiceCatalog::Static(s) => s.service_group(entity),
        }
    }

    fn flows(&self) -> &[SankeyFlow] {
        match self {
            ServiceCatalog::Redacted(s) => s.flows(),
            ServiceCatalog::Static(s) => s.flows(),
        }
    }

    fn set_flows(&mut self, flows: Vec<SankeyFlow>) {
        match self {
            ServiceCatalog::Redacted(s) => s.set_flows(flows),
            ServiceCatalog::Static(s) => s.set_flows(flows),
        }
    }
}
