// @awa-component: CHART-Model
//
//! Chart domain models.
//!
//! Nodes are service components drawn as Sankey vertices; flows are the
//! weighted, colored edges between them. Both serialize to the compact JSON
//! rows the chart front end consumes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::liveness::LivenessProbe;
use crate::palette::{ColorRotation, DISABLED_COLOR};

/// A named service entity that owns a group of flows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Node category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NodeType {
    EventSet,
    Dataset,
    Daemon,
    Grpc,
}

impl NodeType {
    /// Wire name, as sent in status rows.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::EventSet => "EVENTSET",
            NodeType::Dataset => "DATASET",
            NodeType::Daemon => "DAEMON",
            NodeType::Grpc => "GRPC",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A chart vertex: category, name and liveness.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    node_type: NodeType,
    name: String,
    live: bool,
}

impl Node {
    /// Build a node whose liveness is drawn from `probe`.
    pub fn new(node_type: NodeType, name: impl Into<String>, probe: &dyn LivenessProbe) -> Self {
        Self::with_liveness(node_type, name, probe.draw())
    }

    /// Build a node with a fixed liveness value.
    pub fn with_liveness(node_type: NodeType, name: impl Into<String>, live: bool) -> Self {
        Self {
            node_type,
            name: name.into(),
            live,
        }
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    /// Display label: category-specific form plus ` (offline)` when down.
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// JSON status row: `["<label>","<TYPE>",<live>]`.
    pub fn status_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&(self.label(), self.node_type, self.live))
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node_type {
            NodeType::Dataset => write!(f, "[{} dataset]", self.name)?,
            NodeType::EventSet => write!(f, "[{} events]", self.name)?,
            NodeType::Daemon => write!(f, "{} daemon", self.name)?,
            NodeType::Grpc => write!(f, "{} gRPC", self.name)?,
        }
        if !self.live {
            f.write_str(" (offline)")?;
        }
        Ok(())
    }
}

/// A weighted edge between two nodes.
///
/// `enabled` and `color` are fixed at construction. Building an enabled flow
/// advances the rotation by one step; a disabled flow leaves it alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SankeyFlow {
    from: Node,
    to: Node,
    weight: i32,
    enabled: bool,
    color: &'static str,
}

impl SankeyFlow {
    pub fn new(from: Node, to: Node, weight: i32, rotation: &ColorRotation) -> Self {
        let enabled = from.live && to.live;
        let color = if enabled {
            rotation.next_color()
        } else {
            DISABLED_COLOR
        };
        Self {
            from,
            to,
            weight,
            enabled,
            color,
        }
    }

    pub fn from(&self) -> &Node {
        &self.from
    }

    pub fn to(&self) -> &Node {
        &self.to
    }

    pub fn weight(&self) -> i32 {
        self.weight
    }

    /// True iff both endpoints are live.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Hex color, e.g. `#a6cee3`.
    pub fn color(&self) -> &'static str {
        self.color
    }

    /// Chart style string, e.g. `color: #a6cee3`.
    pub fn color_spec(&self) -> String {
        format!("color: {}", self.color)
    }

    /// JSON flow row: `["<from>","<to>",<weight>,"color: #rrggbb"]`.
    pub fn flow_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&(
            self.from.label(),
            self.to.label(),
            self.weight,
            self.color_spec(),
        ))
    }
}

/// Deduplicated endpoints of `flows`: every `from` node in flow order, then
/// every `to` node, keeping the first occurrence.
pub fn distinct_nodes(flows: &[SankeyFlow]) -> Vec<Node> {
    let mut seen = std::collections::HashSet::new();
    flows
        .iter()
        .map(|flow| flow.from())
        .chain(flows.iter().map(|flow| flow.to()))
        .filter(|node| seen.insert(*node))
        .cloned()
        .collect()
}
