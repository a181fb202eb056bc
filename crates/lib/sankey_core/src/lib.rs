//! # sankey_core
//!
//! Domain logic for the Sankey chart service: nodes, flows, the color
//! rotation and the data providers the chart endpoints read from.

pub mod catalog;
pub mod hello;
pub mod liveness;
pub mod model;
pub mod palette;
pub mod services;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
