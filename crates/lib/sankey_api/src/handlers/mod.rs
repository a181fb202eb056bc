//! Request handlers.

pub mod chart;
pub mod health;
