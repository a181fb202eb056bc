//! Liveness draws for chart nodes.

use rand::Rng;

/// Out of every 100 draws, this many mark a node offline.
const OFFLINE_PER_HUNDRED: u32 = 2;

/// Source of the liveness flag assigned to a node at construction.
pub trait LivenessProbe: Send + Sync {
    /// Draw a liveness value. Called once per node.
    fn draw(&self) -> bool;
}

/// Uniform random liveness: roughly 2 nodes in 100 come up offline.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomLiveness;

impl LivenessProbe for RandomLiveness {
    fn draw(&self) -> bool {
        rand::rng().random_range(0..100) >= OFFLINE_PER_HUNDRED
    }
}

/// Always returns the wrapped value. Used for reproducible output.
#[derive(Debug, Clone, Copy)]
pub struct FixedLiveness(pub bool);

impl LivenessProbe for FixedLiveness {
    fn draw(&self) -> bool {
        self.0
    }
}
