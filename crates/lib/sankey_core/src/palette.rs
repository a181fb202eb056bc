// @awa-component: CHART-ColorRotation
//
//! Rotating edge palette.
//!
//! Enabled flows take the next color of an 8-color cycle; disabled flows are
//! painted [`DISABLED_COLOR`] and leave the rotation untouched.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Palette colors in rotation order.
pub const PALETTE: [&str; 8] = [
    "#a6cee3", "#b2df8a", "#fb9a99", "#fdbf6f", "#cab2d6", "#ffff99", "#1f78b4", "#33a02c",
];

/// Marker color for flows with an offline endpoint.
pub const DISABLED_COLOR: &str = "#ff0000";

/// Shared rotation pointer over [`PALETTE`].
///
/// Hand one instance (usually behind an `Arc`) to everything that builds
/// flows. Each call to [`ColorRotation::next_color`] advances the pointer by
/// exactly one step, also when called from several threads at once.
#[derive(Debug, Default)]
pub struct ColorRotation {
    current: AtomicUsize,
}

impl ColorRotation {
    /// Create a rotation pointing at the first palette color.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a rotation pointing at `index` (taken modulo the palette size).
    pub fn starting_at(index: usize) -> Self {
        Self {
            current: AtomicUsize::new(index % PALETTE.len()),
        }
    }

    /// Color the next call to [`next_color`](Self::next_color) will return.
    pub fn peek(&self) -> &'static str {
        PALETTE[self.current.load(Ordering::Acquire)]
    }

    /// Return the current color and advance to its successor.
    pub fn next_color(&self) -> &'static str {
        let previous = self
            .current
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |idx| {
                Some((idx + 1) % PALETTE.len())
            })
            // The closure never returns None.
            .unwrap_or_else(|idx| idx);
        PALETTE[previous]
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn fresh_rotation_starts_at_first_color() {
        let rotation = ColorRotation::new();
        assert_eq!(rotation.peek(), "#a6cee3");
        assert_eq!(rotation.next_color(), "#a6cee3");
        assert_eq!(rotation.next_color(), "#b2df8a");
    }

    #[test]
    fn rotation_wraps_after_eighth_color() {
        let rotation = ColorRotation::new();
        let first_cycle: Vec<_> = (0..8).map(|_| rotation.next_color()).collect();
        assert_eq!(first_cycle, PALETTE);
        assert_eq!(rotation.next_color(), PALETTE[0]);
    }

    #[test]
    fn starting_index_is_taken_modulo_palette() {
        let rotation = ColorRotation::starting_at(15);
        assert_eq!(rotation.next_color(), "#33a02c");
        assert_eq!(rotation.next_color(), "#a6cee3");
    }

    #[test]
    fn concurrent_draws_advance_once_each() {
        let rotation = Arc::new(ColorRotation::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let rotation = Arc::clone(&rotation);
                std::thread::spawn(move || {
                    (0..200).map(|_| rotation.next_color()).collect::<Vec<_>>()
                })
            })
            .collect();

        let mut counts = std::collections::HashMap::new();
        for handle in handles {
            for color in handle.join().expect("thread panicked") {
                *counts.entry(color).or_insert(0usize) += 1;
            }
        }

        // 800 draws over 8 colors: every color exactly 100 times.
        assert_eq!(counts.len(), PALETTE.len());
        assert!(counts.values().all(|&n| n == 100), "uneven: {counts:?}");
        assert_eq!(rotation.peek(), PALETTE[0]);
    }
}
