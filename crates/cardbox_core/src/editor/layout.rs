//! Drop-position computation over rendered item geometry.
//!
//! The host reports where the pointer released and where each sequence item
//! currently sits; the core decides the insertion index. Coordinates share
//! one axis origin (the editor pane's top edge).

/// Vertical extent of one rendered sequence item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemExtent {
    pub top: f64,
    pub height: f64,
}

impl ItemExtent {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Vertical midpoint used as the insertion boundary.
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// Computes the insertion index for a drop at `drop_y`.
///
/// Linear scan, first match wins: the index of the first item whose midpoint
/// lies strictly below the drop coordinate, or `extents.len()` to append.
/// A drop exactly on a midpoint lands after that item.
pub fn insertion_index(extents: &[ItemExtent], drop_y: f64) -> usize {
    for (index, extent) in extents.iter().enumerate() {
        if drop_y < extent.midpoint() {
            return index;
        }
    }
    extents.len()
}
