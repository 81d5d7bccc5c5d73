//! Search settings, result, and diagnostics.

use crate::geom2::Point;

/// Search configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PoleCfg {
    /// Stopping tolerance: the returned distance is within `precision` of the
    /// true maximum. Smaller values cost more probes.
    pub precision: f64,
    /// Emit `tracing` debug events for improvements and the final summary.
    /// Never changes the result.
    pub debug: bool,
}

impl Default for PoleCfg {
    fn default() -> Self {
        Self {
            precision: 1.0,
            debug: false,
        }
    }
}

/// Best point found and its signed distance to the outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchResult {
    pub point: Point,
    pub distance: f64,
}

impl SearchResult {
    #[inline]
    pub fn x(&self) -> f64 {
        self.point.x
    }
    #[inline]
    pub fn y(&self) -> f64 {
        self.point.y
    }
    #[inline]
    pub fn coordinates(&self) -> [f64; 2] {
        [self.point.x, self.point.y]
    }
}

/// Diagnostics collected during one search.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchTrace {
    /// Cells scored by the grid and subdivisions (bootstrap candidates excluded).
    pub probes: usize,
    /// Best distance after bootstrap, then after every strict improvement.
    pub improvements: Vec<f64>,
}
