//! Square search cells scored against the distance field.

use std::f64::consts::SQRT_2;

use crate::geom2::{ring_centroid, signed_distance, Point, Polygon};

/// Candidate square of half-width `half` centered at `center`.
///
/// Invariants:
/// - `distance` is the signed distance at `center`, computed once at construction.
/// - `max = distance + half·√2` bounds the distance of every point in the square
///   (the distance field is 1-Lipschitz and no point is farther than `half·√2`
///   from the center), so `max >= distance`.
#[derive(Clone, Copy, Debug)]
pub struct Cell {
    pub center: Point,
    pub half: f64,
    pub distance: f64,
    pub max: f64,
}

impl Cell {
    pub fn new(center: Point, half: f64, polygon: &Polygon) -> Self {
        let distance = signed_distance(center, polygon);
        Self {
            center,
            half,
            distance,
            max: distance + half * SQRT_2,
        }
    }

    /// The four quadrant children (half-width `half / 2`).
    pub fn split(&self, polygon: &Polygon) -> [Cell; 4] {
        let h = self.half / 2.0;
        let c = self.center;
        [
            Cell::new(Point::new(c.x - h, c.y - h), h, polygon),
            Cell::new(Point::new(c.x + h, c.y - h), h, polygon),
            Cell::new(Point::new(c.x - h, c.y + h), h, polygon),
            Cell::new(Point::new(c.x + h, c.y + h), h, polygon),
        ]
    }
}

/// Structural equality on the center only; scores derive from it.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center
    }
}

/// Zero-size cell at the area centroid of the outer ring.
///
/// A zero-area ring has no centroid; its first vertex is used instead.
pub fn centroid_cell(polygon: &Polygon) -> Cell {
    let outer = polygon.outer();
    let center = ring_centroid(outer).unwrap_or(outer[0]);
    Cell::new(center, 0.0, polygon)
}

/// Zero-size cell at the exact bounding-box center.
pub fn bbox_cell(polygon: &Polygon) -> Cell {
    Cell::new(polygon.bbox().center(), 0.0, polygon)
}
