//! Polygon data model: points, rings, bounding boxes, and validated polygons.
//!
//! - `Polygon`: ring 0 is the outer boundary, later rings are holes.
//! - Rings are implicitly closed; a repeated closing vertex is accepted and only
//!   contributes a zero-length edge.
//! - `PolygonError`: the only failure surface, raised at construction time.

use std::fmt;

use nalgebra::Vector2;

/// 2D point (double precision).
pub type Point = Vector2<f64>;

/// Ordered, implicitly closed sequence of points.
pub type Ring = Vec<Point>;

/// Errors surfaced when building a `Polygon` from raw rings.
#[derive(Clone, Debug, PartialEq)]
pub enum PolygonError {
    /// No rings at all (not even an outer boundary).
    Empty,
    /// The outer ring cannot enclose anything.
    TooFewPoints { ring: usize, count: usize },
    /// A coordinate is NaN or infinite.
    NonFinite { ring: usize, index: usize },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolygonError::Empty => write!(f, "polygon has no rings"),
            PolygonError::TooFewPoints { ring, count } => write!(
                f,
                "ring {} has {} point(s); the outer ring needs at least 3",
                ring, count
            ),
            PolygonError::NonFinite { ring, index } => {
                write!(f, "ring {} point {} has a non-finite coordinate", ring, index)
            }
        }
    }
}

impl std::error::Error for PolygonError {}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bbox {
    pub min: Point,
    pub max: Point,
}

impl Bbox {
    /// Bounding box of a non-empty point set. `None` for an empty slice.
    pub fn of_points(points: &[Point]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min = *first;
        let mut max = *first;
        for p in rest {
            if p.x < min.x {
                min.x = p.x;
            }
            if p.x > max.x {
                max.x = p.x;
            }
            if p.y < min.y {
                min.y = p.y;
            }
            if p.y > max.y {
                max.y = p.y;
            }
        }
        Some(Self { min, max })
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.min.x + self.width() / 2.0,
            self.min.y + self.height() / 2.0,
        )
    }
}

/// Polygon with optional holes.
///
/// Invariants:
/// - At least one ring; the outer ring has ≥ 3 points.
/// - All coordinates are finite.
/// - No orientation or self-intersection checks; malformed rings are scored
///   mechanically by the even-odd rule.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    /// Validate and wrap raw rings.
    pub fn new(rings: Vec<Ring>) -> Result<Self, PolygonError> {
        let outer = rings.first().ok_or(PolygonError::Empty)?;
        if outer.len() < 3 {
            return Err(PolygonError::TooFewPoints {
                ring: 0,
                count: outer.len(),
            });
        }
        for (r, ring) in rings.iter().enumerate() {
            if let Some(i) = ring
                .iter()
                .position(|p| !(p.x.is_finite() && p.y.is_finite()))
            {
                return Err(PolygonError::NonFinite { ring: r, index: i });
            }
        }
        Ok(Self { rings })
    }

    /// Wrap rings already known to satisfy the invariants (generated shapes).
    pub(crate) fn new_unchecked(rings: Vec<Ring>) -> Self {
        debug_assert!(Self::new(rings.clone()).is_ok());
        Self { rings }
    }

    /// Build from `[x, y]` coordinate rings (the usual GeoJSON-like nesting).
    pub fn from_coords(rings: &[Vec<[f64; 2]>]) -> Result<Self, PolygonError> {
        Self::new(
            rings
                .iter()
                .map(|ring| ring.iter().map(|&[x, y]| Point::new(x, y)).collect())
                .collect(),
        )
    }

    #[inline]
    pub fn outer(&self) -> &[Point] {
        &self.rings[0]
    }
    #[inline]
    pub fn holes(&self) -> &[Ring] {
        &self.rings[1..]
    }
    #[inline]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Bounding box of the outer ring (holes lie inside it by construction).
    pub fn bbox(&self) -> Bbox {
        // Outer ring is non-empty by invariant.
        Bbox::of_points(self.outer()).unwrap_or(Bbox {
            min: Point::zeros(),
            max: Point::zeros(),
        })
    }

    /// All edges `(a, b)` of all rings, wrapping last→first within each ring.
    ///
    /// `a` is the later vertex and `b` the earlier one, matching the traversal
    /// order used by the distance field.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.rings.iter().flat_map(|ring| {
            let n = ring.len();
            (0..n).map(move |i| (ring[(i + 1) % n], ring[i]))
        })
    }

    pub fn into_rings(self) -> Vec<Ring> {
        self.rings
    }
}
