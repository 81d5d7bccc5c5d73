//! 2D polygon geometry: data model and the signed distance field.
//!
//! Purpose
//! - Hold polygons as plain rings of `nalgebra` points (outer ring first, holes
//!   after) and score query points against them.
//! - Keep the API minimal and numerically explicit: every routine is a pure,
//!   deterministic function of its inputs.
//!
//! Conventions
//! - Rings are implicitly closed; winding order is irrelevant (even-odd rule).
//! - Signed distance is positive inside, negative outside, zero on the outline.
//!
//! Code cross-refs: `types::{Polygon, Bbox}`, `distance::signed_distance`,
//! `util::ring_centroid`, `rand::draw_star_polygon`.

mod distance;
pub mod rand;
mod types;
mod util;

pub use distance::{contains, segment_distance_sq, signed_distance};
pub use types::{Bbox, Point, Polygon, PolygonError, Ring};
pub use util::{ring_area, ring_centroid};
