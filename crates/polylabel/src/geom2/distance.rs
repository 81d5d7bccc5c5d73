//! Signed distance from a point to a polygon boundary.
//!
//! - Containment: even-odd ray casting towards +x across all rings combined, so
//!   holes subtract their interior with the same parity toggle.
//! - Magnitude: minimum point-to-segment distance over all edges.
//! - Sign: positive inside, negative outside, exactly `0.0` on the boundary.

use super::types::{Point, Polygon};

/// Squared distance from `p` to the closed segment `[a, b]`.
///
/// The projection parameter is clamped to the segment: `t > 1` snaps to `b`,
/// `t ∈ (0, 1]` uses the projection, otherwise `a`. Degenerate segments
/// (`a == b`) measure the distance to `a`.
#[inline]
pub fn segment_distance_sq(p: Point, a: Point, b: Point) -> f64 {
    let mut q = a;
    let d = b - a;
    if d.x != 0.0 || d.y != 0.0 {
        let t = ((p.x - a.x) * d.x + (p.y - a.y) * d.y) / (d.x * d.x + d.y * d.y);
        if t > 1.0 {
            q = b;
        } else if t > 0.0 {
            q += d * t;
        }
    }
    let e = p - q;
    e.x * e.x + e.y * e.y
}

/// Does the horizontal ray from `p` towards +x cross edge `(a, b)`?
///
/// Strict comparisons on the y-span so a vertex lying exactly on the ray is
/// counted by exactly one of its two edges.
#[inline]
fn ray_crosses(p: Point, a: Point, b: Point) -> bool {
    (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
}

/// Signed Euclidean distance from `p` to the polygon outline.
pub fn signed_distance(p: Point, polygon: &Polygon) -> f64 {
    let mut inside = false;
    let mut min_dist_sq = f64::MAX;
    for (a, b) in polygon.edges() {
        if ray_crosses(p, a, b) {
            inside = !inside;
        }
        let dist_sq = segment_distance_sq(p, a, b);
        if dist_sq < min_dist_sq {
            min_dist_sq = dist_sq;
        }
    }
    if min_dist_sq == 0.0 {
        0.0
    } else if inside {
        min_dist_sq.sqrt()
    } else {
        -min_dist_sq.sqrt()
    }
}

/// Even-odd containment only (strict interior; boundary points may go either way).
pub fn contains(p: Point, polygon: &Polygon) -> bool {
    polygon
        .edges()
        .fold(false, |inside, (a, b)| inside ^ ray_crosses(p, a, b))
}
