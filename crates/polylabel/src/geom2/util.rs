use super::types::Point;

/// Area-weighted centroid of a closed ring (shoelace form).
///
/// Returns `None` when the signed area is exactly zero (collinear or
/// self-cancelling rings), leaving the fallback to the caller.
pub fn ring_centroid(points: &[Point]) -> Option<Point> {
    let n = points.len();
    let mut area = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + n - 1) % n];
        let diff = a.x * b.y - b.x * a.y;
        x += (a.x + b.x) * diff;
        y += (a.y + b.y) * diff;
        area += diff * 3.0;
    }
    if area == 0.0 {
        return None;
    }
    Some(Point::new(x / area, y / area))
}

/// Signed area of a closed ring; positive for counterclockwise order.
pub fn ring_area(points: &[Point]) -> f64 {
    let n = points.len();
    let mut twice = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice += a.x * b.y - b.x * a.y;
    }
    twice / 2.0
}
