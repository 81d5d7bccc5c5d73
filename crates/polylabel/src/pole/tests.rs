use super::*;
use crate::geom2::rand::{draw_star_polygon, regular_polygon, ReplayToken, StarCfg, VertexCount};
use crate::geom2::{signed_distance, Point, Polygon};
use nalgebra::vector;
use proptest::prelude::*;

fn rectangle() -> Polygon {
    Polygon::from_coords(&[vec![
        [0.0, 0.0],
        [0.0, 10.0],
        [20.0, 10.0],
        [20.0, 0.0],
        [0.0, 0.0],
    ]])
    .unwrap()
}

/// 0..100 square with a centered 40..60 square hole.
fn frame() -> Polygon {
    Polygon::from_coords(&[
        vec![[0.0, 0.0], [100.0, 0.0], [100.0, 100.0], [0.0, 100.0]],
        vec![[40.0, 40.0], [40.0, 60.0], [60.0, 60.0], [60.0, 40.0]],
    ])
    .unwrap()
}

/// Pole distance of `frame()`: on a corner diagonal, equidistant from the outer
/// corner edges and the nearest hole corner.
fn frame_pole_distance() -> f64 {
    let s = std::f64::consts::SQRT_2;
    let x = (100.0 + 60.0 * s) / (1.0 + s);
    100.0 - x
}

fn spiky_star(index: u64) -> Polygon {
    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 8, max: 48 },
        radial_jitter: 0.7,
        ..StarCfg::default()
    };
    draw_star_polygon(cfg, ReplayToken { seed: 2024, index })
}

fn with_precision(precision: f64) -> PoleCfg {
    PoleCfg {
        precision,
        ..PoleCfg::default()
    }
}

#[test]
fn rectangle_pole_is_center() {
    let r = find_pole(&rectangle(), PoleCfg::default());
    assert_eq!(r.coordinates(), [10.0, 5.0]);
    assert_eq!(r.distance, 5.0);
    assert_eq!((r.x(), r.y()), (10.0, 5.0));
}

#[test]
fn collinear_ring_returns_bbox_corner() {
    let p = Polygon::from_coords(&[vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [0.0, 0.0]]]).unwrap();
    let (r, trace) = find_pole_traced(&p, PoleCfg::default());
    assert_eq!(r.coordinates(), [0.0, 0.0]);
    assert_eq!(r.distance, 0.0);
    assert_eq!(trace.probes, 0);
}

#[test]
fn zero_area_ring_falls_back_to_first_vertex() {
    // Triangle collapsed onto two segments: bbox is non-degenerate, area is zero.
    let p = Polygon::from_coords(&[vec![
        [0.0, 0.0],
        [1.0, 0.0],
        [1.0, 1.0],
        [1.0, 0.0],
        [0.0, 0.0],
    ]])
    .unwrap();
    let c = centroid_cell(&p);
    assert_eq!(c.center, vector![0.0, 0.0]);
    assert_eq!(c.distance, 0.0);
    let r = polylabel(&p, 1.0);
    assert_eq!(r.coordinates(), [0.0, 0.0]);
    assert_eq!(r.distance, 0.0);
}

#[test]
fn regular_polygon_within_precision_of_inradius() {
    let n = 64;
    let radius = 100.0;
    let p = regular_polygon(n, radius, vector![250.0, -40.0]);
    let inradius = radius * (std::f64::consts::PI / n as f64).cos();
    for precision in [0.01, 0.5, 1.0, 10.0] {
        let r = polylabel(&p, precision);
        assert!(r.distance >= inradius - precision, "precision {precision}");
        assert!(r.distance <= inradius + 1e-9);
    }
}

#[test]
fn frame_pole_avoids_hole() {
    let expected = frame_pole_distance();
    let p = frame();
    for precision in [0.1, 1.0] {
        let r = polylabel(&p, precision);
        assert!(r.distance >= expected - precision);
        assert!(r.distance <= expected + 1e-9);
        assert!(r.distance > 0.0);
        assert_eq!(r.distance, signed_distance(r.point, &p));
    }
}

#[test]
fn looser_precision_gives_coarser_answer() {
    let p = frame();
    let fine = polylabel(&p, 1.0);
    let coarse = polylabel(&p, 50.0);
    assert!(fine.distance > coarse.distance);
    assert_ne!(fine.coordinates(), coarse.coordinates());
    // The first split of the single seed cell already lands on a quadrant center.
    assert_eq!(coarse.coordinates(), [25.0, 25.0]);
    assert!((coarse.distance - 15.0 * std::f64::consts::SQRT_2).abs() < 1e-12);

    for index in 0..8 {
        let star = spiky_star(index);
        let fine = polylabel(&star, 1.0);
        let coarse = polylabel(&star, 50.0);
        assert!(fine.distance + 1.0 >= coarse.distance);
    }
}

#[test]
fn reruns_are_bit_identical() {
    for index in 0..5 {
        let p = spiky_star(index);
        let (a, ta) = find_pole_traced(&p, with_precision(0.25));
        let (b, tb) = find_pole_traced(&p, with_precision(0.25));
        assert_eq!(a.point.x.to_bits(), b.point.x.to_bits());
        assert_eq!(a.point.y.to_bits(), b.point.y.to_bits());
        assert_eq!(a.distance.to_bits(), b.distance.to_bits());
        assert_eq!(ta, tb);
    }
}

#[test]
fn debug_flag_does_not_change_result() {
    let p = spiky_star(42);
    let quiet = find_pole(&p, with_precision(0.5));
    let loud = find_pole(
        &p,
        PoleCfg {
            precision: 0.5,
            debug: true,
        },
    );
    assert_eq!(quiet, loud);
}

#[test]
fn improvements_are_monotone_and_end_at_result() {
    for index in 0..10 {
        let p = spiky_star(index);
        let (r, trace) = find_pole_traced(&p, with_precision(0.5));
        assert!(!trace.improvements.is_empty());
        assert!(trace.improvements.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(trace.improvements.last().copied(), Some(r.distance));
        assert_eq!(trace.improvements[0], bootstrap_best(&p).distance);
        // Seed grid plus four per split.
        assert!(trace.probes >= 1);
        assert!(r.distance > 0.0);
        assert_eq!(r.distance, signed_distance(r.point, &p));
    }
}

#[test]
fn tighter_precision_probes_more() {
    let p = spiky_star(3);
    let (_, loose) = find_pole_traced(&p, with_precision(10.0));
    let (_, tight) = find_pole_traced(&p, with_precision(0.01));
    assert!(tight.probes > loose.probes);
}

#[test]
fn split_quarters_the_cell() {
    let p = rectangle();
    let parent = Cell::new(vector![10.0, 5.0], 4.0, &p);
    let kids = parent.split(&p);
    let centers: Vec<Point> = kids.iter().map(|c| c.center).collect();
    assert_eq!(
        centers,
        vec![
            vector![8.0, 3.0],
            vector![12.0, 3.0],
            vector![8.0, 7.0],
            vector![12.0, 7.0]
        ]
    );
    assert!(kids.iter().all(|c| c.half == 2.0));
    assert!(kids.iter().all(|c| c.max <= parent.max));
}

#[test]
fn cell_equality_is_positional() {
    let p = rectangle();
    let a = Cell::new(vector![3.0, 3.0], 1.0, &p);
    let b = Cell::new(vector![3.0, 3.0], 2.0, &p);
    let c = Cell::new(vector![3.0, 4.0], 1.0, &p);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(bbox_cell(&p).center, vector![10.0, 5.0]);
    assert_eq!(bbox_cell(&p).half, 0.0);
}

proptest! {
    #[test]
    fn cell_bound_is_sound(
        index in 0u64..64,
        cx in -150.0f64..150.0,
        cy in -150.0f64..150.0,
        half in 0.0f64..40.0,
        u in -1.0f64..=1.0,
        v in -1.0f64..=1.0,
    ) {
        let p = spiky_star(index);
        let cell = Cell::new(vector![cx, cy], half, &p);
        prop_assert!(cell.max >= cell.distance);
        let q = vector![cx + u * half, cy + v * half];
        prop_assert!(signed_distance(q, &p) <= cell.max + 1e-9);
    }

    #[test]
    fn result_within_precision_of_dense_sample(index in 0u64..32) {
        let p = spiky_star(index);
        let precision = 1.0;
        let r = find_pole(&p, with_precision(precision));
        // Any sampled point is a lower bound on the true maximum.
        let b = p.bbox();
        let mut sampled = f64::NEG_INFINITY;
        for i in 0..=60 {
            for j in 0..=60 {
                let q = vector![
                    b.min.x + b.width() * (i as f64) / 60.0,
                    b.min.y + b.height() * (j as f64) / 60.0
                ];
                sampled = sampled.max(signed_distance(q, &p));
            }
        }
        prop_assert!(r.distance >= sampled - precision);
    }
}
