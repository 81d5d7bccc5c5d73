//! Print label positions for a few random star polygons.
//!
//! Usage:
//!   cargo run -p polylabel --example label_stars -- [precision]
//!
//! Prints, per sample: vertex count, pole (x, y), distance, and probe count.

use polylabel::geom2::rand::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use polylabel::{find_pole_traced, PoleCfg};

fn main() {
    let precision = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(1.0);
    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 6, max: 40 },
        radial_jitter: 0.6,
        ..StarCfg::default()
    };
    for index in 0..5 {
        let poly = draw_star_polygon(cfg, ReplayToken { seed: 2025, index });
        let (res, trace) = find_pole_traced(
            &poly,
            PoleCfg {
                precision,
                debug: false,
            },
        );
        println!(
            "star {index}: V={}, pole=({:.3}, {:.3}), distance={:.3}, probes={}",
            poly.outer().len(),
            res.x(),
            res.y(),
            res.distance,
            trace.probes
        );
    }
}
