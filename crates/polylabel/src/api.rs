//! Curated API surface.
//!
//! Prefer these re-exports over deep module paths; internal layout may change.

// Polygon model and distance field
pub use crate::geom2::{
    contains, ring_area, ring_centroid, segment_distance_sq, signed_distance, Bbox, Point,
    Polygon, PolygonError, Ring,
};
// Random polygons
pub use crate::geom2::rand::{
    draw_star_polygon, regular_polygon, ReplayToken as StarReplay, StarCfg, VertexCount,
};
// Containers
pub use crate::heap::{Heap, PriorityQueue};
// Pole search
pub use crate::pole::{
    bbox_cell, bootstrap_best, centroid_cell, find_pole, find_pole_traced, polylabel, Cell,
    PoleCfg, SearchResult, SearchTrace,
};
