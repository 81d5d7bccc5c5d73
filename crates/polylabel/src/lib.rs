//! Pole of inaccessibility for polygons with holes (label placement).
//!
//! Modules
//! - `geom2`: polygon data model and the signed distance field.
//! - `heap`: binary heap / priority queue with an injected ordering.
//! - `pole`: best-first quadtree search converging on the pole.
//!
//! API Policy
//! - `api` and `prelude` are the curated entry points; module paths may move.

pub mod api;
pub mod geom2;
pub mod heap;
pub mod pole;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Point, Polygon, PolygonError};
pub use pole::{find_pole, find_pole_traced, polylabel, PoleCfg, SearchResult, SearchTrace};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        draw_star_polygon, regular_polygon, ReplayToken, StarCfg, VertexCount,
    };
    pub use crate::geom2::{signed_distance, Bbox, Point, Polygon, PolygonError};
    pub use crate::pole::{find_pole, find_pole_traced, polylabel, PoleCfg, SearchResult};
    pub use nalgebra::Vector2 as Vec2;
}
