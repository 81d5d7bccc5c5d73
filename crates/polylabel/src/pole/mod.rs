//! Pole of inaccessibility: best-first quadtree search over the distance field.
//!
//! Purpose
//! - Find the interior point farthest from the polygon outline (label placement)
//!   to within a caller-chosen precision.
//!
//! Model
//! - Tile the outer ring's bounding box with squares of side `min(width, height)`.
//! - Bootstrap the incumbent from the centroid and bbox-center candidates.
//! - Repeatedly pop the cell with the largest upper bound `max`; keep it if it
//!   beats the incumbent, prune it when `max - best <= precision`, otherwise
//!   split it into four quadrants.
//! - Cells are ordered by a sound bound, so once a cell is pruned, nothing it
//!   contains can improve the answer by more than `precision`.
//!
//! Code cross-refs: `geom2::signed_distance`, `heap::PriorityQueue`.

mod cell;
mod search;
mod types;

pub use cell::{bbox_cell, centroid_cell, Cell};
pub use search::{bootstrap_best, find_pole, find_pole_traced, polylabel};
pub use types::{PoleCfg, SearchResult, SearchTrace};

#[cfg(test)]
mod tests;
