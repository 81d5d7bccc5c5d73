//! Best-first grid refinement converging on the pole of inaccessibility.

use crate::geom2::{Point, Polygon};
use crate::heap::PriorityQueue;

use super::cell::{bbox_cell, centroid_cell, Cell};
use super::types::{PoleCfg, SearchResult, SearchTrace};

/// Max-queue on cell potential.
type CellQueue = PriorityQueue<Cell, fn(&Cell, &Cell) -> bool>;

/// Find the pole of inaccessibility to within `cfg.precision`.
pub fn find_pole(polygon: &Polygon, cfg: PoleCfg) -> SearchResult {
    PoleRunner::new(polygon, cfg).solve().0
}

/// Like `find_pole`, also returning probe counts and the improvement history.
pub fn find_pole_traced(polygon: &Polygon, cfg: PoleCfg) -> (SearchResult, SearchTrace) {
    PoleRunner::new(polygon, cfg).solve()
}

/// Convenience: default settings with a custom precision.
pub fn polylabel(polygon: &Polygon, precision: f64) -> SearchResult {
    find_pole(
        polygon,
        PoleCfg {
            precision,
            ..PoleCfg::default()
        },
    )
}

/// Initial best guess: the better of the centroid and bbox-center candidates.
///
/// The bbox center covers near-rectangular shapes where the seed grid centers
/// straddle the true pole.
pub fn bootstrap_best(polygon: &Polygon) -> Cell {
    let centroid = centroid_cell(polygon);
    let bbox = bbox_cell(polygon);
    if bbox.distance > centroid.distance {
        bbox
    } else {
        centroid
    }
}

/// Search runner carrying the shared polygon, settings, and accumulators.
struct PoleRunner<'a> {
    polygon: &'a Polygon,
    cfg: PoleCfg,
    trace: SearchTrace,
}

impl<'a> PoleRunner<'a> {
    fn new(polygon: &'a Polygon, cfg: PoleCfg) -> Self {
        Self {
            polygon,
            cfg,
            trace: SearchTrace::default(),
        }
    }

    fn solve(mut self) -> (SearchResult, SearchTrace) {
        let bbox = self.polygon.bbox();
        let cell_size = bbox.width().min(bbox.height());
        if cell_size == 0.0 {
            // Collapsed to a segment or point: nothing to refine.
            let result = SearchResult {
                point: bbox.min,
                distance: 0.0,
            };
            self.trace.improvements.push(0.0);
            return (result, self.trace);
        }

        let mut queue = self.seed_grid(cell_size);
        self.trace.probes = queue.len();

        let mut best = bootstrap_best(self.polygon);
        self.trace.improvements.push(best.distance);

        while let Some(cell) = queue.dequeue() {
            if cell.distance > best.distance {
                best = cell;
                self.trace.improvements.push(best.distance);
                if self.cfg.debug {
                    tracing::debug!(
                        distance = best.distance,
                        probes = self.trace.probes,
                        "found best"
                    );
                }
            }
            // Prune: nothing in this cell can beat `best` by more than the tolerance.
            if cell.max - best.distance <= self.cfg.precision {
                continue;
            }
            queue.extend(cell.split(self.polygon));
            self.trace.probes += 4;
        }

        if self.cfg.debug {
            tracing::debug!(
                probes = self.trace.probes,
                distance = best.distance,
                "search finished"
            );
        }
        let result = SearchResult {
            point: best.center,
            distance: best.distance,
        };
        (result, self.trace)
    }

    /// Tile the bounding box with `cell_size` squares, largest potential first.
    fn seed_grid(&self, cell_size: f64) -> CellQueue {
        let bbox = self.polygon.bbox();
        let half = cell_size / 2.0;
        let mut cells = Vec::new();
        let mut i = 0usize;
        loop {
            let x = bbox.min.x + (i as f64) * cell_size;
            if x >= bbox.max.x {
                break;
            }
            let mut j = 0usize;
            loop {
                let y = bbox.min.y + (j as f64) * cell_size;
                if y >= bbox.max.y {
                    break;
                }
                cells.push(Cell::new(Point::new(x + half, y + half), half, self.polygon));
                j += 1;
            }
            i += 1;
        }
        PriorityQueue::from_vec(cells, higher_potential as fn(&Cell, &Cell) -> bool)
    }
}

#[inline]
fn higher_potential(a: &Cell, b: &Cell) -> bool {
    a.max > b.max
}
