use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use polylabel::{Polygon, PolygonError};

/// Python-side rings: `[[(x, y), ...], ...]`, outer ring first.
pub type PyRings = Vec<Vec<(f64, f64)>>;

pub fn polygon_from_py_rings(rings: PyRings) -> PyResult<Polygon> {
    let coords: Vec<Vec<[f64; 2]>> = rings
        .into_iter()
        .map(|ring| ring.into_iter().map(|(x, y)| [x, y]).collect())
        .collect();
    Polygon::from_coords(&coords).map_err(map_polygon_err)
}

pub fn map_polygon_err(err: PolygonError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
