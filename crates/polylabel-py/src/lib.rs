//! PyO3 bindings for the `polylabel` crate.
//!
//! Notes
//! - Keep bindings thin and predictable: polygons cross the boundary as lists
//!   of `(x, y)` tuples, results as plain tuples.
//! - Validation errors surface as `ValueError`.

mod common;

use nalgebra::Vector2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use polylabel::geom2::signed_distance as signed_distance_rs;
use polylabel::{find_pole_traced, PoleCfg};

use common::{polygon_from_py_rings, PyRings};

/// Pole of inaccessibility: returns `(x, y, distance)`.
#[pyfunction]
#[pyo3(name = "polylabel", signature = (rings, precision = 1.0, debug = false))]
fn find_pole(rings: PyRings, precision: f64, debug: bool) -> PyResult<(f64, f64, f64)> {
    if !(precision.is_finite() && precision > 0.0) {
        return Err(PyValueError::new_err("precision must be a positive number"));
    }
    let poly = polygon_from_py_rings(rings)?;
    let (res, _trace) = find_pole_traced(&poly, PoleCfg { precision, debug });
    Ok((res.x(), res.y(), res.distance))
}

/// Signed distance from `point` to the polygon outline (positive inside).
#[pyfunction]
fn signed_distance(rings: PyRings, point: (f64, f64)) -> PyResult<f64> {
    let poly = polygon_from_py_rings(rings)?;
    Ok(signed_distance_rs(Vector2::new(point.0, point.1), &poly))
}

#[pymodule]
fn polylabel_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_pole, m)?)?;
    m.add_function(wrap_pyfunction!(signed_distance, m)?)?;
    m.add("__version__", polylabel::VERSION)?;
    Ok(())
}
