//! Polygon loaders: JSON ring arrays, or CSV/Parquet tables with `ring,x,y` columns.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use polylabel::Polygon;
use std::collections::BTreeMap;
use std::path::Path;

/// Raw rings as nested `[x, y]` pairs; ring 0 is the outer boundary.
pub type Coords = Vec<Vec<[f64; 2]>>;

/// Load and validate a polygon, dispatching on the file extension.
pub fn load_polygon(path: &Path) -> Result<Polygon> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    let coords = match ext.as_deref() {
        Some("json") | Some("geojson") => read_json(path)?,
        Some("csv") => read_table(path, TableKind::Csv)?,
        Some("parquet") => read_table(path, TableKind::Parquet)?,
        _ => bail!(
            "unsupported input {} (expected .json, .csv, or .parquet)",
            path.display()
        ),
    };
    let polygon = Polygon::from_coords(&coords)
        .with_context(|| format!("invalid polygon in {}", path.display()))?;
    tracing::info!(
        rings = polygon.rings().len(),
        outer_points = polygon.outer().len(),
        "polygon_loaded"
    );
    Ok(polygon)
}

/// `[[[x, y], ...], ...]`
pub fn read_json(path: &Path) -> Result<Coords> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}

#[derive(Clone, Copy, Debug)]
enum TableKind {
    Csv,
    Parquet,
}

fn read_table(path: &Path, kind: TableKind) -> Result<Coords> {
    let lf = match kind {
        TableKind::Csv => LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()?,
        TableKind::Parquet => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_table_shape");
    rings_from_frame(&df)
}

/// Group rows by `ring` (ascending id, 0 = outer), keeping row order within a ring.
pub fn rings_from_frame(df: &DataFrame) -> Result<Coords> {
    let ring = df.column("ring")?.cast(&DataType::Int64)?;
    let x = df.column("x")?.cast(&DataType::Float64)?;
    let y = df.column("y")?.cast(&DataType::Float64)?;
    let mut rings: BTreeMap<i64, Vec<[f64; 2]>> = BTreeMap::new();
    for (row, ((r, x), y)) in ring
        .i64()?
        .into_iter()
        .zip(x.f64()?.into_iter())
        .zip(y.f64()?.into_iter())
        .enumerate()
    {
        let (Some(r), Some(x), Some(y)) = (r, x, y) else {
            bail!("row {row} has a missing ring/x/y value");
        };
        rings.entry(r).or_default().push([x, y]);
    }
    Ok(rings.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn json_rings_roundtrip_into_polygon() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("square.json");
        fs::write(&path, "[[[0,0],[4,0],[4,4],[0,4]],[[1,1],[1,2],[2,2],[2,1]]]").unwrap();
        let p = load_polygon(&path).unwrap();
        assert_eq!(p.rings().len(), 2);
        assert_eq!(p.outer()[2], polylabel::Point::new(4.0, 4.0));
    }

    #[test]
    fn csv_groups_rows_by_ring_id() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poly.csv");
        fs::write(
            &path,
            "ring,x,y\n1,1,1\n0,0,0\n1,1,2\n0,4,0\n1,2,2\n0,4,4\n0,0,4\n1,2,1\n",
        )
        .unwrap();
        let coords = read_table(&path, TableKind::Csv).unwrap();
        assert_eq!(
            coords,
            vec![
                vec![[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 4.0]],
                vec![[1.0, 1.0], [1.0, 2.0], [2.0, 2.0], [2.0, 1.0]],
            ]
        );
    }

    #[test]
    fn frame_with_missing_value_is_rejected() {
        let df = df!(
            "ring" => [Some(0i64), Some(0), None],
            "x" => [0.0, 1.0, 1.0],
            "y" => [0.0, 0.0, 1.0],
        )
        .unwrap();
        let err = rings_from_frame(&df).unwrap_err();
        assert!(err.to_string().contains("row 2"));
    }

    #[test]
    fn bad_inputs_carry_context() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("poly.txt");
        fs::write(&txt, "").unwrap();
        assert!(load_polygon(&txt).is_err());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "[[[0,0],[1,").unwrap();
        let err = load_polygon(&broken).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));

        let tiny = dir.path().join("tiny.json");
        fs::write(&tiny, "[[[0,0],[1,1]]]").unwrap();
        let err = load_polygon(&tiny).unwrap_err();
        assert!(format!("{err:#}").contains("at least 3"));
    }

    #[test]
    fn checked_in_fixture_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/frame.json");
        let p = load_polygon(&path).unwrap();
        assert_eq!(p.rings().len(), 2);
        assert_eq!(p.holes()[0].len(), 4);
    }
}
