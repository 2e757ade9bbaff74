//! Point files: CSV (or Parquet) with float columns `x` and `y`.

use anyhow::{bail, Context, Result};
use hull2d::Pt2;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Read all rows of columns `x`, `y`. Missing columns or null cells are errors.
pub fn read_points(path: &Path) -> Result<Vec<Pt2>> {
    let lf = if path.extension().is_some_and(|e| e == "parquet") {
        LazyFrame::scan_parquet(path, ScanArgsParquet::default())
    } else {
        LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(100))
            .finish()
    }
    .with_context(|| format!("opening {}", path.display()))?;
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns x, y from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut pts = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => pts.push(Pt2::new(x, y)),
            _ => bail!("{}: row {row} has an empty coordinate", path.display()),
        }
    }
    tracing::info!(rows = pts.len(), path = %path.display(), "read_points");
    Ok(pts)
}

/// Write points as CSV with header `x,y`.
pub fn write_points(path: &Path, pts: &[Pt2]) -> Result<()> {
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    ensure_parent(path)?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn csv_roundtrip_keeps_coordinates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/pts.csv");
        let pts = vec![Pt2::new(0.5, -1.25), Pt2::new(3.0, 4.0), Pt2::new(-2.0, 0.0)];
        write_points(&path, &pts).unwrap();
        assert_eq!(read_points(&path).unwrap(), pts);
    }

    #[test]
    fn integer_columns_are_cast() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ints.csv");
        fs::write(&path, "x,y\n0,0\n2,0\n1,3\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts[2], Pt2::new(1.0, 3.0));
    }

    #[test]
    fn missing_column_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        fs::write(&path, "x,z\n0,0\n1,1\n").unwrap();
        assert!(read_points(&path).is_err());
    }
}
