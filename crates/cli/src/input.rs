use anyhow::{bail, Context, Result};
use hull2::Point2;
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Read a point set from `path`.
///
/// `.csv` files need numeric `x` and `y` columns; `.json` files hold an array
/// of `[x, y]` pairs. Every coordinate must be present and finite.
pub fn read_points(path: &Path) -> Result<Vec<Point2>> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => read_csv(path),
        Some(ext) if ext.eq_ignore_ascii_case("json") => read_json(path),
        _ => bail!(
            "unsupported input {} (expected .csv or .json)",
            path.display()
        ),
    }
}

fn read_csv(path: &Path) -> Result<Vec<Point2>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.select([col("x"), col("y")]).collect())
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = float_column(&df, "x")?;
    let ys = float_column(&df, "y")?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => checked(row, x, y),
            _ => bail!("row {row}: missing coordinate"),
        })
        .collect()
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let series = df
        .column(name)?
        .cast(&DataType::Float64)
        .with_context(|| format!("column `{name}` is not numeric"))?;
    Ok(series.f64()?.into_iter().collect())
}

fn read_json(path: &Path) -> Result<Vec<Point2>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let pairs: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    pairs
        .into_iter()
        .enumerate()
        .map(|(row, [x, y])| checked(row, x, y))
        .collect()
}

fn checked(row: usize, x: f64, y: f64) -> Result<Point2> {
    if !(x.is_finite() && y.is_finite()) {
        bail!("row {row}: non-finite coordinate ({x}, {y})");
    }
    Ok(Point2::new(x, y))
}
