//! Point-set and event-script readers.
//!
//! - Points: `.csv` / `.parquet` tables with `x`, `y` columns (polars), or
//!   JSON arrays of `[x, y]` pairs / `{"x": .., "y": ..}` objects.
//! - Events: JSON lines, one `{"kind": "begin"|"update"|"end", ...}` per line.

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use touchgeom::geom::Point;
use touchgeom::touch::{TouchEvent, TouchId};

#[derive(Deserialize)]
#[serde(untagged)]
enum PointRow {
    Pair([f64; 2]),
    Named { x: f64, y: f64 },
}

impl From<PointRow> for Point {
    fn from(row: PointRow) -> Self {
        match row {
            PointRow::Pair([x, y]) | PointRow::Named { x, y } => Point::new(x, y),
        }
    }
}

#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum EventLine {
    Begin { id: u32, x: f64, y: f64 },
    Update { id: u32, x: f64, y: f64 },
    End { id: u32 },
}

impl From<EventLine> for TouchEvent {
    fn from(line: EventLine) -> Self {
        match line {
            EventLine::Begin { id, x, y } => TouchEvent::Begin { id: TouchId(id), x, y },
            EventLine::Update { id, x, y } => TouchEvent::Update { id: TouchId(id), x, y },
            EventLine::End { id } => TouchEvent::End { id: TouchId(id) },
        }
    }
}

/// Read a point set, dispatching on the file extension (JSON otherwise).
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match ext {
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            points_from_frame(lf).with_context(|| format!("reading {}", path.display()))
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            points_from_frame(lf).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            parse_points_json(&text).with_context(|| format!("parsing {}", path.display()))
        }
    }
}

pub fn parse_points_json(text: &str) -> Result<Vec<Point>> {
    let rows: Vec<PointRow> = serde_json::from_str(text)?;
    Ok(rows.into_iter().map(Point::from).collect())
}

fn points_from_frame(lf: LazyFrame) -> Result<Vec<Point>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    let mut out = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        let Some(row) = df.get(i) else {
            bail!("row {i} out of range");
        };
        match (&row[0], &row[1]) {
            (AnyValue::Float64(x), AnyValue::Float64(y)) => out.push(Point::new(*x, *y)),
            _ => bail!("row {i}: x and y must both be present"),
        }
    }
    Ok(out)
}

/// Read a JSON-lines event script; blank lines are skipped.
pub fn read_events(path: &Path) -> Result<Vec<TouchEvent>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    parse_events(&text).with_context(|| format!("parsing {}", path.display()))
}

pub fn parse_events(text: &str) -> Result<Vec<TouchEvent>> {
    let mut out = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let ev: EventLine =
            serde_json::from_str(line).with_context(|| format!("line {}", lineno + 1))?;
        out.push(ev.into());
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_pairs_and_objects() {
        let pts = parse_points_json(r#"[[1, 2], {"x": 3.5, "y": -1}]"#).unwrap();
        assert_eq!(pts, vec![Point::new(1.0, 2.0), Point::new(3.5, -1.0)]);
        assert!(parse_points_json(r#"[[1]]"#).is_err());
    }

    #[test]
    fn events_skip_blank_lines_and_report_line_numbers() {
        let text = r#"{"kind": "begin", "id": 1, "x": 10, "y": 20}

{"kind": "update", "id": 1, "x": 11, "y": 20}
{"kind": "end", "id": 1}
"#;
        let evs = parse_events(text).unwrap();
        assert_eq!(evs.len(), 3);
        assert_eq!(evs[2], TouchEvent::End { id: TouchId(1) });

        let err = parse_events("{\"kind\": \"begin\", \"id\": 1, \"x\": 0, \"y\": 0}\n{\"kind\": \"lift\"}")
            .unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn csv_with_integer_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n4,2\n0,2\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(pts.len(), 4);
        assert_eq!(pts[2], Point::new(4.0, 2.0));
    }

    #[test]
    fn json_file_by_default_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[0, 0], [2, 2]]").unwrap();
        assert_eq!(read_points(&path).unwrap().len(), 2);
    }
}
