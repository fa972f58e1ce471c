//! Tabular views of a point set: formatted rows for display and CSV for download.

use super::ExportError;
use crate::types::PointSet;
use serde::{Deserialize, Serialize};

/// One display row with coordinates formatted to 4 decimals plus unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    /// 1-based point index
    pub index: usize,
    /// Formatted x, e.g. `5.0000 m`
    pub x: String,
    /// Formatted y, e.g. `-0.0000 m`
    pub y: String,
}

/// A raw CSV record, `index,x,y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CsvRecord {
    /// 1-based point index
    pub index: usize,
    /// Unformatted x
    pub x: f64,
    /// Unformatted y
    pub y: f64,
}

/// Formats every point for the on-screen table.
pub fn format_rows(set: &PointSet, unit: &str) -> Vec<TableRow> {
    let unit = unit.trim();
    let fmt = |v: f64| {
        if unit.is_empty() {
            format!("{:.4}", v)
        } else {
            format!("{:.4} {}", v, unit)
        }
    };
    set.points()
        .iter()
        .map(|p| TableRow {
            index: p.index,
            x: fmt(p.x),
            y: fmt(p.y),
        })
        .collect()
}

/// Serializes the point set as CSV with header `index,x,y`.
pub fn write_csv(set: &PointSet) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for p in set.points() {
        writer.serialize(CsvRecord {
            index: p.index,
            x: p.x,
            y: p.y,
        })?;
    }
    writer.flush()?;
    writer
        .into_inner()
        .map_err(|e| ExportError::Io(std::io::Error::new(e.error().kind(), e.error().to_string())))
}

/// Parses CSV produced by [`write_csv`] back into records.
pub fn parse_csv(data: &[u8]) -> Result<Vec<CsvRecord>, ExportError> {
    let mut reader = csv::Reader::from_reader(data);
    let records = reader.deserialize().collect::<Result<Vec<CsvRecord>, _>>()?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    #[test]
    fn rows_use_four_decimals_and_unit() {
        let set = generate((0.0, 0.0), 5.0, 4, 0.0).unwrap();
        let rows = format_rows(&set, "m");
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].index, 1);
        assert_eq!(rows[0].x, "5.0000 m");
        assert_eq!(rows[0].y, "0.0000 m");
        assert_eq!(rows[2].x, "-5.0000 m");
    }

    #[test]
    fn rows_without_unit_have_no_trailing_space() {
        let set = generate((1.23456, 0.0), 0.0, 1, 0.0).unwrap();
        let rows = format_rows(&set, " ");
        assert_eq!(rows[0].x, "1.2346");
    }

    #[test]
    fn csv_has_header_and_one_record_per_point() {
        let set = generate((0.0, 0.0), 1.0, 3, 0.0).unwrap();
        let csv = String::from_utf8(write_csv(&set).unwrap()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "index,x,y");
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("1,1.0,"));
    }

    #[test]
    fn csv_round_trip_reproduces_coordinates() {
        let set = generate((2.5, -7.125), 3.3, 11, 17.0).unwrap();
        let bytes = write_csv(&set).unwrap();
        let records = parse_csv(&bytes).unwrap();
        assert_eq!(records.len(), set.len());
        for (record, point) in records.iter().zip(set.points()) {
            assert_eq!(record.index, point.index);
            assert!((record.x - point.x).abs() < 1e-12);
            assert!((record.y - point.y).abs() < 1e-12);
        }
    }

    #[test]
    fn malformed_csv_is_an_error() {
        let err = parse_csv(b"index,x,y\n1,abc,2\n").unwrap_err();
        assert!(matches!(err, ExportError::Csv(_)));
    }
}
