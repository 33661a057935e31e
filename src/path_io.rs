//! CSV persistence for the reference path.
//!
//! The on-disk format is a two-column table with an `X,Y` header row, one
//! waypoint per row, values in meters. Waypoints are rounded to 4 decimal
//! places at generation time, so the save -> load round trip is lossless.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PushbackError;

#[derive(Debug, Serialize, Deserialize)]
struct PathRecord {
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
}

/// Write a waypoint sequence to a CSV file.
pub fn save_path<P: AsRef<Path>>(path: P, points: &[Vector2<f64>]) -> Result<(), PushbackError> {
    let mut writer = csv::Writer::from_path(path)?;
    for point in points {
        writer.serialize(PathRecord {
            x: point.x,
            y: point.y,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Read a waypoint sequence back from a CSV file.
///
/// Garbled rows surface as [`PushbackError::Csv`]; rows that parse but carry
/// non-finite values are rejected as invalid input before they can reach the
/// propagator.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Vec<Vector2<f64>>, PushbackError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut points = Vec::new();
    for record in reader.deserialize() {
        let record: PathRecord = record?;
        if !record.x.is_finite() || !record.y.is_finite() {
            return Err(PushbackError::InvalidInput(format!(
                "non-finite waypoint at row {}",
                points.len() + 1
            )));
        }
        points.push(Vector2::new(record.x, record.y));
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path_sampler::{generate_path, Segment};
    use std::io::Write;

    #[test]
    fn test_round_trip_is_lossless() {
        let segments = vec![
            Segment::Line {
                length: 42.11,
                angle: 90.0,
            },
            Segment::Arc {
                radius: 42.11,
                central_angle: -90.0,
                is_left: false,
            },
        ];
        let points = generate_path(&segments, 25);

        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("reference_path_data.csv");
        save_path(&file, &points).unwrap();
        let reloaded = load_path(&file).unwrap();

        assert_eq!(points.len(), reloaded.len());
        for (a, b) in points.iter().zip(&reloaded) {
            assert_eq!(a, b, "rounded waypoints must survive the round trip");
        }
    }

    #[test]
    fn test_header_row_is_x_y() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("path.csv");
        save_path(&file, &[Vector2::new(1.5, -2.25)]).unwrap();

        let contents = std::fs::read_to_string(&file).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("X,Y"));
        assert_eq!(lines.next(), Some("1.5,-2.25"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does_not_exist.csv");
        assert!(load_path(&missing).is_err());
    }

    #[test]
    fn test_garbled_rows_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("garbled.csv");
        let mut f = std::fs::File::create(&file).unwrap();
        writeln!(f, "X,Y").unwrap();
        writeln!(f, "1.0,not-a-number").unwrap();
        drop(f);

        assert!(matches!(load_path(&file), Err(PushbackError::Csv(_))));
    }

    #[test]
    fn test_empty_table_loads_as_empty_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("empty.csv");
        save_path(&file, &[]).unwrap();
        let points = load_path(&file).unwrap();
        assert!(points.is_empty());
    }
}
