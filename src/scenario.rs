//! Scenario configuration: the reference path plus the initial aircraft
//! layout, loadable from a JSON file.
//!
//! Every field carries a default so a partial file works; the full default
//! reproduces the published example scenario (a single 90 m line at 100
//! degrees with the standard five-track / two-drag layout and a 10 degree
//! nose-gear angle).

use nalgebra::Vector2;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::constants::DEFAULT_SAMPLES_PER_SEGMENT;
use crate::error::PushbackError;
use crate::kinematics::PushbackInputs;
use crate::path_sampler::Segment;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Ordered reference-path segments.
    pub segments: Vec<Segment>,
    /// Sample points per segment.
    pub samples_per_segment: usize,
    /// Nose-gear angle in degrees, counterclockwise-positive.
    pub nose_gear_angle_deg: f64,
    /// Declared number of track points.
    pub track_count: usize,
    /// Declared number of drag points.
    pub drag_count: usize,
    /// Initial trace point position (x, y).
    pub trace_init: [f64; 2],
    /// Initial drag point positions.
    pub drag_init: Vec<[f64; 2]>,
    /// Initial track point positions.
    pub track_init: Vec<[f64; 2]>,
}

impl Default for Scenario {
    fn default() -> Self {
        let inputs = PushbackInputs::default();
        Self {
            segments: vec![Segment::Line {
                length: 90.0,
                angle: 100.0,
            }],
            samples_per_segment: DEFAULT_SAMPLES_PER_SEGMENT,
            nose_gear_angle_deg: inputs.nose_gear_angle_deg,
            track_count: inputs.track_count,
            drag_count: inputs.drag_count,
            trace_init: [inputs.trace_init.x, inputs.trace_init.y],
            drag_init: inputs.drag_init.iter().map(|p| [p.x, p.y]).collect(),
            track_init: inputs.track_init.iter().map(|p| [p.x, p.y]).collect(),
        }
    }
}

impl Scenario {
    /// Load a scenario from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, PushbackError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Build the propagator inputs described by this scenario.
    pub fn inputs(&self) -> PushbackInputs {
        PushbackInputs {
            track_count: self.track_count,
            drag_count: self.drag_count,
            trace_init: Vector2::new(self.trace_init[0], self.trace_init[1]),
            drag_init: self
                .drag_init
                .iter()
                .map(|p| Vector2::new(p[0], p[1]))
                .collect(),
            track_init: self
                .track_init
                .iter()
                .map(|p| Vector2::new(p[0], p[1]))
                .collect(),
            nose_gear_angle_deg: self.nose_gear_angle_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_scenario_is_consistent() {
        let scenario = Scenario::default();
        assert_eq!(scenario.segments.len(), 1);
        assert_eq!(scenario.samples_per_segment, 100);
        assert!(scenario.inputs().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let scenario: Scenario = serde_json::from_str(
            r#"{
                "segments": [
                    { "type": "line", "length": 42.11, "angle": 90.0 },
                    { "type": "arc", "radius": 42.11, "central_angle": -90.0, "is_left": false },
                    { "type": "line", "length": 42.11, "angle": 0.0 }
                ],
                "nose_gear_angle_deg": 0.0
            }"#,
        )
        .unwrap();

        assert_eq!(scenario.segments.len(), 3);
        assert_eq!(scenario.nose_gear_angle_deg, 0.0);
        // Untouched fields fall back to the example layout.
        assert_eq!(scenario.samples_per_segment, 100);
        assert_eq!(scenario.track_count, 5);
        assert_eq!(scenario.trace_init, [0.0, 17.17]);
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("scenario.json");
        let mut f = std::fs::File::create(&file).unwrap();
        write!(f, r#"{{ "samples_per_segment": 10 }}"#).unwrap();
        drop(f);

        let scenario = Scenario::from_json_file(&file).unwrap();
        assert_eq!(scenario.samples_per_segment, 10);
        assert_eq!(scenario.drag_count, 2);
    }

    #[test]
    fn test_invalid_json_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("broken.json");
        std::fs::write(&file, "{ not json").unwrap();

        assert!(matches!(
            Scenario::from_json_file(&file),
            Err(PushbackError::Config(_))
        ));
    }
}
