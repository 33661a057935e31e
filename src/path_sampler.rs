//! Reference path generation from line and arc segment specifications.
//!
//! The sampler keeps a running cursor (position + heading) and converts an
//! ordered list of segments into one dense waypoint sequence. Line segments
//! specify an absolute direction and override the cursor heading; arcs sweep
//! relative to the heading left behind by the previous segment.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

use crate::constants::COORD_ROUND_FACTOR;

/// A single reference-path segment specification.
///
/// Angles are in degrees at this boundary, measured counterclockwise from
/// east (+x). The JSON form keeps the lowercase tags of the original tool
/// (`"line"`, `"arc"`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Segment {
    /// Straight segment of the given length along an absolute direction.
    Line { length: f64, angle: f64 },
    /// Circular arc starting tangent to the current heading. A negative
    /// central angle sweeps the parameter backwards; `is_left` selects which
    /// side of the path the arc center lies on.
    Arc {
        radius: f64,
        central_angle: f64,
        is_left: bool,
    },
}

/// Generate a dense waypoint sequence from an ordered list of segments.
///
/// The cursor starts at the origin with heading 0. Each segment contributes
/// `samples_per_segment + 1` evenly spaced points; the first point of every
/// non-initial segment is dropped so segment joints are seamless. All
/// coordinates are rounded to 4 decimal places.
///
/// An empty segment list yields an empty sequence. A zero central angle on
/// an arc yields coincident samples, which is degenerate but not an error.
pub fn generate_path(segments: &[Segment], samples_per_segment: usize) -> Vec<Vector2<f64>> {
    let mut waypoints: Vec<Vector2<f64>> = Vec::new();
    let mut position = Vector2::new(0.0, 0.0);
    let mut heading = 0.0_f64;
    let steps = samples_per_segment + 1;
    let denom = samples_per_segment.max(1) as f64;

    for (index, segment) in segments.iter().enumerate() {
        let samples = match *segment {
            Segment::Line { length, angle } => {
                let angle_rad = angle.to_radians();
                let direction = Vector2::new(angle_rad.cos(), angle_rad.sin());
                let end = position + length * direction;

                let mut samples = Vec::with_capacity(steps);
                for k in 0..steps {
                    let t = k as f64 / denom;
                    samples.push(position + t * (end - position));
                }
                position = end;
                heading = angle_rad;
                samples
            }
            Segment::Arc {
                radius,
                central_angle,
                is_left,
            } => {
                let sign = if is_left { 1.0 } else { -1.0 };
                let start_angle = heading;
                let end_angle = heading + central_angle.to_radians();
                let center = position
                    + radius
                        * Vector2::new(
                            (start_angle + sign * FRAC_PI_2).cos(),
                            (start_angle + sign * FRAC_PI_2).sin(),
                        );

                let mut samples = Vec::with_capacity(steps);
                for k in 0..steps {
                    let t = k as f64 / denom;
                    let theta = start_angle + t * (end_angle - start_angle);
                    samples.push(
                        center
                            + radius
                                * Vector2::new(
                                    (theta - sign * FRAC_PI_2).cos(),
                                    (theta - sign * FRAC_PI_2).sin(),
                                ),
                    );
                }
                position = samples[steps - 1];
                heading = end_angle;
                samples
            }
        };

        // Drop the duplicated joint point on every segment after the first.
        let skip = if index > 0 { 1 } else { 0 };
        waypoints.extend(samples.into_iter().skip(skip));
    }

    for point in &mut waypoints {
        point.x = round_coord(point.x);
        point.y = round_coord(point.y);
    }

    waypoints
}

fn round_coord(value: f64) -> f64 {
    (value * COORD_ROUND_FACTOR).round() / COORD_ROUND_FACTOR
}
