//! Rigid-body kinematics propagation of the towed airframe.
//!
//! The drive point (tug / nose-gear contact) follows an externally supplied
//! trajectory. The trace point is linked to it by a rigid bar of fixed
//! length; its heading is recovered at every step from the direction between
//! the current drive point and the previous trace point. Drag and track
//! points are fixed in the body frame spanned by that link, captured once as
//! polar offsets and replayed by rotation and translation.

use nalgebra::{Rotation2, Vector2};

use crate::constants::MIN_DIRECTION_NORM;
use crate::error::PushbackError;

/// Initial aircraft layout fed to the propagator.
///
/// All positions are world coordinates in meters at time index 0, before the
/// nose-gear correction is applied. The default reproduces the published
/// example layout: five track points, two drag points, the trace point
/// 17.17 m ahead of the drive point, and a 10 degree nose-gear angle.
#[derive(Debug, Clone)]
pub struct PushbackInputs {
    /// Declared number of track points; must match `track_init.len()`.
    pub track_count: usize,
    /// Declared number of drag points; must match `drag_init.len()`.
    pub drag_count: usize,
    /// Initial position of the trace point.
    pub trace_init: Vector2<f64>,
    /// Initial positions of the drag points.
    pub drag_init: Vec<Vector2<f64>>,
    /// Initial positions of the track points.
    pub track_init: Vec<Vector2<f64>>,
    /// Nose-gear angle in degrees, counterclockwise-positive. When non-zero,
    /// the whole initial layout is rotated about the drive point before the
    /// link length and body offsets are captured.
    pub nose_gear_angle_deg: f64,
}

impl Default for PushbackInputs {
    fn default() -> Self {
        Self {
            track_count: 5,
            drag_count: 2,
            trace_init: Vector2::new(0.0, 17.17),
            drag_init: vec![Vector2::new(2.86, 17.17), Vector2::new(-2.86, 17.17)],
            track_init: vec![
                Vector2::new(17.16, 22.48),
                Vector2::new(-17.16, 22.48),
                Vector2::new(7.18, 38.02),
                Vector2::new(-7.18, 38.02),
                Vector2::new(0.0, -4.09),
            ],
            nose_gear_angle_deg: 10.0,
        }
    }
}

impl PushbackInputs {
    /// Check the declared counts against the supplied initial positions.
    pub fn validate(&self) -> Result<(), PushbackError> {
        if self.drag_init.len() != self.drag_count {
            return Err(PushbackError::CountMismatch {
                name: "drag",
                declared: self.drag_count,
                supplied: self.drag_init.len(),
            });
        }
        if self.track_init.len() != self.track_count {
            return Err(PushbackError::CountMismatch {
                name: "track",
                declared: self.track_count,
                supplied: self.track_init.len(),
            });
        }
        Ok(())
    }
}

/// Fixed body-frame offset of an attached point, in polar form relative to
/// the drive-trace heading. Captured once from the initial configuration and
/// never mutated.
#[derive(Debug, Clone, Copy)]
struct BodyOffset {
    radius: f64,
    angle: f64,
}

impl BodyOffset {
    fn capture(point: Vector2<f64>, pivot: Vector2<f64>, theta: f64) -> Self {
        let delta = point - pivot;
        BodyOffset {
            radius: delta.norm(),
            angle: delta.y.atan2(delta.x) - theta,
        }
    }

    fn world(&self, pivot: Vector2<f64>, theta: f64) -> Vector2<f64> {
        let local = Vector2::new(
            self.radius * self.angle.cos(),
            self.radius * self.angle.sin(),
        );
        Rotation2::new(theta) * local + pivot
    }
}

/// Full propagation output, one entry per time index.
///
/// The caller owns this structure after the run; it is never mutated by the
/// engine again.
#[derive(Debug, Clone)]
pub struct PushbackResult {
    /// Drive point trajectory (copied from the input sequence).
    pub drive: Vec<Vector2<f64>>,
    /// Trace point trajectory.
    pub trace: Vec<Vector2<f64>>,
    /// Drag point trajectories; outer index = drag point, inner = time.
    pub drag: Vec<Vec<Vector2<f64>>>,
    /// Track point trajectories; outer index = track point, inner = time.
    pub track: Vec<Vec<Vector2<f64>>>,
    /// Midpoint of the drive-trace link at each time index.
    pub wing_center: Vec<Vector2<f64>>,
    /// Tail reference point at each time index.
    pub tail_center: Vec<Vector2<f64>>,
    /// Elementwise minima over drive, trace, wing and tail centers, taken
    /// over time indices >= 1 only. A single-sample run leaves these at
    /// positive infinity.
    pub min_vals: Vector2<f64>,
    /// Elementwise maxima, same coverage as `min_vals`.
    pub max_vals: Vector2<f64>,
    /// Rigid drive-trace link length captured at time index 0.
    pub link_length: f64,
}

/// Propagates the towed-body kinematics along a drive trajectory.
pub struct PushbackSolver {
    drive_sequence: Vec<Vector2<f64>>,
    inputs: PushbackInputs,
}

impl PushbackSolver {
    pub fn new(drive_sequence: Vec<Vector2<f64>>, inputs: PushbackInputs) -> Self {
        Self {
            drive_sequence,
            inputs,
        }
    }

    /// Run the propagation over the whole drive sequence.
    pub fn solve(&self) -> Result<PushbackResult, PushbackError> {
        self.inputs.validate()?;
        let n = self.drive_sequence.len();
        if n == 0 {
            return Err(PushbackError::EmptyDriveSequence);
        }
        let inputs = &self.inputs;

        let mut drive = Vec::with_capacity(n);
        drive.push(self.drive_sequence[0]);
        let mut trace = Vec::with_capacity(n);
        trace.push(inputs.trace_init);
        let mut drag: Vec<Vec<Vector2<f64>>> = inputs
            .drag_init
            .iter()
            .map(|p| {
                let mut series = Vec::with_capacity(n);
                series.push(*p);
                series
            })
            .collect();
        let mut track: Vec<Vec<Vector2<f64>>> = inputs
            .track_init
            .iter()
            .map(|p| {
                let mut series = Vec::with_capacity(n);
                series.push(*p);
                series
            })
            .collect();

        // Nose-gear correction: rotate the whole initial layout about the
        // drive point. The gate is an exact-zero comparison, matching the
        // input contract (zero means "no correction supplied").
        let nga_rad = inputs.nose_gear_angle_deg.to_radians();
        if nga_rad != 0.0 {
            let rotation = Rotation2::new(nga_rad);
            let pivot = drive[0];
            trace[0] = rotation * (trace[0] - pivot) + pivot;
            for series in drag.iter_mut().chain(track.iter_mut()) {
                series[0] = rotation * (series[0] - pivot) + pivot;
            }
        }

        let mut wing_center = Vec::with_capacity(n);
        let mut tail_center = Vec::with_capacity(n);
        wing_center.push((drive[0] + trace[0]) / 2.0);
        // Literal absolute-position formula from the source model. This is
        // not the drive + 1.5*L offset used for every later index; kept
        // as-is pending clarification of the intended tail geometry.
        tail_center.push(1.5 * (drive[0] + trace[0]));

        let delta = trace[0] - drive[0];
        let mut theta = delta.y.atan2(delta.x);
        let link_length = delta.norm();

        let drag_offsets: Vec<BodyOffset> = drag
            .iter()
            .map(|series| BodyOffset::capture(series[0], drive[0], theta))
            .collect();
        let track_offsets: Vec<BodyOffset> = track
            .iter()
            .map(|series| BodyOffset::capture(series[0], drive[0], theta))
            .collect();

        let mut min_vals = Vector2::new(f64::INFINITY, f64::INFINITY);
        let mut max_vals = Vector2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

        for i in 1..n {
            let drive_i = self.drive_sequence[i];
            drive.push(drive_i);

            // Recover the link heading from the previous trace point: the
            // model assumes rotation occurs about the drive contact only.
            let direction = trace[i - 1] - drive_i;
            if direction.norm() > MIN_DIRECTION_NORM {
                theta = direction.y.atan2(direction.x);
            }
            // Coincident points leave theta at the previous step's heading.

            let heading = Vector2::new(theta.cos(), theta.sin());
            let trace_i = drive_i + link_length * heading;
            trace.push(trace_i);

            for (series, offset) in drag.iter_mut().zip(&drag_offsets) {
                series.push(offset.world(drive_i, theta));
            }
            for (series, offset) in track.iter_mut().zip(&track_offsets) {
                series.push(offset.world(drive_i, theta));
            }

            let wing_i = drive_i + 0.5 * link_length * heading;
            let tail_i = drive_i + 1.5 * link_length * heading;
            wing_center.push(wing_i);
            tail_center.push(tail_i);

            for point in [drive_i, trace_i, wing_i, tail_i] {
                min_vals.x = min_vals.x.min(point.x);
                min_vals.y = min_vals.y.min(point.y);
                max_vals.x = max_vals.x.max(point.x);
                max_vals.y = max_vals.y.max(point.y);
            }
        }

        Ok(PushbackResult {
            drive,
            trace,
            drag,
            track,
            wing_center,
            tail_center,
            min_vals,
            max_vals,
            link_length,
        })
    }
}
