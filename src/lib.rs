//! # Pushback Engine
//!
//! Ground-towing kinematics for aircraft pushback operations: generates a
//! 2-D reference path from line/arc segment specifications, then propagates
//! rigid-body kinematics of the towed airframe along it, producing the
//! trajectories of the drive, trace, drag and track reference points.

// Re-export the main types and functions
pub use error::PushbackError;
pub use kinematics::{PushbackInputs, PushbackResult, PushbackSolver};
pub use path_sampler::{generate_path, Segment};
pub use scenario::Scenario;

// Module declarations
pub mod constants;
pub mod error;
pub mod kinematics;
pub mod path_io;
pub mod path_sampler;
pub mod scenario;
