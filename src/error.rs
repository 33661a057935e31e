//! Error types for path generation and kinematics propagation.

use thiserror::Error;

/// Errors surfaced by the pushback engine.
///
/// All computation is deterministic and in-memory; none of these conditions
/// are transient, so there is no retry path anywhere.
#[derive(Debug, Error)]
pub enum PushbackError {
    /// Malformed caller input (e.g. non-finite coordinates in a loaded path).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Declared point count does not match the supplied initial positions.
    #[error("{name} count mismatch: declared {declared}, got {supplied} initial positions")]
    CountMismatch {
        /// Which point group mismatched ("drag" or "track").
        name: &'static str,
        /// Count declared by the caller.
        declared: usize,
        /// Number of initial positions actually supplied.
        supplied: usize,
    },

    /// The drive trajectory must contain at least one sample.
    #[error("drive sequence is empty")]
    EmptyDriveSequence,

    /// Filesystem failure at the persistence boundary.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed or unreadable CSV path data.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Unparseable scenario configuration.
    #[error("scenario config error: {0}")]
    Config(#[from] serde_json::Error),
}
