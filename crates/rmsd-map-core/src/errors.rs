//! Error types for path projection.

use thiserror::Error;

/// Error type for all path-ordering operations.
///
/// The projector is pure and deterministic, so there are exactly two
/// failure modes and both are detected eagerly, before any geometry is
/// computed. Neither is transient; callers should treat them as input
/// errors, not retry conditions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// Structural problem with the path definition: fewer than two anchor
    /// points, or two identical consecutive anchors (a zero-length
    /// segment). Degenerate segments are rejected up front rather than
    /// skipped, so arc-length positions stay well-defined.
    #[error("invalid polyline: {0}")]
    InvalidPolyline(String),

    /// A non-finite coordinate (NaN or ±infinity) anywhere in either the
    /// polyline anchors or the point cloud.
    #[error("invalid point: {0}")]
    InvalidPoint(String),
}

impl PathError {
    /// Creates a polyline-structure error.
    pub fn polyline(message: impl Into<String>) -> Self {
        PathError::InvalidPolyline(message.into())
    }

    /// Creates a non-finite-coordinate error.
    pub fn point(message: impl Into<String>) -> Self {
        PathError::InvalidPoint(message.into())
    }
}

/// Result type alias for path-ordering operations.
pub type Result<T> = std::result::Result<T, PathError>;
