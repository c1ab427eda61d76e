//! Error types for scene operations

use thiserror::Error;

/// Scene and geometry errors
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    /// Geometry with no measurable extent; normalization would produce a
    /// zero or infinite scale factor
    #[error("degenerate geometry: bounding box has no measurable extent")]
    DegenerateGeometry,
}

/// Result type for scene operations
pub type Result<T> = core::result::Result<T, SceneError>;
