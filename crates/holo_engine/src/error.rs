//! Error types for the engine

use crate::object::ObjectId;
use holo_scene::SceneError;
use thiserror::Error;

/// Engine-level errors
#[derive(Debug, Error)]
pub enum EngineError {
    /// External decode failed; placement is aborted with no partial object
    #[error("asset load failed: {0}")]
    AssetLoadFailure(String),

    /// Placement requested against an anchor the tracker has never observed
    #[error("no resolvable anchor for placement")]
    AnchorUnavailable,

    /// Merged geometry cannot be normalized
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// No such placed object
    #[error("object {0:?} not found")]
    ObjectNotFound(ObjectId),

    /// Background load requested with no loader configured
    #[error("no asset loader configured")]
    LoaderUnavailable,
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
