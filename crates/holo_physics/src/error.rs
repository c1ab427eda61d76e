//! Error types for the collision system

use thiserror::Error;

/// Collision system errors
#[derive(Debug, Error)]
pub enum PhysicsError {
    /// No collider registered for the object
    #[error("object {0} has no collision body")]
    ObjectNotFound(u128),
}

/// Result type for collision operations
pub type Result<T> = std::result::Result<T, PhysicsError>;
