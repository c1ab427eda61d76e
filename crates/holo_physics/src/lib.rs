//! # holo_physics - Collision representation for placed objects
//!
//! Placed objects carry a static collision body so hit-testing and contact
//! queries agree with what is rendered. This crate owns:
//! - [`CollisionShape`]: the shape built from an object's current (post-
//!   scale) visual geometry
//! - [`CollisionWorld`]: a Rapier collider set with replace-in-place sync,
//!   keyed by object id
//!
//! Simulation (integration, contact resolution) is not run here; the world
//! only holds static colliders for spatial queries.

pub mod error;
pub mod shape;
pub mod world;

pub use error::{PhysicsError, Result};
pub use shape::CollisionShape;
pub use world::{ColliderHandle, CollisionWorld};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::error::{PhysicsError, Result};
    pub use crate::shape::CollisionShape;
    pub use crate::world::{ColliderHandle, CollisionWorld};
}
