//! # holo_math - Spatial math for the Holo AR engine
//!
//! Small geometry layer on top of [`glam`]:
//! - Axis-aligned bounding boxes
//! - View-frustum extraction and point/box tests
//! - Poses (position + orientation)
//! - Planar bearing math for directional indicators

pub mod bounds;
pub mod frustum;
pub mod pose;

pub use bounds::Aabb;
pub use frustum::Frustum;
pub use pose::Pose;

pub use glam::{Mat4, Quat, Vec2, Vec3};

use core::f32::consts::FRAC_PI_2;

/// Planar bearing from one point toward another.
///
/// Uses the x/y components of the relative vector and offsets the result by
/// -pi/2 so that a bearing of 0 means "straight up". This is the roll angle
/// applied to a screen-space directional marker.
pub fn bearing_to(from: Vec3, to: Vec3) -> f32 {
    let direction = to - from;
    direction.y.atan2(direction.x) - FRAC_PI_2
}

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::{bearing_to, Aabb, Frustum, Pose};
    pub use glam::{Mat4, Quat, Vec2, Vec3};
}
