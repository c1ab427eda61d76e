//! Poses: position + orientation

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A rigid pose in world space
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Pose {
    /// Identity pose at the origin
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        orientation: Quat::IDENTITY,
    };

    /// Create a new pose
    #[inline]
    pub const fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose with the given position and identity orientation
    #[inline]
    pub const fn from_position(position: Vec3) -> Self {
        Self {
            position,
            orientation: Quat::IDENTITY,
        }
    }

    /// Convert to a transformation matrix
    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// Map a point from pose-local space into world space
    #[inline]
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.orientation * point + self.position
    }

    /// Map a world-space point into pose-local space
    #[inline]
    pub fn inverse_transform_point(&self, point: Vec3) -> Vec3 {
        self.orientation.inverse() * (point - self.position)
    }

    /// Interpolate between two poses
    pub fn lerp(&self, other: &Pose, t: f32) -> Pose {
        Pose {
            position: self.position.lerp(other.position, t),
            orientation: self.orientation.slerp(other.orientation, t),
        }
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
