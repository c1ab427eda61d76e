//! View-frustum extraction and containment tests

use crate::bounds::Aabb;
use glam::{Mat4, Vec3};

/// Camera view frustum as six inward-facing planes
#[derive(Clone, Copy, Debug)]
pub struct Frustum {
    /// Planes: left, right, bottom, top, near, far.
    /// Each plane is (normal.x, normal.y, normal.z, distance).
    pub planes: [[f32; 4]; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix
    /// (Gribb-Hartmann), normalized so plane distances are world units
    pub fn from_matrix(view_proj: &Mat4) -> Self {
        let m = view_proj.to_cols_array();

        let planes = [
            // Left
            [m[3] + m[0], m[7] + m[4], m[11] + m[8], m[15] + m[12]],
            // Right
            [m[3] - m[0], m[7] - m[4], m[11] - m[8], m[15] - m[12]],
            // Bottom
            [m[3] + m[1], m[7] + m[5], m[11] + m[9], m[15] + m[13]],
            // Top
            [m[3] - m[1], m[7] - m[5], m[11] - m[9], m[15] - m[13]],
            // Near
            [m[3] + m[2], m[7] + m[6], m[11] + m[10], m[15] + m[14]],
            // Far
            [m[3] - m[2], m[7] - m[6], m[11] - m[10], m[15] - m[14]],
        ];

        let mut frustum = Self { planes };
        for plane in &mut frustum.planes {
            let len = (plane[0] * plane[0] + plane[1] * plane[1] + plane[2] * plane[2]).sqrt();
            if len > 0.0 {
                for component in plane.iter_mut() {
                    *component /= len;
                }
            }
        }

        frustum
    }

    /// Build from a camera pose looking down its local -Z axis
    pub fn from_camera(
        view: &Mat4,
        fov_y_radians: f32,
        aspect: f32,
        z_near: f32,
        z_far: f32,
    ) -> Self {
        let projection = Mat4::perspective_rh(fov_y_radians, aspect, z_near, z_far);
        Self::from_matrix(&(projection * *view))
    }

    /// Test whether a world point lies inside the frustum
    pub fn contains_point(&self, point: Vec3) -> bool {
        for plane in &self.planes {
            let dist = plane[0] * point.x + plane[1] * point.y + plane[2] * point.z + plane[3];
            if dist < 0.0 {
                return false;
            }
        }
        true
    }

    /// Test whether an AABB at least partially overlaps the frustum
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        for plane in &self.planes {
            // Positive vertex: the corner furthest along the plane normal
            let px = if plane[0] >= 0.0 { aabb.max.x } else { aabb.min.x };
            let py = if plane[1] >= 0.0 { aabb.max.y } else { aabb.min.y };
            let pz = if plane[2] >= 0.0 { aabb.max.z } else { aabb.min.z };

            let dist = plane[0] * px + plane[1] * py + plane[2] * pz + plane[3];
            if dist < 0.0 {
                return false;
            }
        }
        true
    }
}
