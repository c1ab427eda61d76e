//! Axis-aligned bounding boxes

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// The empty (inverted) box; expanding it with any point yields that point
    pub const EMPTY: Self = Self {
        min: Vec3::splat(f32::MAX),
        max: Vec3::splat(f32::MIN),
    };

    /// Create from min and max corners
    #[inline]
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Smallest box containing all of `points`; empty when the slice is empty
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut aabb = Self::EMPTY;
        for point in points {
            aabb = aabb.expand_to_include(point);
        }
        aabb
    }

    /// Grow to include a point
    #[inline]
    pub fn expand_to_include(self, point: Vec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Center point
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Full extents along each axis
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Largest of the three axis extents
    ///
    /// This is the quantity scale normalization works against: the widest
    /// footprint the geometry presents on any single axis.
    #[inline]
    pub fn max_extent(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// An inverted or never-expanded box is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Check if a point lies inside (inclusive)
    #[inline]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// The 8 corners of the box
    pub fn corners(&self) -> [Vec3; 8] {
        [
            Vec3::new(self.min.x, self.min.y, self.min.z),
            Vec3::new(self.max.x, self.min.y, self.min.z),
            Vec3::new(self.min.x, self.max.y, self.min.z),
            Vec3::new(self.max.x, self.max.y, self.min.z),
            Vec3::new(self.min.x, self.min.y, self.max.z),
            Vec3::new(self.max.x, self.min.y, self.max.z),
            Vec3::new(self.min.x, self.max.y, self.max.z),
            Vec3::new(self.max.x, self.max.y, self.max.z),
        ]
    }

    /// Transform by a matrix; the result is the axis-aligned hull of the
    /// transformed corners
    pub fn transform(&self, matrix: &Mat4) -> Self {
        let mut result = Self::EMPTY;
        for corner in self.corners() {
            result = result.expand_to_include(matrix.transform_point3(corner));
        }
        result
    }

    /// Scale uniformly about the origin
    #[inline]
    pub fn scaled_uniform(&self, factor: f32) -> Self {
        Self {
            min: self.min * factor,
            max: self.max * factor,
        }
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::EMPTY
    }
}
