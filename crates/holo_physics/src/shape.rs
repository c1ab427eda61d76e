//! Collision shape types

use holo_scene::MergedDrawable;
use log::warn;
use rapier3d::prelude as rapier;
use serde::{Deserialize, Serialize};

/// Collision shape of a placed object
///
/// A closed set: placed objects are either approximated by their bounding
/// box or carry an exact triangle mesh of their scaled geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CollisionShape {
    /// Box with half-extents
    Cuboid { half_extents: [f32; 3] },
    /// Triangle mesh (static only)
    TriMesh {
        vertices: Vec<[f32; 3]>,
        indices: Vec<[u32; 3]>,
    },
}

impl CollisionShape {
    /// Create a box shape from half-extents
    pub fn cuboid(hx: f32, hy: f32, hz: f32) -> Self {
        Self::Cuboid {
            half_extents: [hx, hy, hz],
        }
    }

    /// Build a triangle-mesh shape from a drawable's current visual
    /// geometry with the object's uniform scale already applied.
    ///
    /// Triangles referencing a vertex past the position sequence are
    /// dropped; a buggy decoder must not be able to push an invalid
    /// trimesh into the collision world. Returns `None` when the drawable
    /// has no positions or no complete in-range triangles; such an object
    /// gets no collision body at all.
    pub fn from_drawable(drawable: &MergedDrawable, scale: f32) -> Option<Self> {
        let vertices: Vec<[f32; 3]> = drawable
            .positions()
            .map(|[x, y, z]| [x * scale, y * scale, z * scale])
            .collect();

        let limit = vertices.len() as u32;
        let mut indices = drawable.triangles();
        let total = indices.len();
        indices.retain(|triple| triple.iter().all(|&index| index < limit));
        if indices.len() < total {
            warn!(
                "dropped {} of {} triangles with out-of-range indices",
                total - indices.len(),
                total
            );
        }

        if vertices.is_empty() || indices.is_empty() {
            return None;
        }

        Some(Self::TriMesh { vertices, indices })
    }

    /// Build a Rapier shared shape
    pub(crate) fn to_rapier(&self) -> rapier::SharedShape {
        match self {
            Self::Cuboid { half_extents } => {
                rapier::SharedShape::cuboid(half_extents[0], half_extents[1], half_extents[2])
            }
            Self::TriMesh { vertices, indices } => {
                let points: Vec<_> = vertices
                    .iter()
                    .map(|v| rapier::Point::new(v[0], v[1], v[2]))
                    .collect();
                rapier::SharedShape::trimesh(points, indices.clone())
            }
        }
    }
}
