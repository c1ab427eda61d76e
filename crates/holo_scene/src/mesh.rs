//! Mesh buffers in the decoder's hand-over shape
//!
//! A mesh fragment is an ordered set of per-attribute vertex buffers plus an
//! ordered set of index buffers, the same split external decoders produce.
//! Merging keeps this shape: a [`MergedDrawable`] is simply the two
//! sequences concatenated across fragments.

use holo_math::Aabb;
use serde::{Deserialize, Serialize};

/// What a vertex-attribute buffer carries
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeSemantic {
    Position,
    Normal,
    /// Texture coordinates; the z component of each entry is unused and zero
    TexCoord,
}

/// One vertex-attribute buffer of a mesh fragment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeBuffer {
    pub semantic: AttributeSemantic,
    pub data: Vec<[f32; 3]>,
}

impl AttributeBuffer {
    /// Position buffer from raw points
    pub fn positions(data: Vec<[f32; 3]>) -> Self {
        Self {
            semantic: AttributeSemantic::Position,
            data,
        }
    }

    /// Normal buffer from raw vectors
    pub fn normals(data: Vec<[f32; 3]>) -> Self {
        Self {
            semantic: AttributeSemantic::Normal,
            data,
        }
    }
}

/// Primitive topology of an index buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveType {
    Triangles,
    Lines,
    Points,
}

/// One index buffer of a mesh fragment
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexBuffer {
    pub primitive: PrimitiveType,
    pub indices: Vec<u32>,
}

impl IndexBuffer {
    /// Triangle-list index buffer
    pub fn triangles(indices: Vec<u32>) -> Self {
        Self {
            primitive: PrimitiveType::Triangles,
            indices,
        }
    }
}

/// Mesh data carried by a single scene node
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub attributes: Vec<AttributeBuffer>,
    pub elements: Vec<IndexBuffer>,
}

impl MeshData {
    /// Convenience constructor for a triangle mesh with positions only
    pub fn from_positions(positions: Vec<[f32; 3]>, indices: Vec<u32>) -> Self {
        Self {
            attributes: vec![AttributeBuffer::positions(positions)],
            elements: vec![IndexBuffer::triangles(indices)],
        }
    }
}

/// Flattened geometry: every fragment of an asset concatenated into one
/// drawable unit
///
/// Invariant: a drawable with zero attribute buffers or zero index buffers
/// is invalid; [`crate::merge`] never produces one (it reports merge failure
/// instead, and the caller keeps the unmerged node tree).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MergedDrawable {
    pub attributes: Vec<AttributeBuffer>,
    pub elements: Vec<IndexBuffer>,
}

impl MergedDrawable {
    /// Iterate every position in every Position-semantic buffer
    pub fn positions(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.attributes
            .iter()
            .filter(|buffer| buffer.semantic == AttributeSemantic::Position)
            .flat_map(|buffer| buffer.data.iter().copied())
    }

    /// Total number of position entries across all fragments
    pub fn position_count(&self) -> usize {
        self.attributes
            .iter()
            .filter(|buffer| buffer.semantic == AttributeSemantic::Position)
            .map(|buffer| buffer.data.len())
            .sum()
    }

    /// Axis-aligned bounding box of all positions, in the drawable's local
    /// space
    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_points(self.positions().map(glam::Vec3::from))
    }

    /// Triangle index triples across all triangle-list element buffers.
    ///
    /// Indices are returned as stored: every index buffer must already
    /// address the concatenated position sequence, which [`crate::merge`]
    /// guarantees by rebasing each fragment's buffers as it appends them.
    /// Trailing indices that do not fill a full triple are dropped.
    pub fn triangles(&self) -> Vec<[u32; 3]> {
        self.elements
            .iter()
            .filter(|buffer| buffer.primitive == PrimitiveType::Triangles)
            .flat_map(|buffer| buffer.indices.chunks_exact(3))
            .map(|triple| [triple[0], triple[1], triple[2]])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_quad() -> MeshData {
        MeshData::from_positions(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn bounding_box_covers_positions() {
        let drawable = MergedDrawable {
            attributes: unit_quad().attributes,
            elements: unit_quad().elements,
        };
        let aabb = drawable.bounding_box();
        assert_relative_eq!(aabb.max_extent(), 1.0);
        assert_eq!(drawable.position_count(), 4);
    }

    #[test]
    fn element_buffers_may_share_one_position_buffer() {
        // A double-sided triangle: two index buffers over the same 3 verts
        let drawable = MergedDrawable {
            attributes: vec![AttributeBuffer::positions(vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
            ])],
            elements: vec![
                IndexBuffer::triangles(vec![0, 1, 2]),
                IndexBuffer::triangles(vec![0, 2, 1]),
            ],
        };

        let triangles = drawable.triangles();
        assert_eq!(triangles, vec![[0, 1, 2], [0, 2, 1]]);
    }

    #[test]
    fn non_triangle_buffers_are_skipped() {
        let drawable = MergedDrawable {
            attributes: vec![AttributeBuffer::positions(vec![[0.0; 3]; 3])],
            elements: vec![
                IndexBuffer {
                    primitive: PrimitiveType::Lines,
                    indices: vec![0, 1, 1, 2],
                },
                IndexBuffer::triangles(vec![0, 1, 2]),
            ],
        };
        assert_eq!(drawable.triangles(), vec![[0, 1, 2]]);
    }

    #[test]
    fn partial_triple_is_dropped() {
        let drawable = MergedDrawable {
            attributes: vec![AttributeBuffer::positions(vec![[0.0; 3]; 4])],
            elements: vec![IndexBuffer::triangles(vec![0, 1, 2, 3])],
        };
        assert_eq!(drawable.triangles().len(), 1);
    }
}
