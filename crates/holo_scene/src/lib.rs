//! # holo_scene - Scene graph and drawable geometry
//!
//! The loader-facing side of the engine:
//! - Flat node arena with integer handles (no recursion, no ownership cycles)
//! - Per-node mesh buffers in the shape external decoders hand them over
//! - Geometry merging: many mesh fragments collapsed into one drawable
//! - Scale normalization against a target bounding extent

pub mod arena;
pub mod error;
pub mod merge;
pub mod mesh;
pub mod normalize;

pub use arena::{Node, NodeArena, NodeId};
pub use error::{Result, SceneError};
pub use merge::merge;
pub use mesh::{AttributeBuffer, AttributeSemantic, IndexBuffer, MergedDrawable, MeshData, PrimitiveType};
pub use normalize::normalize;

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::arena::{Node, NodeArena, NodeId};
    pub use crate::error::{Result, SceneError};
    pub use crate::merge::merge;
    pub use crate::mesh::{
        AttributeBuffer, AttributeSemantic, IndexBuffer, MergedDrawable, MeshData, PrimitiveType,
    };
    pub use crate::normalize::normalize;
}
