//! Geometry merging - collapse an asset's mesh fragments into one drawable

use crate::arena::{NodeArena, NodeId};
use crate::mesh::MergedDrawable;
use log::warn;

/// Merge every mesh-bearing node under `root` into a single drawable.
///
/// Walks the subtree depth-first and appends each fragment's attribute and
/// index buffers, in traversal order, to the merged sequences. Index
/// buffers are rebased as they are appended, by the position count of the
/// fragments before them, so every index addresses the concatenated
/// position sequence. A fragment's own buffers all share one base: a
/// fragment may carry several index buffers over the same positions. No
/// coordinate transform is applied; source nodes must already be expressed
/// in the root's local space.
///
/// Returns `None` when no attribute buffers or no index buffers were
/// collected. The caller must then keep rendering the unmerged node tree
/// rather than swap in an empty drawable.
///
/// Pure over the arena; nothing is mutated.
pub fn merge(arena: &NodeArena, root: NodeId) -> Option<MergedDrawable> {
    let mut drawable = MergedDrawable::default();

    for (_, node) in arena.descendants(root) {
        let Some(mesh) = &node.mesh else {
            warn!(
                "node {:?} carries no geometry, skipping",
                node.name.as_deref().unwrap_or("<unnamed>")
            );
            continue;
        };
        if mesh.attributes.is_empty() {
            warn!(
                "node {:?} has no attribute buffers",
                node.name.as_deref().unwrap_or("<unnamed>")
            );
        }
        if mesh.elements.is_empty() {
            warn!(
                "node {:?} has no index buffers",
                node.name.as_deref().unwrap_or("<unnamed>")
            );
        }
        let base = drawable.position_count() as u32;
        drawable.attributes.extend(mesh.attributes.iter().cloned());
        drawable.elements.extend(mesh.elements.iter().map(|buffer| {
            let mut rebased = buffer.clone();
            if base > 0 {
                for index in &mut rebased.indices {
                    *index += base;
                }
            }
            rebased
        }));
    }

    if drawable.attributes.is_empty() || drawable.elements.is_empty() {
        warn!("merge produced no geometry, keeping unmerged hierarchy");
        return None;
    }

    Some(drawable)
}
