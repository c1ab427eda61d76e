//! Collision world - static collider storage and sync

use crate::error::{PhysicsError, Result};
use crate::shape::CollisionShape;
use log::debug;
use rapier3d::prelude as rapier;
use std::collections::HashMap;

/// Handle to a collider in the collision world
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColliderHandle(pub(crate) rapier::ColliderHandle);

impl ColliderHandle {
    /// Get the raw Rapier handle
    pub fn raw(&self) -> rapier::ColliderHandle {
        self.0
    }
}

/// Static collision world for placed objects
///
/// One static collider per object, keyed by the object's id. Syncing
/// replaces the collider in place so a stale shape never outlives a scale
/// or geometry change. All mutation happens on the frame-loop thread.
pub struct CollisionWorld {
    bodies: rapier::RigidBodySet,
    colliders: rapier::ColliderSet,
    islands: rapier::IslandManager,
    object_to_collider: HashMap<u128, ColliderHandle>,
    syncs: u64,
}

impl CollisionWorld {
    /// Create an empty collision world
    pub fn new() -> Self {
        Self {
            bodies: rapier::RigidBodySet::new(),
            colliders: rapier::ColliderSet::new(),
            islands: rapier::IslandManager::new(),
            object_to_collider: HashMap::new(),
            syncs: 0,
        }
    }

    /// Regenerate the collider for an object from its current shape.
    ///
    /// Replaces any existing collider in place (same object id, fresh
    /// shape). Synchronous and idempotent: repeated syncs with an unchanged
    /// shape yield a collider with identical local bounds.
    pub fn sync_object(
        &mut self,
        object_id: u128,
        shape: &CollisionShape,
        position: [f32; 3],
    ) -> ColliderHandle {
        if let Some(handle) = self.object_to_collider.remove(&object_id) {
            self.colliders
                .remove(handle.0, &mut self.islands, &mut self.bodies, false);
        }

        let collider = rapier::ColliderBuilder::new(shape.to_rapier())
            .translation(rapier::Vector::new(position[0], position[1], position[2]))
            .user_data(object_id)
            .build();
        let handle = ColliderHandle(self.colliders.insert(collider));
        self.object_to_collider.insert(object_id, handle);
        self.syncs += 1;
        debug!("collision shape synced for object {}", object_id);
        handle
    }

    /// Move an object's collider without rebuilding its shape.
    ///
    /// Translation-only changes keep the existing shape valid; this is not
    /// counted as a sync.
    pub fn set_position(&mut self, object_id: u128, position: [f32; 3]) -> Result<()> {
        let handle = self
            .object_to_collider
            .get(&object_id)
            .ok_or(PhysicsError::ObjectNotFound(object_id))?;
        let collider = self
            .colliders
            .get_mut(handle.0)
            .ok_or(PhysicsError::ObjectNotFound(object_id))?;
        collider.set_translation(rapier::Vector::new(position[0], position[1], position[2]));
        Ok(())
    }

    /// Remove an object's collider, if it has one
    pub fn remove_object(&mut self, object_id: u128) {
        if let Some(handle) = self.object_to_collider.remove(&object_id) {
            self.colliders
                .remove(handle.0, &mut self.islands, &mut self.bodies, false);
            debug!("collision body removed for object {}", object_id);
        }
    }

    /// Check whether an object currently has a collision body
    pub fn contains(&self, object_id: u128) -> bool {
        self.object_to_collider.contains_key(&object_id)
    }

    /// Number of live colliders
    pub fn len(&self) -> usize {
        self.object_to_collider.len()
    }

    /// Check if the world holds no colliders
    pub fn is_empty(&self) -> bool {
        self.object_to_collider.is_empty()
    }

    /// Total number of sync operations performed
    pub fn sync_count(&self) -> u64 {
        self.syncs
    }

    /// Local-space bounds of an object's collider shape (mins, maxs)
    pub fn collider_local_bounds(&self, object_id: u128) -> Result<([f32; 3], [f32; 3])> {
        let handle = self
            .object_to_collider
            .get(&object_id)
            .ok_or(PhysicsError::ObjectNotFound(object_id))?;
        let collider = self
            .colliders
            .get(handle.0)
            .ok_or(PhysicsError::ObjectNotFound(object_id))?;
        let aabb = collider.shape().compute_local_aabb();
        Ok((
            [aabb.mins.x, aabb.mins.y, aabb.mins.z],
            [aabb.maxs.x, aabb.maxs.y, aabb.maxs.z],
        ))
    }

    /// World-space position of an object's collider
    pub fn collider_position(&self, object_id: u128) -> Result<[f32; 3]> {
        let handle = self
            .object_to_collider
            .get(&object_id)
            .ok_or(PhysicsError::ObjectNotFound(object_id))?;
        let collider = self
            .colliders
            .get(handle.0)
            .ok_or(PhysicsError::ObjectNotFound(object_id))?;
        let translation = collider.translation();
        Ok([translation.x, translation.y, translation.z])
    }
}

impl Default for CollisionWorld {
    fn default() -> Self {
        Self::new()
    }
}
