//! Placed objects - the live scene entities

use glam::{Quat, Vec3};
use holo_scene::{MergedDrawable, NodeArena, NodeId};
use serde::{Deserialize, Serialize};

/// Identifier of a placed object
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ObjectId(pub u64);

impl ObjectId {
    /// Widened id used as physics user data
    #[inline]
    pub fn as_user_data(&self) -> u128 {
        self.0 as u128
    }
}

/// What a placed object renders
#[derive(Clone, Debug)]
pub enum Drawable {
    /// Flattened single-drawable geometry (the normal case)
    Merged(MergedDrawable),
    /// Merge failed; the original node hierarchy is kept as-is
    Unmerged { arena: NodeArena, root: NodeId },
}

impl Drawable {
    /// The merged geometry, when merging succeeded
    pub fn merged(&self) -> Option<&MergedDrawable> {
        match self {
            Self::Merged(drawable) => Some(drawable),
            Self::Unmerged { .. } => None,
        }
    }
}

/// A live object in the scene
///
/// Owned exclusively by the orchestrator; gesture application and placement
/// are the only mutation paths.
#[derive(Clone, Debug)]
pub struct PlacedObject {
    pub id: ObjectId,
    /// Name carried over from the asset's root node, if any
    pub name: Option<String>,
    pub drawable: Drawable,
    /// World position; the y component stays on the detected surface
    pub position: Vec3,
    /// Yaw accumulated from rotation gestures, in radians
    pub yaw: f32,
    /// Full orientation, recomposed whenever yaw changes
    pub orientation: Quat,
    /// Uniform scale factor applied on all three axes
    pub scale: f32,
}

impl PlacedObject {
    /// Set yaw and keep the orientation quaternion in step
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.orientation = Quat::from_rotation_y(yaw);
    }

    /// Snapshot for the UI layer
    pub fn summary(&self) -> ObjectSummary {
        ObjectSummary {
            id: self.id,
            name: self.name.clone(),
            position: self.position.to_array(),
            yaw: self.yaw,
            scale: self.scale,
        }
    }
}

/// Read-only summary of a placed object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub id: ObjectId,
    pub name: Option<String>,
    pub position: [f32; 3],
    pub yaw: f32,
    pub scale: f32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use core::f32::consts::FRAC_PI_2;

    fn object() -> PlacedObject {
        PlacedObject {
            id: ObjectId(1),
            name: Some("chair".to_string()),
            drawable: Drawable::Merged(MergedDrawable::default()),
            position: Vec3::new(0.1, 0.0, -0.4),
            yaw: 0.0,
            orientation: Quat::IDENTITY,
            scale: 0.025,
        }
    }

    #[test]
    fn set_yaw_recomposes_orientation() {
        let mut object = object();
        object.set_yaw(FRAC_PI_2);

        // +90 degrees about Y maps +X to -Z
        let mapped = object.orientation * Vec3::X;
        assert_relative_eq!(mapped.z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(object.yaw, FRAC_PI_2);
    }

    #[test]
    fn summary_round_trips_through_json() {
        let summary = object().summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: ObjectSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
