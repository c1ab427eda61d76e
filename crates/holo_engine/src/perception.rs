//! Perception boundary - what the engine consumes from the AR runtime

use crate::object::ObjectId;
use glam::Vec2;
use holo_math::{Frustum, Pose};

/// Camera pose plus view frustum for one frame
#[derive(Clone, Copy, Debug)]
pub struct CameraView {
    pub pose: Pose,
    pub frustum: Frustum,
}

/// Interface to the external perception/rendering subsystem.
///
/// Tracking, pose estimation and rendering are owned by that subsystem; the
/// engine only reads from it. `hit_test` must resolve to a placed object,
/// returning `None` for the environment, detected surfaces, or the scene
/// root, so gestures against nothing fall through as no-ops.
pub trait Perception {
    /// Current camera pose and frustum
    fn camera_view(&self) -> CameraView;

    /// Resolve a screen point to the placed object under it
    fn hit_test(&self, location: Vec2) -> Option<ObjectId>;
}
