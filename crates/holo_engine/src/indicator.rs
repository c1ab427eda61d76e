//! Off-target indicator - directional marker for a lost anchor
//!
//! While the watched anchor is out of tracking, a marker in camera space
//! points toward the anchor's last known world position and blinks. The
//! marker is hidden when the last known position is geometrically inside
//! the view frustum: the object is "in frame" even though tracking dropped,
//! and an arrow would mislead.

use crate::perception::CameraView;
use glam::Vec3;
use holo_math::bearing_to;
use serde::{Deserialize, Serialize};

/// Indicator output for one frame; fully recomputed per tick, never stored
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndicatorState {
    /// Where the renderer draws the marker, in camera space
    pub position: Vec3,
    /// Roll angle of the marker; 0 means pointing straight up
    pub bearing: f32,
    /// Whether the marker should be drawn this frame
    pub visible: bool,
    /// Blink opacity in `[MIN_OPACITY, 1.0]`
    pub opacity: f32,
}

/// Blinking directional marker, active only while the watched anchor is lost
#[derive(Clone, Copy, Debug, Default)]
pub struct OffTargetIndicator {
    attached: bool,
    /// Seconds into the blink cycle, wraps at one full period
    blink_phase: f32,
}

impl OffTargetIndicator {
    /// Seconds to fade from full to minimum opacity (and back)
    pub const FADE_HALF_PERIOD: f32 = 1.0;
    /// Opacity floor of the blink
    pub const MIN_OPACITY: f32 = 0.4;
    /// Where the marker sits in camera space, slightly below center and in
    /// front of the near plane
    pub const CAMERA_OFFSET: Vec3 = Vec3::new(0.0, -0.075, -0.5);

    /// Create a detached indicator
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the marker; blink starts from full opacity
    pub fn attach(&mut self) {
        if !self.attached {
            self.attached = true;
            self.blink_phase = 0.0;
        }
    }

    /// Detach the marker immediately (anchor re-acquired)
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Whether the marker is currently attached
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Advance the blink and recompute bearing and visibility.
    ///
    /// The opacity oscillation runs on `dt` alone, independent of position
    /// updates. Visibility requires being attached and the last known
    /// position lying outside the camera frustum.
    pub fn update(&mut self, camera: &CameraView, last_known: Vec3, dt: f32) -> IndicatorState {
        let period = 2.0 * Self::FADE_HALF_PERIOD;
        self.blink_phase = (self.blink_phase + dt).rem_euclid(period);

        // Triangle wave: fade out over the first half period, back in over
        // the second.
        let span = 1.0 - Self::MIN_OPACITY;
        let t = self.blink_phase / Self::FADE_HALF_PERIOD;
        let opacity = if t < 1.0 {
            1.0 - span * t
        } else {
            Self::MIN_OPACITY + span * (t - 1.0)
        };

        let bearing = bearing_to(camera.pose.position, last_known);
        let in_frame = camera.frustum.contains_point(last_known);

        IndicatorState {
            position: Self::CAMERA_OFFSET,
            bearing,
            visible: self.attached && !in_frame,
            opacity,
        }
    }
}
