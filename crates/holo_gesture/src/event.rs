//! Gesture event types

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The closed set of recognized gesture kinds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GestureKind {
    /// Discrete; removes the hit object on its begin edge
    LongPress,
    /// Continuous yaw rotation
    Rotate,
    /// Continuous uniform scaling
    Pinch,
    /// Continuous ground-plane translation
    Pan,
}

impl GestureKind {
    /// Whether the gesture delivers a stream of updates after beginning
    pub fn is_continuous(&self) -> bool {
        !matches!(self, Self::LongPress)
    }
}

/// Recognizer lifecycle phase
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One gesture callback from the input layer
///
/// Delta fields carry the incremental change since the recognizer's last
/// report. Fields irrelevant to a kind hold the neutral value (0 rotation,
/// 1.0 scale, zero translation).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureEvent {
    pub kind: GestureKind,
    pub phase: GesturePhase,
    /// Screen-space location, used for hit-testing the target
    pub location: Vec2,
    /// Incremental rotation in radians
    pub rotation_delta: f32,
    /// Incremental scale ratio (1.0 = unchanged)
    pub scale_delta: f32,
    /// Incremental screen-space translation
    pub translation_delta: Vec2,
}

impl GestureEvent {
    fn neutral(kind: GestureKind, phase: GesturePhase, location: Vec2) -> Self {
        Self {
            kind,
            phase,
            location,
            rotation_delta: 0.0,
            scale_delta: 1.0,
            translation_delta: Vec2::ZERO,
        }
    }

    /// Long-press at a screen location (begin edge only)
    pub fn long_press(location: Vec2) -> Self {
        Self::neutral(GestureKind::LongPress, GesturePhase::Began, location)
    }

    /// Rotation update carrying an incremental angle in radians
    pub fn rotate(phase: GesturePhase, location: Vec2, radians: f32) -> Self {
        Self {
            rotation_delta: radians,
            ..Self::neutral(GestureKind::Rotate, phase, location)
        }
    }

    /// Pinch update carrying an incremental scale ratio
    pub fn pinch(phase: GesturePhase, location: Vec2, ratio: f32) -> Self {
        Self {
            scale_delta: ratio,
            ..Self::neutral(GestureKind::Pinch, phase, location)
        }
    }

    /// Pan update carrying an incremental screen translation
    pub fn pan(phase: GesturePhase, location: Vec2, translation: Vec2) -> Self {
        Self {
            translation_delta: translation,
            ..Self::neutral(GestureKind::Pan, phase, location)
        }
    }
}
