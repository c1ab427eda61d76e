//! Accumulated per-gesture deltas with neutral reset

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Delta accumulated since the last reset
///
/// Neutral is `(rotation: 0, scale: 1.0, translation: zero)`. The owner
/// applies a delta by [`take`](Self::take)-ing it, which resets the stored
/// value back to neutral so the next update only ever sees the incremental
/// change.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GestureDelta {
    /// Accumulated rotation in radians
    pub rotation: f32,
    /// Accumulated scale ratio (multiplicative)
    pub scale: f32,
    /// Accumulated screen-space translation
    pub translation: Vec2,
}

impl GestureDelta {
    /// The neutral delta
    pub const NEUTRAL: Self = Self {
        rotation: 0.0,
        scale: 1.0,
        translation: Vec2::ZERO,
    };

    /// Check whether the delta is exactly neutral
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Fold one incremental report into the accumulator
    pub fn accumulate(&mut self, rotation: f32, scale: f32, translation: Vec2) {
        self.rotation += rotation;
        self.scale *= scale;
        self.translation += translation;
    }

    /// Return the accumulated delta and reset to neutral
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::NEUTRAL)
    }
}

impl Default for GestureDelta {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn take_resets_to_neutral() {
        let mut delta = GestureDelta::NEUTRAL;
        delta.accumulate(0.5, 1.2, Vec2::new(3.0, -1.0));
        assert!(!delta.is_neutral());

        let taken = delta.take();
        assert_relative_eq!(taken.rotation, 0.5);
        assert_relative_eq!(taken.scale, 1.2);
        assert!(delta.is_neutral());
    }

    #[test]
    fn accumulation_is_additive_and_multiplicative() {
        let mut delta = GestureDelta::NEUTRAL;
        delta.accumulate(0.1, 1.2, Vec2::new(1.0, 0.0));
        delta.accumulate(0.2, 0.9, Vec2::new(0.0, 2.0));

        assert_relative_eq!(delta.rotation, 0.3, epsilon = 1e-6);
        assert_relative_eq!(delta.scale, 1.08, epsilon = 1e-6);
        assert_eq!(delta.translation, Vec2::new(1.0, 2.0));
    }
}
