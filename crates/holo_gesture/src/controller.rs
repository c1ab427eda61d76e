//! Gesture controller - event stream to transform requests

use crate::delta::GestureDelta;
use crate::event::{GestureEvent, GestureKind, GesturePhase};
use glam::Vec2;
use log::debug;

/// Transient state of one in-progress continuous gesture
///
/// Created on the begin edge, dropped on end/cancel. The target is resolved
/// by hit-test at gesture start and kept for the life of the gesture.
#[derive(Clone, Copy, Debug)]
pub struct ActiveGesture<T> {
    pub kind: GestureKind,
    pub target: Option<T>,
    pub delta: GestureDelta,
}

impl<T> ActiveGesture<T> {
    fn new(kind: GestureKind, target: Option<T>) -> Self {
        Self {
            kind,
            target,
            delta: GestureDelta::NEUTRAL,
        }
    }
}

/// What the owner should do with an object after a gesture update
///
/// `T` is the object handle type of the scene the controller drives.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureOutcome<T> {
    /// Detach and destroy the object (long-press)
    RemoveObject(T),
    /// Subtract the angle from the object's yaw
    Rotated(T, f32),
    /// Multiply the object's uniform scale by the ratio; the collision
    /// shape must be re-synced after applying
    Scaled(T, f32),
    /// Translate by the screen delta, projected onto the ground plane
    Translated(T, Vec2),
    /// Nothing to apply this tick
    Ignored,
}

/// Converts gesture events into [`GestureOutcome`]s
///
/// Holds at most one active state per continuous gesture kind; rotate,
/// pinch and pan can be in flight simultaneously (two-finger gestures
/// overlap in practice), each against its own resolved target.
#[derive(Clone, Debug)]
pub struct TransformGestureController<T> {
    rotate: Option<ActiveGesture<T>>,
    pinch: Option<ActiveGesture<T>>,
    pan: Option<ActiveGesture<T>>,
}

impl<T: Copy> TransformGestureController<T> {
    /// Create a controller with no gesture in progress
    pub fn new() -> Self {
        Self {
            rotate: None,
            pinch: None,
            pan: None,
        }
    }

    /// Feed one gesture event.
    ///
    /// `hit` is the object resolved by hit-testing at the event's screen
    /// location; it is only consulted when a gesture starts. An update that
    /// resolves no target is a no-op for that tick.
    pub fn handle(&mut self, event: &GestureEvent, hit: Option<T>) -> GestureOutcome<T> {
        if event.kind == GestureKind::LongPress {
            // Edge-triggered removal; no continuous state to track.
            return match (event.phase, hit) {
                (GesturePhase::Began, Some(target)) => GestureOutcome::RemoveObject(target),
                _ => GestureOutcome::Ignored,
            };
        }

        match event.phase {
            GesturePhase::Began => {
                debug!("{:?} gesture began", event.kind);
                *self.slot_mut(event.kind) = Some(ActiveGesture::new(event.kind, hit));
                GestureOutcome::Ignored
            }
            GesturePhase::Changed => {
                // A recognizer can hand us a mid-flight gesture (e.g. after
                // a focus change); start it from the current hit.
                let kind = event.kind;
                let slot = self.slot_mut(kind);
                let gesture = slot.get_or_insert_with(|| ActiveGesture::new(kind, hit));

                gesture.delta.accumulate(
                    event.rotation_delta,
                    event.scale_delta,
                    event.translation_delta,
                );

                let Some(target) = gesture.target else {
                    return GestureOutcome::Ignored;
                };
                let applied = gesture.delta.take();
                match kind {
                    GestureKind::Rotate => GestureOutcome::Rotated(target, applied.rotation),
                    GestureKind::Pinch => GestureOutcome::Scaled(target, applied.scale),
                    GestureKind::Pan => GestureOutcome::Translated(target, applied.translation),
                    GestureKind::LongPress => unreachable!("handled above"),
                }
            }
            GesturePhase::Ended | GesturePhase::Cancelled => {
                debug!("{:?} gesture ended", event.kind);
                // Applied deltas stay applied; only further updates stop.
                *self.slot_mut(event.kind) = None;
                GestureOutcome::Ignored
            }
        }
    }

    /// The delta a continuous gesture has accumulated but not yet applied
    ///
    /// Neutral immediately after every applied update.
    pub fn pending_delta(&self, kind: GestureKind) -> Option<GestureDelta> {
        self.slot(kind).map(|g| g.delta)
    }

    /// The target a continuous gesture resolved at its start
    pub fn target(&self, kind: GestureKind) -> Option<T> {
        self.slot(kind).and_then(|g| g.target)
    }

    fn slot(&self, kind: GestureKind) -> Option<&ActiveGesture<T>> {
        match kind {
            GestureKind::Rotate => self.rotate.as_ref(),
            GestureKind::Pinch => self.pinch.as_ref(),
            GestureKind::Pan => self.pan.as_ref(),
            GestureKind::LongPress => None,
        }
    }

    fn slot_mut(&mut self, kind: GestureKind) -> &mut Option<ActiveGesture<T>> {
        match kind {
            GestureKind::Rotate => &mut self.rotate,
            GestureKind::Pinch => &mut self.pinch,
            GestureKind::Pan => &mut self.pan,
            GestureKind::LongPress => {
                unreachable!("long-press carries no continuous state")
            }
        }
    }
}

impl<T> Default for TransformGestureController<T> {
    fn default() -> Self {
        Self {
            rotate: None,
            pinch: None,
            pan: None,
        }
    }
}
