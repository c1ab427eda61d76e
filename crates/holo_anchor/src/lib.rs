//! # holo_anchor - Anchor state and visibility tracking
//!
//! The perception subsystem reports real-world anchors (detected planes,
//! recognized images) through add/update/remove callbacks. This crate keeps
//! the engine-side mirror of that state:
//! - Per-anchor tracked/lost state machine
//! - Last known world position, retained across tracking loss
//! - Edge-triggered transitions so callers can react exactly once
//!
//! Anchor state is mutated only by [`AnchorVisibilityTracker::apply`], which
//! the orchestrator calls from the frame-loop thread; everything else reads.

use holo_math::Pose;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use glam::Vec3;

/// Anchor identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnchorId(pub u64);

/// Tracking state of a single anchor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingState {
    /// The perception subsystem currently sees the anchor
    Tracked,
    /// The anchor fell out of view; its last position is retained
    Lost,
}

/// Engine-side record of one anchor
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnchorState {
    pub id: AnchorId,
    /// World position from the most recent pose report. Kept while the
    /// anchor is lost so a directional indicator has something to point at.
    pub last_known_position: Vec3,
    pub state: TrackingState,
}

impl AnchorState {
    /// Check whether the anchor is currently tracked
    #[inline]
    pub fn is_tracked(&self) -> bool {
        self.state == TrackingState::Tracked
    }
}

/// Perception-callback boundary: anchor lifecycle events
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnchorEvent {
    /// First observation of an anchor
    Added { id: AnchorId, pose: Pose },
    /// Pose refresh plus the perception subsystem's tracking flag
    Updated {
        id: AnchorId,
        pose: Pose,
        is_tracked: bool,
    },
    /// The anchor no longer exists
    Removed { id: AnchorId },
}

impl AnchorEvent {
    /// The anchor the event concerns
    pub fn id(&self) -> AnchorId {
        match self {
            Self::Added { id, .. } | Self::Updated { id, .. } | Self::Removed { id } => *id,
        }
    }
}

/// What changed when an event was applied
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackingTransition {
    /// Tracked -> Lost edge
    BecameLost,
    /// Lost -> Tracked edge (also fired on first observation)
    BecameTracked,
    /// No state edge (position refresh, unknown anchor, removal)
    None,
}

/// Tracks tracked/lost state and last known position per anchor
#[derive(Clone, Debug, Default)]
pub struct AnchorVisibilityTracker {
    anchors: BTreeMap<AnchorId, AnchorState>,
}

impl AnchorVisibilityTracker {
    /// Create an empty tracker
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a perception event and report the resulting edge, if any.
    ///
    /// Before its first `Added` event an anchor has no state at all; updates
    /// for unknown anchors are ignored. The last known position is refreshed
    /// on every report carrying a pose, tracked or not, and is never cleared
    /// on re-tracking.
    pub fn apply(&mut self, event: AnchorEvent) -> TrackingTransition {
        match event {
            AnchorEvent::Added { id, pose } => {
                debug!("anchor {:?} observed at {:?}", id, pose.position);
                self.anchors.insert(
                    id,
                    AnchorState {
                        id,
                        last_known_position: pose.position,
                        state: TrackingState::Tracked,
                    },
                );
                TrackingTransition::BecameTracked
            }
            AnchorEvent::Updated {
                id,
                pose,
                is_tracked,
            } => {
                let Some(anchor) = self.anchors.get_mut(&id) else {
                    debug!("update for unknown anchor {:?} ignored", id);
                    return TrackingTransition::None;
                };
                anchor.last_known_position = pose.position;
                match (anchor.state, is_tracked) {
                    (TrackingState::Tracked, false) => {
                        debug!("anchor {:?} lost at {:?}", id, pose.position);
                        anchor.state = TrackingState::Lost;
                        TrackingTransition::BecameLost
                    }
                    (TrackingState::Lost, true) => {
                        debug!("anchor {:?} re-acquired", id);
                        anchor.state = TrackingState::Tracked;
                        TrackingTransition::BecameTracked
                    }
                    _ => TrackingTransition::None,
                }
            }
            AnchorEvent::Removed { id } => {
                debug!("anchor {:?} removed", id);
                self.anchors.remove(&id);
                TrackingTransition::None
            }
        }
    }

    /// Get an anchor's state
    pub fn state(&self, id: AnchorId) -> Option<&AnchorState> {
        self.anchors.get(&id)
    }

    /// Check whether an anchor exists and is tracked
    pub fn is_tracked(&self, id: AnchorId) -> bool {
        self.anchors
            .get(&id)
            .map(AnchorState::is_tracked)
            .unwrap_or(false)
    }

    /// Last known world position, if the anchor has ever been observed
    pub fn last_known_position(&self, id: AnchorId) -> Option<Vec3> {
        self.anchors.get(&id).map(|a| a.last_known_position)
    }

    /// Iterate all known anchors
    pub fn iter(&self) -> impl Iterator<Item = &AnchorState> {
        self.anchors.values()
    }
}

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::{
        AnchorEvent, AnchorId, AnchorState, AnchorVisibilityTracker, TrackingState,
        TrackingTransition,
    };
}
