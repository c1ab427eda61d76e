//! Session configuration
//!
//! Passed in explicitly at session start; the engine reads no ambient
//! process-wide settings.

use holo_anchor::AnchorId;
use serde::{Deserialize, Serialize};

/// Configuration for one placement session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Target maximum bounding extent for newly placed assets, in meters.
    /// Heterogeneous source assets are normalized to this footprint.
    pub normalization_target_extent: f32,
    /// Screen-to-world factor for pan translation.
    ///
    /// Known approximation: the same constant is used at every camera
    /// distance and surface scale, so pans feel faster on far objects.
    pub pan_world_factor: f32,
    /// Whether the off-target indicator is shown at all
    pub indicator_enabled: bool,
    /// Anchor whose visibility drives the indicator; when `None`, the most
    /// recently detected anchor is watched
    pub watched_anchor: Option<AnchorId>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            normalization_target_extent: 0.05,
            pan_world_factor: 0.001,
            indicator_enabled: true,
            watched_anchor: None,
        }
    }
}
