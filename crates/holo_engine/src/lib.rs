//! # holo_engine - AR object placement and manipulation
//!
//! The orchestration crate that ties the engine together:
//! - Asset placement: merge fragments, normalize scale, sync collision,
//!   position at a detected anchor
//! - Gesture dispatch: rotate / pinch / pan / long-press against placed
//!   objects, with physics kept in step
//! - Anchor visibility: a directional indicator pointing at an anchor's
//!   last known position while tracking is lost
//!
//! ## Threading
//!
//! Everything except asset loading runs on one logical frame-loop thread;
//! background loads hand their result back through a channel drained at
//! frame start. No scene state is ever mutated off that thread.
//!
//! ## Example
//!
//! ```ignore
//! use holo_engine::prelude::*;
//!
//! let mut engine = PlacementOrchestrator::new(perception, SessionConfig::default());
//! engine.on_anchor_event(AnchorEvent::Added { id, pose });
//! let object = engine.place_asset(arena, root, id)?;
//! loop {
//!     let report = engine.on_frame_tick(dt);
//!     for event in input.drain() {
//!         engine.on_gesture_event(event);
//!     }
//! }
//! ```

// Re-export crates
pub use holo_anchor;
pub use holo_gesture;
pub use holo_math;
pub use holo_physics;
pub use holo_scene;

pub mod config;
pub mod error;
pub mod indicator;
pub mod loader;
pub mod object;
pub mod orchestrator;
pub mod perception;

pub use config::SessionConfig;
pub use error::{EngineError, Result};
pub use indicator::{IndicatorState, OffTargetIndicator};
pub use loader::{AssetLoader, AssetSource, LoadCompletion, LoadQueue};
pub use object::{Drawable, ObjectId, ObjectSummary, PlacedObject};
pub use orchestrator::{FrameReport, PlacementOrchestrator};
pub use perception::{CameraView, Perception};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::config::SessionConfig;
    pub use crate::error::{EngineError, Result};
    pub use crate::indicator::{IndicatorState, OffTargetIndicator};
    pub use crate::loader::{AssetLoader, AssetSource, LoadCompletion, LoadQueue};
    pub use crate::object::{Drawable, ObjectId, ObjectSummary, PlacedObject};
    pub use crate::orchestrator::{FrameReport, PlacementOrchestrator};
    pub use crate::perception::{CameraView, Perception};
    pub use holo_anchor::prelude::*;
    pub use holo_gesture::prelude::*;
    pub use holo_math::prelude::*;
    pub use holo_scene::prelude::*;
}
