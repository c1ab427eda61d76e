//! # holo_gesture - Gesture events and transform deltas
//!
//! Raw multi-touch recognizers produce a stream of discrete events; this
//! crate turns them into object-transform requests under a stateful,
//! resettable delta model:
//! - Deltas are **incremental**: reset to neutral immediately after each
//!   applied update, never the cumulative change since gesture start
//! - Each gesture resolves its target by hit-test at gesture start and keeps
//!   it even if the pointer later moves off the object
//! - Ending or cancelling a gesture stops further updates; applied deltas
//!   are never rolled back
//!
//! Gesture kinds are a closed set dispatched through one update function,
//! not an open-ended callback interface.

pub mod controller;
pub mod delta;
pub mod event;

pub use controller::{ActiveGesture, GestureOutcome, TransformGestureController};
pub use delta::GestureDelta;
pub use event::{GestureEvent, GestureKind, GesturePhase};

/// Prelude - commonly used types
pub mod prelude {
    pub use crate::controller::{ActiveGesture, GestureOutcome, TransformGestureController};
    pub use crate::delta::GestureDelta;
    pub use crate::event::{GestureEvent, GestureKind, GesturePhase};
}
