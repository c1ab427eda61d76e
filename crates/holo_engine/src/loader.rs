//! Asset loading boundary
//!
//! Decoding a 3D asset file into a node tree is the external loader's job;
//! the engine only defines the handoff. Loads run on a background thread
//! and deliver their result through a channel the orchestrator drains at
//! frame start, so scene state is never touched off the frame-loop thread.

use crate::error::{EngineError, Result};
use crossbeam_channel::{unbounded, Receiver, Sender};
use holo_scene::{NodeArena, NodeId};
use log::debug;
use std::sync::Arc;
use std::thread::JoinHandle;

/// Where an asset comes from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetSource {
    /// Display name for the resulting object
    pub name: String,
    /// Opaque handle the loader resolves (file path, URL, record id)
    pub uri: String,
}

impl AssetSource {
    /// Create a source
    pub fn new(name: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            uri: uri.into(),
        }
    }
}

/// External asset decoder.
///
/// Implementations may block (network, disk); they are always invoked off
/// the frame loop.
pub trait AssetLoader: Send + Sync {
    /// Decode the source into a node tree rooted at the returned id
    fn load(&self, source: &AssetSource) -> Result<(NodeArena, NodeId)>;
}

/// A finished background load
pub struct LoadCompletion {
    pub source: AssetSource,
    pub result: Result<(NodeArena, NodeId)>,
}

/// Channel pair carrying background load results onto the frame loop
pub struct LoadQueue {
    sender: Sender<LoadCompletion>,
    receiver: Receiver<LoadCompletion>,
}

impl LoadQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self { sender, receiver }
    }

    /// Run `loader` against `source` on a background thread; the result is
    /// queued for the next frame-start drain. Load failures travel through
    /// the channel, they are not reported here.
    pub fn spawn_load(&self, loader: Arc<dyn AssetLoader>, source: AssetSource) -> JoinHandle<()> {
        let sender = self.sender.clone();
        std::thread::spawn(move || {
            debug!("loading asset {:?}", source.uri);
            let result = loader.load(&source);
            // The queue owner may be gone during shutdown; nothing to do.
            let _ = sender.send(LoadCompletion { source, result });
        })
    }

    /// Take every completion that has arrived so far.
    ///
    /// Called once per frame, on the frame-loop thread, before any other
    /// scene mutation.
    pub fn drain(&self) -> Vec<LoadCompletion> {
        self.receiver.try_iter().collect()
    }

    /// Check whether any completion is waiting
    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl Default for LoadQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holo_scene::Node;

    struct StubLoader;

    impl AssetLoader for StubLoader {
        fn load(&self, source: &AssetSource) -> Result<(NodeArena, NodeId)> {
            if source.uri == "missing" {
                return Err(EngineError::AssetLoadFailure("not found".into()));
            }
            let mut arena = NodeArena::new();
            let root = arena.add_root(Node::default());
            Ok((arena, root))
        }
    }

    #[test]
    fn completion_crosses_the_channel() {
        let queue = LoadQueue::new();
        let handle = queue.spawn_load(Arc::new(StubLoader), AssetSource::new("chair", "chair.glb"));
        handle.join().unwrap();

        let completions = queue.drain();
        assert_eq!(completions.len(), 1);
        assert!(completions[0].result.is_ok());
        assert!(queue.is_empty());
    }

    #[test]
    fn failure_travels_through_the_channel() {
        let queue = LoadQueue::new();
        let handle = queue.spawn_load(Arc::new(StubLoader), AssetSource::new("x", "missing"));
        handle.join().unwrap();

        let completions = queue.drain();
        assert!(matches!(
            completions[0].result,
            Err(EngineError::AssetLoadFailure(_))
        ));
    }

    #[test]
    fn drain_on_empty_queue_is_empty() {
        let queue = LoadQueue::new();
        assert!(queue.drain().is_empty());
    }
}
