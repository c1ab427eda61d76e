//! Placement orchestrator - top-level engine wiring
//!
//! Owns every placed object and the per-session subsystems, and is the only
//! code that mutates them. Per frame the flow is one-way: anchor and gesture
//! events update transform/visibility state, then collision and the
//! indicator are brought in step, then the frame report goes out.

use crate::config::SessionConfig;
use crate::error::{EngineError, Result};
use crate::indicator::{IndicatorState, OffTargetIndicator};
use crate::loader::{AssetLoader, AssetSource, LoadQueue};
use crate::object::{Drawable, ObjectId, ObjectSummary, PlacedObject};
use crate::perception::Perception;
use glam::{Quat, Vec3};
use holo_anchor::{AnchorEvent, AnchorId, AnchorVisibilityTracker, TrackingState, TrackingTransition};
use holo_gesture::{GestureEvent, GestureOutcome, TransformGestureController};
use holo_physics::{CollisionShape, CollisionWorld};
use holo_scene::{merge, normalize, NodeArena, NodeId};
use log::{debug, info, warn};
use std::sync::Arc;
use std::thread::JoinHandle;

/// What happened during one frame tick
#[derive(Debug, Default)]
pub struct FrameReport {
    /// Objects placed from background loads that completed this frame
    pub placed: Vec<ObjectId>,
    /// Indicator output, present only while the marker is attached
    pub indicator: Option<IndicatorState>,
}

/// Top-level coordinator for one AR scene session
///
/// `P` is the external perception/rendering subsystem the engine consumes.
pub struct PlacementOrchestrator<P: Perception> {
    perception: P,
    config: SessionConfig,
    objects: Vec<PlacedObject>,
    next_object_id: u64,
    anchors: AnchorVisibilityTracker,
    gestures: TransformGestureController<ObjectId>,
    collision: CollisionWorld,
    indicator: OffTargetIndicator,
    loads: LoadQueue,
    loader: Option<Arc<dyn AssetLoader>>,
    /// Most recently detected anchor; default placement target and
    /// indicator subject when the config names none
    detected_anchor: Option<AnchorId>,
}

impl<P: Perception> PlacementOrchestrator<P> {
    /// Create a session with no background loader
    pub fn new(perception: P, config: SessionConfig) -> Self {
        Self {
            perception,
            config,
            objects: Vec::new(),
            next_object_id: 1,
            anchors: AnchorVisibilityTracker::new(),
            gestures: TransformGestureController::new(),
            collision: CollisionWorld::new(),
            indicator: OffTargetIndicator::new(),
            loads: LoadQueue::new(),
            loader: None,
            detected_anchor: None,
        }
    }

    /// Create a session with a background asset loader
    pub fn with_loader(perception: P, config: SessionConfig, loader: Arc<dyn AssetLoader>) -> Self {
        let mut orchestrator = Self::new(perception, config);
        orchestrator.loader = Some(loader);
        orchestrator
    }

    /// The anchor currently driving placement and the indicator
    pub fn watched_anchor(&self) -> Option<AnchorId> {
        self.config.watched_anchor.or(self.detected_anchor)
    }

    /// Place a decoded asset at an anchor.
    ///
    /// Pipeline: merge the node tree into one drawable (falling back to the
    /// unmerged hierarchy on merge failure), normalize its scale to the
    /// session's target extent, build and register a collision shape when
    /// the geometry allows one, and position the object at the anchor's
    /// last known position.
    ///
    /// Fails with [`EngineError::AnchorUnavailable`] when the anchor was
    /// never observed, and with a scene error on degenerate geometry; in
    /// both cases no object is created.
    pub fn place_asset(
        &mut self,
        arena: NodeArena,
        root: NodeId,
        at_anchor: AnchorId,
    ) -> Result<ObjectId> {
        let position = self
            .anchors
            .last_known_position(at_anchor)
            .ok_or(EngineError::AnchorUnavailable)?;

        let name = arena.get(root).and_then(|node| node.name.clone());
        let (drawable, scale) = match merge(&arena, root) {
            Some(merged) => {
                let factor = normalize(&merged, self.config.normalization_target_extent)?;
                (Drawable::Merged(merged), factor)
            }
            None => {
                warn!("merge failed, keeping unmerged hierarchy");
                (Drawable::Unmerged { arena, root }, 1.0)
            }
        };

        let id = ObjectId(self.next_object_id);
        self.next_object_id += 1;
        self.objects.push(PlacedObject {
            id,
            name,
            drawable,
            position,
            yaw: 0.0,
            orientation: Quat::IDENTITY,
            scale,
        });
        self.sync_collision(self.objects.len() - 1);

        let placed = &self.objects[self.objects.len() - 1];
        info!(
            "placed object {:?} ({}) at {:?}, scale {}",
            id,
            placed.name.as_deref().unwrap_or("<unnamed>"),
            position,
            scale
        );
        Ok(id)
    }

    /// Hand an anchor lifecycle event to the tracker and keep the
    /// indicator in step with the watched anchor's edges
    pub fn on_anchor_event(&mut self, event: AnchorEvent) -> TrackingTransition {
        if let AnchorEvent::Added { id, .. } = event {
            self.detected_anchor = Some(id);
        }

        let event_id = event.id();
        let transition = self.anchors.apply(event);

        if Some(event_id) == self.watched_anchor() {
            match transition {
                TrackingTransition::BecameLost if self.config.indicator_enabled => {
                    self.indicator.attach();
                }
                TrackingTransition::BecameTracked => {
                    // Immediate: no lingering arrow once the anchor is back
                    self.indicator.detach();
                }
                _ => {}
            }
            if matches!(event, AnchorEvent::Removed { .. }) {
                self.indicator.detach();
            }
        }
        transition
    }

    /// Feed one gesture event and apply whatever it asks for.
    ///
    /// Returns the applied outcome; a gesture that resolves no live object
    /// comes back as `Ignored`.
    pub fn on_gesture_event(&mut self, event: GestureEvent) -> GestureOutcome<ObjectId> {
        let hit = self.perception.hit_test(event.location);
        let outcome = self.gestures.handle(&event, hit);

        match outcome {
            GestureOutcome::RemoveObject(id) => {
                if self.remove_object(id).is_err() {
                    return GestureOutcome::Ignored;
                }
            }
            GestureOutcome::Rotated(id, delta) => {
                let Some(index) = self.index_of(id) else {
                    return GestureOutcome::Ignored;
                };
                let object = &mut self.objects[index];
                let yaw = object.yaw - delta;
                object.set_yaw(yaw);
            }
            GestureOutcome::Scaled(id, ratio) => {
                let Some(index) = self.index_of(id) else {
                    return GestureOutcome::Ignored;
                };
                self.objects[index].scale *= ratio;
                // The collision volume must track the new size on every
                // applied update.
                self.sync_collision(index);
            }
            GestureOutcome::Translated(id, screen_delta) => {
                let Some(index) = self.index_of(id) else {
                    return GestureOutcome::Ignored;
                };
                let k = self.config.pan_world_factor;
                let object = &mut self.objects[index];
                // Constrained to the detected ground plane: y stays put.
                object.position += Vec3::new(screen_delta.x * k, 0.0, screen_delta.y * k);
                let position = object.position.to_array();
                let user_data = object.id.as_user_data();
                if self.collision.contains(user_data) {
                    let _ = self.collision.set_position(user_data, position);
                }
            }
            GestureOutcome::Ignored => {}
        }
        outcome
    }

    /// Queue a background load; the result is placed on a later frame tick
    pub fn request_load(&self, source: AssetSource) -> Result<JoinHandle<()>> {
        let loader = self.loader.clone().ok_or(EngineError::LoaderUnavailable)?;
        Ok(self.loads.spawn_load(loader, source))
    }

    /// Advance one frame: drain finished loads, place them, update the
    /// off-target indicator
    pub fn on_frame_tick(&mut self, dt: f32) -> FrameReport {
        let mut report = FrameReport::default();

        for completion in self.loads.drain() {
            match completion.result {
                Ok((arena, root)) => {
                    let Some(anchor) = self.watched_anchor() else {
                        warn!(
                            "asset {:?} loaded but no anchor detected, dropping",
                            completion.source.name
                        );
                        continue;
                    };
                    match self.place_asset(arena, root, anchor) {
                        Ok(id) => {
                            if let Some(object) = self.object_mut(id) {
                                if object.name.is_none() {
                                    object.name = Some(completion.source.name.clone());
                                }
                            }
                            report.placed.push(id);
                        }
                        Err(error) => {
                            warn!("placing {:?} failed: {}", completion.source.name, error)
                        }
                    }
                }
                Err(error) => {
                    warn!("asset load failed for {:?}: {}", completion.source.name, error)
                }
            }
        }

        if self.indicator.is_attached() {
            let lost_position = self.watched_anchor().and_then(|id| {
                let state = self.anchors.state(id)?;
                (state.state == TrackingState::Lost).then_some(state.last_known_position)
            });
            if let Some(position) = lost_position {
                let camera = self.perception.camera_view();
                report.indicator = Some(self.indicator.update(&camera, position, dt));
            }
        }

        report
    }

    /// Destroy an object and its collision body
    pub fn remove_object(&mut self, id: ObjectId) -> Result<()> {
        let index = self.index_of(id).ok_or(EngineError::ObjectNotFound(id))?;
        self.objects.remove(index);
        self.collision.remove_object(id.as_user_data());
        debug!("removed object {:?}", id);
        Ok(())
    }

    /// Summaries of every placed object, for the UI layer
    pub fn current_objects(&self) -> Vec<ObjectSummary> {
        self.objects.iter().map(PlacedObject::summary).collect()
    }

    /// Get a placed object
    pub fn object(&self, id: ObjectId) -> Option<&PlacedObject> {
        self.index_of(id).map(|index| &self.objects[index])
    }

    /// The anchor tracker (read-only)
    pub fn anchors(&self) -> &AnchorVisibilityTracker {
        &self.anchors
    }

    /// The collision world (read-only)
    pub fn collision(&self) -> &CollisionWorld {
        &self.collision
    }

    /// The session configuration
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn object_mut(&mut self, id: ObjectId) -> Option<&mut PlacedObject> {
        self.index_of(id).map(|index| &mut self.objects[index])
    }

    fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|object| object.id == id)
    }

    /// Regenerate the collision shape from the object's current visual
    /// geometry (post-scale). Objects without usable geometry get none.
    fn sync_collision(&mut self, index: usize) {
        let object = &self.objects[index];
        let shape = object
            .drawable
            .merged()
            .and_then(|drawable| CollisionShape::from_drawable(drawable, object.scale));
        match shape {
            Some(shape) => {
                self.collision.sync_object(
                    object.id.as_user_data(),
                    &shape,
                    object.position.to_array(),
                );
            }
            None => debug!("object {:?} has no geometry, skipping collision sync", object.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::perception::CameraView;
    use approx::assert_relative_eq;
    use glam::{Mat4, Vec2};
    use holo_math::{Frustum, Pose};
    use holo_gesture::GesturePhase;
    use holo_scene::{MeshData, Node};
    use std::cell::Cell;
    use std::rc::Rc;

    // -- scripted perception stub ------------------------------------------

    struct PerceptionScript {
        hit: Cell<Option<ObjectId>>,
        camera: Cell<CameraView>,
    }

    #[derive(Clone)]
    struct SharedPerception(Rc<PerceptionScript>);

    impl SharedPerception {
        fn new() -> Self {
            Self(Rc::new(PerceptionScript {
                hit: Cell::new(None),
                camera: Cell::new(camera_looking(Vec3::new(0.0, 0.0, -1.0))),
            }))
        }

        fn set_hit(&self, hit: Option<ObjectId>) {
            self.0.hit.set(hit);
        }

        fn look_at(&self, direction: Vec3) {
            self.0.camera.set(camera_looking(direction));
        }
    }

    impl Perception for SharedPerception {
        fn camera_view(&self) -> CameraView {
            self.0.camera.get()
        }

        fn hit_test(&self, _location: Vec2) -> Option<ObjectId> {
            self.0.hit.get()
        }
    }

    fn camera_looking(direction: Vec3) -> CameraView {
        let view = Mat4::look_at_rh(Vec3::ZERO, direction, Vec3::Y);
        CameraView {
            pose: Pose::IDENTITY,
            frustum: Frustum::from_camera(&view, 60_f32.to_radians(), 16.0 / 9.0, 0.1, 100.0),
        }
    }

    // -- asset fixtures ----------------------------------------------------

    fn cube_mesh(half: f32) -> MeshData {
        let mut positions = Vec::with_capacity(8);
        for &x in &[-half, half] {
            for &y in &[-half, half] {
                for &z in &[-half, half] {
                    positions.push([x, y, z]);
                }
            }
        }
        let indices = vec![
            0, 1, 3, 0, 3, 2, 4, 6, 7, 4, 7, 5, 0, 4, 5, 0, 5, 1, 2, 3, 7, 2, 7, 6, 0, 2, 6, 0,
            6, 4, 1, 5, 7, 1, 7, 3,
        ];
        MeshData::from_positions(positions, indices)
    }

    fn asset_with_cubes(halves: &[f32]) -> (NodeArena, NodeId) {
        let mut arena = NodeArena::new();
        let root = arena.add_root(Node {
            name: Some("asset".to_string()),
            ..Default::default()
        });
        for (slot, &half) in halves.iter().enumerate() {
            arena.add_child(
                root,
                Node {
                    name: Some(format!("cube{}", slot)),
                    mesh: Some(cube_mesh(half)),
                    ..Default::default()
                },
            );
        }
        (arena, root)
    }

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn engine_with_anchor() -> (PlacementOrchestrator<SharedPerception>, SharedPerception, AnchorId)
    {
        init_logs();
        let perception = SharedPerception::new();
        let mut engine =
            PlacementOrchestrator::new(perception.clone(), SessionConfig::default());
        let anchor = AnchorId(1);
        engine.on_anchor_event(AnchorEvent::Added {
            id: anchor,
            pose: Pose::from_position(Vec3::new(0.2, 0.0, -0.6)),
        });
        (engine, perception, anchor)
    }

    // -- placement ---------------------------------------------------------

    #[test]
    fn merge_normalize_place_end_to_end() {
        // Node A: 2x2x2 cube, node B: 1x1x1 cube; target extent 0.05 and a
        // source extent of 2 give a factor of 0.025.
        let (mut engine, _, anchor) = engine_with_anchor();
        let (arena, root) = asset_with_cubes(&[1.0, 0.5]);

        let id = engine.place_asset(arena, root, anchor).unwrap();
        let object = engine.object(id).unwrap();

        let merged = object.drawable.merged().expect("merge must succeed");
        assert_eq!(merged.attributes.len(), 2);
        assert_eq!(merged.elements.len(), 2);
        assert_relative_eq!(object.scale, 0.025);
        assert_eq!(object.position, Vec3::new(0.2, 0.0, -0.6));

        // Collision shape is built post-scale
        let (mins, maxs) = engine.collision().collider_local_bounds(id.as_user_data()).unwrap();
        assert_relative_eq!(mins[0], -0.025, epsilon = 1e-6);
        assert_relative_eq!(maxs[0], 0.025, epsilon = 1e-6);
    }

    #[test]
    fn place_without_anchor_fails_cleanly() {
        let perception = SharedPerception::new();
        let mut engine = PlacementOrchestrator::new(perception, SessionConfig::default());
        let (arena, root) = asset_with_cubes(&[1.0]);

        let result = engine.place_asset(arena, root, AnchorId(9));
        assert!(matches!(result, Err(EngineError::AnchorUnavailable)));
        // No half-initialized object left behind
        assert!(engine.current_objects().is_empty());
        assert!(engine.collision().is_empty());
    }

    #[test]
    fn merge_failure_keeps_unmerged_hierarchy() {
        let (mut engine, _, anchor) = engine_with_anchor();
        let mut arena = NodeArena::new();
        let root = arena.add_root(Node::default());
        arena.add_child(root, Node::default());

        let id = engine.place_asset(arena, root, anchor).unwrap();
        let object = engine.object(id).unwrap();
        assert!(matches!(object.drawable, Drawable::Unmerged { .. }));
        assert_relative_eq!(object.scale, 1.0);
        // Nothing to collide against
        assert!(!engine.collision().contains(id.as_user_data()));
    }

    #[test]
    fn degenerate_geometry_aborts_placement() {
        let (mut engine, _, anchor) = engine_with_anchor();
        let mut arena = NodeArena::new();
        let root = arena.add_root(Node::default());
        arena.add_child(
            root,
            Node {
                mesh: Some(MeshData::from_positions(
                    vec![[1.0; 3], [1.0; 3], [1.0; 3]],
                    vec![0, 1, 2],
                )),
                ..Default::default()
            },
        );

        let result = engine.place_asset(arena, root, anchor);
        assert!(matches!(result, Err(EngineError::Scene(_))));
        assert!(engine.current_objects().is_empty());
    }

    // -- gestures ----------------------------------------------------------

    #[test]
    fn rotate_subtracts_summed_deltas() {
        let (mut engine, perception, anchor) = engine_with_anchor();
        let (arena, root) = asset_with_cubes(&[1.0]);
        let id = engine.place_asset(arena, root, anchor).unwrap();
        perception.set_hit(Some(id));

        let deltas = [0.3_f32, -0.1, 0.25];
        engine.on_gesture_event(GestureEvent::rotate(
            GesturePhase::Began,
            Vec2::ZERO,
            0.0,
        ));
        for &delta in &deltas {
            engine.on_gesture_event(GestureEvent::rotate(
                GesturePhase::Changed,
                Vec2::ZERO,
                delta,
            ));
        }

        let expected = -deltas.iter().sum::<f32>();
        assert_relative_eq!(engine.object(id).unwrap().yaw, expected, epsilon = 1e-6);
    }

    #[test]
    fn pinch_scales_and_resyncs_physics_per_update() {
        // Asset authored at the target extent so placement leaves scale 1.0
        let (mut engine, perception, anchor) = engine_with_anchor();
        let (arena, root) = asset_with_cubes(&[0.025]);
        let id = engine.place_asset(arena, root, anchor).unwrap();
        perception.set_hit(Some(id));

        let syncs_after_place = engine.collision().sync_count();
        for ratio in [1.2_f32, 0.9] {
            engine.on_gesture_event(GestureEvent::pinch(
                GesturePhase::Changed,
                Vec2::ZERO,
                ratio,
            ));
        }

        assert_relative_eq!(engine.object(id).unwrap().scale, 1.08, epsilon = 1e-6);
        // One collision re-sync per applied delta, exactly
        assert_eq!(engine.collision().sync_count() - syncs_after_place, 2);

        let (mins, _) = engine.collision().collider_local_bounds(id.as_user_data()).unwrap();
        assert_relative_eq!(mins[0], -0.025 * 1.08, epsilon = 1e-6);
    }

    #[test]
    fn pan_translates_on_the_ground_plane() {
        let (mut engine, perception, anchor) = engine_with_anchor();
        let (arena, root) = asset_with_cubes(&[1.0]);
        let id = engine.place_asset(arena, root, anchor).unwrap();
        perception.set_hit(Some(id));

        let start = engine.object(id).unwrap().position;
        engine.on_gesture_event(GestureEvent::pan(
            GesturePhase::Changed,
            Vec2::ZERO,
            Vec2::new(10.0, 20.0),
        ));

        let position = engine.object(id).unwrap().position;
        assert_relative_eq!(position.x, start.x + 0.01, epsilon = 1e-6);
        assert_relative_eq!(position.y, start.y); // held on the plane
        assert_relative_eq!(position.z, start.z + 0.02, epsilon = 1e-6);

        // Collider follows without a shape rebuild
        let collider = engine.collision().collider_position(id.as_user_data()).unwrap();
        assert_relative_eq!(collider[0], position.x, epsilon = 1e-6);
    }

    #[test]
    fn long_press_removes_object_and_collider() {
        let (mut engine, perception, anchor) = engine_with_anchor();
        let (arena, root) = asset_with_cubes(&[1.0]);
        let id = engine.place_asset(arena, root, anchor).unwrap();
        perception.set_hit(Some(id));

        let outcome = engine.on_gesture_event(GestureEvent::long_press(Vec2::ZERO));
        assert_eq!(outcome, GestureOutcome::RemoveObject(id));
        assert!(engine.current_objects().is_empty());
        assert!(!engine.collision().contains(id.as_user_data()));
    }

    #[test]
    fn gesture_against_nothing_is_a_noop() {
        let (mut engine, perception, _) = engine_with_anchor();
        perception.set_hit(None);

        let outcome = engine.on_gesture_event(GestureEvent::pinch(
            GesturePhase::Changed,
            Vec2::ZERO,
            2.0,
        ));
        assert_eq!(outcome, GestureOutcome::Ignored);
    }

    // -- anchor visibility and the indicator -------------------------------

    #[test]
    fn indicator_follows_anchor_lifecycle() {
        let (mut engine, perception, anchor) = engine_with_anchor();
        let lost_at = Pose::from_position(Vec3::new(0.0, 0.0, 3.0));

        // Tracked: no indicator
        let report = engine.on_frame_tick(0.016);
        assert!(report.indicator.is_none());

        // Lost, last position behind the camera: visible arrow
        engine.on_anchor_event(AnchorEvent::Updated {
            id: anchor,
            pose: lost_at,
            is_tracked: false,
        });
        let report = engine.on_frame_tick(0.016);
        let state = report.indicator.expect("indicator attached while lost");
        assert!(state.visible);

        // Camera turns toward the last known position: arrow hides but the
        // marker stays attached
        perception.look_at(Vec3::new(0.0, 0.0, 1.0));
        let report = engine.on_frame_tick(0.016);
        assert!(!report.indicator.unwrap().visible);

        // Re-acquired: detached immediately
        engine.on_anchor_event(AnchorEvent::Updated {
            id: anchor,
            pose: lost_at,
            is_tracked: true,
        });
        let report = engine.on_frame_tick(0.016);
        assert!(report.indicator.is_none());
    }

    #[test]
    fn indicator_can_be_disabled() {
        let perception = SharedPerception::new();
        let config = SessionConfig {
            indicator_enabled: false,
            ..Default::default()
        };
        let mut engine = PlacementOrchestrator::new(perception, config);
        let anchor = AnchorId(4);
        engine.on_anchor_event(AnchorEvent::Added {
            id: anchor,
            pose: Pose::IDENTITY,
        });
        engine.on_anchor_event(AnchorEvent::Updated {
            id: anchor,
            pose: Pose::IDENTITY,
            is_tracked: false,
        });

        assert!(engine.on_frame_tick(0.016).indicator.is_none());
    }

    // -- background loading ------------------------------------------------

    struct CubeLoader;

    impl AssetLoader for CubeLoader {
        fn load(&self, source: &AssetSource) -> Result<(NodeArena, NodeId)> {
            if source.uri == "missing" {
                return Err(EngineError::AssetLoadFailure("record not found".into()));
            }
            let mut arena = NodeArena::new();
            let root = arena.add_root(Node::default());
            arena.add_child(
                root,
                Node {
                    mesh: Some(cube_mesh(1.0)),
                    ..Default::default()
                },
            );
            Ok((arena, root))
        }
    }

    #[test]
    fn background_load_places_on_next_tick() {
        init_logs();
        let perception = SharedPerception::new();
        let mut engine = PlacementOrchestrator::with_loader(
            perception,
            SessionConfig::default(),
            Arc::new(CubeLoader),
        );
        engine.on_anchor_event(AnchorEvent::Added {
            id: AnchorId(1),
            pose: Pose::IDENTITY,
        });

        let handle = engine
            .request_load(AssetSource::new("orange", "orange.glb"))
            .unwrap();
        handle.join().unwrap();

        let report = engine.on_frame_tick(0.016);
        assert_eq!(report.placed.len(), 1);
        let object = engine.object(report.placed[0]).unwrap();
        // Asset tree had no name; the source name is used
        assert_eq!(object.name.as_deref(), Some("orange"));
    }

    #[test]
    fn failed_load_places_nothing() {
        let perception = SharedPerception::new();
        let mut engine = PlacementOrchestrator::with_loader(
            perception,
            SessionConfig::default(),
            Arc::new(CubeLoader),
        );
        engine.on_anchor_event(AnchorEvent::Added {
            id: AnchorId(1),
            pose: Pose::IDENTITY,
        });

        let handle = engine
            .request_load(AssetSource::new("x", "missing"))
            .unwrap();
        handle.join().unwrap();

        let report = engine.on_frame_tick(0.016);
        assert!(report.placed.is_empty());
        assert!(engine.current_objects().is_empty());
    }

    #[test]
    fn request_load_without_loader_errors() {
        let (engine, _, _) = engine_with_anchor();
        let result = engine.request_load(AssetSource::new("a", "b"));
        assert!(matches!(result, Err(EngineError::LoaderUnavailable)));
    }
}
