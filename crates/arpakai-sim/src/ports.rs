//! Collaborator interfaces the gameplay controller is written against.
//!
//! The scene engine, AR tracking session, score persistence and display are
//! all supplied from outside; the controller only calls these traits.

use std::fmt;

use glam::Vec3;

use arpakai_core::collision::CollisionFilter;
use arpakai_core::enums::{EntityKind, TrackingStatus};
use arpakai_core::events::ContactEvent;
use arpakai_core::types::{CameraPose, EntityId, PhysicsProps, Spin, Transform};

/// Listener invoked by the engine for every reported contact.
pub type ContactCallback = Box<dyn FnMut(ContactEvent) + Send>;

/// 3D scene and physics engine.
pub trait SceneEngine {
    /// Create an entity and insert it into the active scene.
    fn spawn_entity(&mut self, kind: EntityKind, transform: Transform, physics: PhysicsProps)
        -> EntityId;

    /// Remove an entity. Removing an entity that is already gone is a no-op
    /// and returns `false`.
    fn remove_entity(&mut self, entity: EntityId) -> bool;

    /// Instantaneous change in momentum through the centre of mass.
    fn apply_impulse(&mut self, entity: EntityId, impulse: Vec3);

    /// Instantaneous change in momentum applied at a body-space offset.
    /// Engines without angular dynamics may treat this as `apply_impulse`.
    fn apply_impulse_at(&mut self, entity: EntityId, impulse: Vec3, _offset: Vec3) {
        self.apply_impulse(entity, impulse);
    }

    fn set_collision_filter(&mut self, entity: EntityId, filter: CollisionFilter);

    /// Start a looping rotation animation. Cosmetic only.
    fn run_spin(&mut self, entity: EntityId, spin: Spin);

    /// Register a contact listener.
    fn on_contact(&mut self, callback: ContactCallback);

    /// Entities the engine removed on its own (e.g. out of bounds) since the
    /// last call. Entities removed through `remove_entity` are not reported.
    fn drain_removed(&mut self) -> Vec<EntityId> {
        Vec::new()
    }
}

/// AR camera tracking session.
pub trait TrackingSession {
    /// Latest camera pose, or `None` while tracking is unavailable.
    fn current_camera_pose(&self) -> Option<CameraPose>;

    fn status(&self) -> TrackingStatus {
        TrackingStatus::Normal
    }

    /// Lifecycle hook: view became visible.
    fn start(&mut self) {}

    /// Lifecycle hook: view is about to disappear.
    fn pause(&mut self) {}
}

#[derive(Debug)]
pub enum PersistError {
    Io(std::io::Error),
    Encode(String),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::Io(err) => write!(f, "score slot io error: {err}"),
            PersistError::Encode(message) => write!(f, "score slot encode error: {message}"),
        }
    }
}

impl std::error::Error for PersistError {}

impl From<std::io::Error> for PersistError {
    fn from(err: std::io::Error) -> Self {
        PersistError::Io(err)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(err: serde_json::Error) -> Self {
        PersistError::Encode(err.to_string())
    }
}

/// Single named integer slot holding the last final score.
pub trait ScoreSlot {
    fn set_final_score(&mut self, score: u32) -> Result<(), PersistError>;
}

/// Presentation surface for the countdown and score.
///
/// Implementations are responsible for getting the values onto whatever
/// thread owns the on-screen state.
pub trait DisplaySurface {
    fn show_seconds_remaining(&mut self, seconds: u32);
    fn show_score(&mut self, score: u32);
    fn round_ended(&mut self, final_score: u32);
}
