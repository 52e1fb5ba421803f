//! Enumeration types used throughout the game.

use serde::{Deserialize, Serialize};

/// What an entity is, from the gameplay point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Fired by the player along the camera's forward vector.
    Projectile,
    /// Ordinary target, worth nothing when hit.
    SimpleTarget,
    /// Bonus target, worth `BONUS_POINTS` when hit.
    BonusTarget,
}

impl EntityKind {
    /// Collision group this kind of entity belongs to.
    pub fn collision_group(self) -> CollisionGroup {
        match self {
            EntityKind::Projectile => CollisionGroup::Projectile,
            EntityKind::SimpleTarget | EntityKind::BonusTarget => CollisionGroup::Target,
        }
    }

    pub fn is_target(self) -> bool {
        self.collision_group() == CollisionGroup::Target
    }
}

/// Partition of entities used to decide which contacts are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CollisionGroup {
    Projectile,
    Target,
}

/// Round lifecycle. `Ended` is terminal; a new round needs a new controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    NotStarted,
    Running,
    Ended,
}

/// Health of the AR tracking session as reported by the session itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingStatus {
    #[default]
    Normal,
    /// Session interrupted (app backgrounded, camera in use elsewhere).
    Interrupted,
    /// Session failed with a message from the tracking backend.
    Failed(String),
}
