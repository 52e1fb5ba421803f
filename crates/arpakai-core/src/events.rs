//! Events reported by the scene engine and emitted by the gameplay controller.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::{CollisionGroup, EntityKind};
use crate::types::EntityId;

/// One participant of a physics contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactBody {
    pub id: EntityId,
    pub kind: EntityKind,
    pub group: CollisionGroup,
}

impl ContactBody {
    pub fn new(id: EntityId, kind: EntityKind) -> Self {
        Self {
            id,
            kind,
            group: kind.collision_group(),
        }
    }
}

/// Two entities began touching. Order of `a` and `b` carries no meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub a: ContactBody,
    pub b: ContactBody,
}

impl ContactEvent {
    pub fn new(a: ContactBody, b: ContactBody) -> Self {
        Self { a, b }
    }

    pub fn bodies(&self) -> [ContactBody; 2] {
        [self.a, self.b]
    }

    pub fn involves_target(&self) -> bool {
        self.a.group == CollisionGroup::Target || self.b.group == CollisionGroup::Target
    }
}

/// Gameplay events for UI and audio feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    RoundStarted {
        targets: u32,
        bonus_targets: u32,
        seconds: u32,
    },
    ProjectileFired {
        entity: EntityId,
        direction: Vec3,
        origin: Vec3,
    },
    /// A contact removed a target.
    TargetHit {
        target: EntityId,
        kind: EntityKind,
        points: u32,
    },
    ScoreChanged { score: u32 },
    TimeChanged { seconds_remaining: u32 },
    RoundEnded { final_score: u32 },
}
