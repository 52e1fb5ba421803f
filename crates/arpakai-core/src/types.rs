//! Fundamental geometric and entity types.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::{FALLBACK_AIM_DIRECTION, FALLBACK_AIM_POSITION};

/// Opaque handle to an entity living in the scene engine.
///
/// The gameplay layer never owns geometry; it only holds handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Position and orientation in world space (meters).
/// y is up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

/// Camera pose reported by the tracking session: the camera's 4x4 world transform.
///
/// Column-major. `z_axis` is the camera's backward-facing basis vector,
/// `w_axis` holds the translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub matrix: Mat4,
}

impl CameraPose {
    pub fn new(matrix: Mat4) -> Self {
        Self { matrix }
    }

    /// Pose of a camera at `position` looking along `forward`.
    ///
    /// The camera is turned from its rest orientation (looking down -Z) by
    /// the shortest arc, so straight up and straight down are valid. A zero
    /// or non-finite `forward` leaves it at rest.
    pub fn looking_to(position: Vec3, forward: Vec3) -> Self {
        let forward = forward.try_normalize().unwrap_or(Vec3::NEG_Z);
        let rotation = Quat::from_rotation_arc(Vec3::NEG_Z, forward);
        Self {
            matrix: Mat4::from_rotation_translation(rotation, position),
        }
    }
}

/// Direction and origin used to launch a projectile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AimVector {
    pub direction: Vec3,
    pub position: Vec3,
}

impl AimVector {
    /// Aim used whenever no camera pose is available.
    pub const FALLBACK: AimVector = AimVector {
        direction: FALLBACK_AIM_DIRECTION,
        position: FALLBACK_AIM_POSITION,
    };
}

/// Physics properties requested when spawning an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsProps {
    pub affected_by_gravity: bool,
    /// Radius of the bounding sphere used for contacts (meters).
    pub radius: f32,
    /// Mass in kilograms. Impulses are divided by this.
    pub mass: f32,
}

/// Perpetual rotation animation: one full revolution about `axis` every `period_secs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    pub axis: Vec3,
    pub period_secs: f32,
}

impl Spin {
    /// Angular speed in radians per second.
    pub fn angular_speed(&self) -> f32 {
        if self.period_secs <= 0.0 {
            0.0
        } else {
            std::f32::consts::TAU / self.period_secs
        }
    }
}

/// Axis-aligned box that target positions are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl SpawnBounds {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Inclusive containment check on every axis.
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// True when min <= max on every axis.
    pub fn is_valid(&self) -> bool {
        self.min.cmple(self.max).all() && self.min.is_finite() && self.max.is_finite()
    }
}
