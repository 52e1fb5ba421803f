//! ECS components for entities in the reference scene engine.
//!
//! Components are plain data structs with no methods.
//! `Transform`, `EntityKind` and `CollisionFilter` are attached directly as
//! components as well.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::Spin;

/// Linear dynamics state of a simulated body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    /// Linear velocity (m/s).
    pub velocity: Vec3,
    /// Mass (kg), always > 0.
    pub mass: f32,
    pub affected_by_gravity: bool,
}

/// Bounding sphere used for contact detection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub radius: f32,
}

/// Perpetual rotation animation attached to an entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spinning(pub Spin);
