//! Entity spawn factories for populating the scene.
//!
//! Creates targets and projectiles with the physics properties and
//! collision filters the scoring rules depend on.

use glam::Vec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use arpakai_core::collision::CollisionFilter;
use arpakai_core::constants::*;
use arpakai_core::enums::EntityKind;
use arpakai_core::types::{EntityId, PhysicsProps, SpawnBounds, Spin, Transform};

use crate::ports::SceneEngine;

/// Kind of target for 1-indexed spawn slot `slot`.
/// Every tenth slot is a bonus target; slots 1..=9 never are.
pub fn target_kind_for_slot(slot: u32) -> EntityKind {
    if slot >= BONUS_INTERVAL && slot % BONUS_INTERVAL == 0 {
        EntityKind::BonusTarget
    } else {
        EntityKind::SimpleTarget
    }
}

/// Number of bonus targets among `count` slots.
pub fn bonus_count(count: u32) -> u32 {
    count / BONUS_INTERVAL
}

/// Uniform random point inside `bounds`, each axis drawn independently.
pub fn random_target_position(rng: &mut ChaCha8Rng, bounds: &SpawnBounds) -> Vec3 {
    Vec3::new(
        rng.gen_range(bounds.min.x..=bounds.max.x),
        rng.gen_range(bounds.min.y..=bounds.max.y),
        rng.gen_range(bounds.min.z..=bounds.max.z),
    )
}

pub fn target_physics(kind: EntityKind) -> PhysicsProps {
    let radius = match kind {
        EntityKind::BonusTarget => BONUS_TARGET_RADIUS,
        _ => SIMPLE_TARGET_RADIUS,
    };
    PhysicsProps {
        affected_by_gravity: true,
        radius,
        mass: TARGET_MASS,
    }
}

pub fn projectile_physics() -> PhysicsProps {
    PhysicsProps {
        affected_by_gravity: false,
        radius: PROJECTILE_RADIUS,
        mass: PROJECTILE_MASS,
    }
}

/// Perpetual spin given to every target: one revolution about +Y per period.
pub fn target_spin() -> Spin {
    Spin {
        axis: Vec3::Y,
        period_secs: TARGET_SPIN_PERIOD_SECS,
    }
}

/// Spawn `count` targets at random positions inside `bounds`.
pub fn spawn_targets<E: SceneEngine + ?Sized>(
    engine: &mut E,
    rng: &mut ChaCha8Rng,
    count: u32,
    bounds: &SpawnBounds,
) -> Vec<(EntityId, EntityKind)> {
    let mut spawned = Vec::with_capacity(count as usize);
    for slot in 1..=count {
        let kind = target_kind_for_slot(slot);
        let position = random_target_position(rng, bounds);
        let entity = spawn_target(engine, kind, position);
        spawned.push((entity, kind));
    }
    spawned
}

/// Spawn a single target of `kind` at `position`.
pub fn spawn_target<E: SceneEngine + ?Sized>(
    engine: &mut E,
    kind: EntityKind,
    position: Vec3,
) -> EntityId {
    let entity = engine.spawn_entity(kind, Transform::from_position(position), target_physics(kind));
    engine.set_collision_filter(entity, CollisionFilter::for_group(kind.collision_group()));
    engine.run_spin(entity, target_spin());
    entity
}

/// Spawn a projectile at rest at `position`. The caller applies the launch impulses.
pub fn spawn_projectile<E: SceneEngine + ?Sized>(engine: &mut E, position: Vec3) -> EntityId {
    let kind = EntityKind::Projectile;
    let entity = engine.spawn_entity(kind, Transform::from_position(position), projectile_physics());
    engine.set_collision_filter(entity, CollisionFilter::for_group(kind.collision_group()));
    entity
}
