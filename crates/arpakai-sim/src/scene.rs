//! Reference scene engine.
//!
//! `WorldScene` owns a hecs ECS world and implements `SceneEngine` with a
//! deliberately naive physics model: gravity, linear impulses, spin
//! animation and sphere contacts. Completely headless, enabling
//! deterministic testing of the gameplay controller.

use std::collections::HashSet;

use glam::{Quat, Vec3};
use hecs::{Entity, World};

use arpakai_core::collision::CollisionFilter;
use arpakai_core::components::{Collider, RigidBody, Spinning};
use arpakai_core::enums::EntityKind;
use arpakai_core::events::ContactEvent;
use arpakai_core::types::{EntityId, PhysicsProps, Spin, Transform};

use crate::ports::{ContactCallback, SceneEngine};
use crate::systems;
use crate::systems::contact::ContactPair;

/// Handle the gameplay layer sees for a hecs entity.
pub fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

fn hecs_entity(id: EntityId) -> Option<Entity> {
    Entity::from_bits(id.0)
}

#[derive(Default)]
pub struct WorldScene {
    world: World,
    touching: HashSet<ContactPair>,
    contact_buffer: Vec<ContactEvent>,
    despawn_buffer: Vec<Entity>,
    listeners: Vec<ContactCallback>,
    culled: Vec<EntityId>,
}

impl WorldScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the simulation by `dt` seconds and deliver new contacts to
    /// every registered listener. Returns the number of contacts reported.
    pub fn step(&mut self, dt: f32) -> usize {
        // 1. Gravity + integration
        systems::movement::run(&mut self.world, dt);
        // 2. Spin animation
        systems::spin::run(&mut self.world, dt);
        // 3. Contact detection
        systems::contact::run(&self.world, &mut self.touching, &mut self.contact_buffer);
        // 4. Out-of-bounds cull
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.touching,
            &mut self.culled,
        );

        let reported = self.contact_buffer.len();
        for event in self.contact_buffer.drain(..) {
            for listener in &mut self.listeners {
                listener(event);
            }
        }
        reported
    }

    /// Read-only access to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn contains(&self, id: EntityId) -> bool {
        hecs_entity(id).is_some_and(|e| self.world.contains(e))
    }

    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        let entity = hecs_entity(id)?;
        self.world.get::<&EntityKind>(entity).ok().map(|kind| *kind)
    }

    pub fn transform_of(&self, id: EntityId) -> Option<Transform> {
        let entity = hecs_entity(id)?;
        self.world.get::<&Transform>(entity).ok().map(|t| *t)
    }

    pub fn position_of(&self, id: EntityId) -> Option<Vec3> {
        self.transform_of(id).map(|t| t.position)
    }

    pub fn rotation_of(&self, id: EntityId) -> Option<Quat> {
        self.transform_of(id).map(|t| t.rotation)
    }

    pub fn velocity_of(&self, id: EntityId) -> Option<Vec3> {
        let entity = hecs_entity(id)?;
        self.world.get::<&RigidBody>(entity).ok().map(|b| b.velocity)
    }

    pub fn filter_of(&self, id: EntityId) -> Option<CollisionFilter> {
        let entity = hecs_entity(id)?;
        self.world.get::<&CollisionFilter>(entity).ok().map(|f| *f)
    }

    pub fn spin_of(&self, id: EntityId) -> Option<Spin> {
        let entity = hecs_entity(id)?;
        self.world.get::<&Spinning>(entity).ok().map(|s| s.0)
    }

    /// Number of live entities of `kind`.
    pub fn count_of(&self, kind: EntityKind) -> usize {
        let mut query = self.world.query::<&EntityKind>();
        query.iter().filter(|(_, k)| **k == kind).count()
    }

    pub fn entity_count(&self) -> usize {
        self.world.len() as usize
    }

    /// Move an entity, e.g. to stage a contact. Returns `false` if it is gone.
    pub fn set_position(&mut self, id: EntityId, position: Vec3) -> bool {
        let Some(entity) = hecs_entity(id) else {
            return false;
        };
        match self.world.get::<&mut Transform>(entity) {
            Ok(mut transform) => {
                transform.position = position;
                true
            }
            Err(_) => false,
        }
    }
}

impl SceneEngine for WorldScene {
    fn spawn_entity(
        &mut self,
        kind: EntityKind,
        transform: Transform,
        physics: PhysicsProps,
    ) -> EntityId {
        let body = RigidBody {
            velocity: Vec3::ZERO,
            mass: physics.mass.max(f32::EPSILON),
            affected_by_gravity: physics.affected_by_gravity,
        };
        let entity = self.world.spawn((
            kind,
            transform,
            body,
            Collider {
                radius: physics.radius,
            },
            CollisionFilter::for_group(kind.collision_group()),
        ));
        entity_id(entity)
    }

    fn remove_entity(&mut self, id: EntityId) -> bool {
        let Some(entity) = hecs_entity(id) else {
            return false;
        };
        let removed = self.world.despawn(entity).is_ok();
        if removed {
            systems::contact::forget_entity(&mut self.touching, id);
        }
        removed
    }

    fn apply_impulse(&mut self, id: EntityId, impulse: Vec3) {
        let Some(entity) = hecs_entity(id) else {
            return;
        };
        if let Ok(mut body) = self.world.get::<&mut RigidBody>(entity) {
            let mass = body.mass;
            body.velocity += impulse / mass;
        }
    }

    fn set_collision_filter(&mut self, id: EntityId, filter: CollisionFilter) {
        if let Some(entity) = hecs_entity(id) {
            let _ = self.world.insert_one(entity, filter);
        }
    }

    fn run_spin(&mut self, id: EntityId, spin: Spin) {
        if let Some(entity) = hecs_entity(id) {
            let _ = self.world.insert_one(entity, Spinning(spin));
        }
    }

    fn on_contact(&mut self, callback: ContactCallback) {
        self.listeners.push(callback);
    }

    fn drain_removed(&mut self) -> Vec<EntityId> {
        std::mem::take(&mut self.culled)
    }
}
