//! Cleanup system: removes entities that left the playable volume.

use std::collections::HashSet;

use glam::Vec3;
use hecs::{Entity, World};

use arpakai_core::constants::{CULL_DISTANCE, KILL_PLANE_Y};
use arpakai_core::types::{EntityId, Transform};

use crate::scene::entity_id;
use crate::systems::contact::{self, ContactPair};

/// Whether an entity at `position` should be culled.
pub fn out_of_bounds(position: Vec3) -> bool {
    !position.is_finite()
        || position.y < KILL_PLANE_Y
        || position.length_squared() > CULL_DISTANCE * CULL_DISTANCE
}

/// Despawn entities below `KILL_PLANE_Y`, beyond `CULL_DISTANCE`, or with a
/// non-finite position. Culled ids are appended to `culled`.
/// Returns how many were removed.
pub fn run(
    world: &mut World,
    despawn_buffer: &mut Vec<Entity>,
    touching: &mut HashSet<ContactPair>,
    culled: &mut Vec<EntityId>,
) -> usize {
    despawn_buffer.clear();

    for (entity, transform) in world.query_mut::<&Transform>() {
        if out_of_bounds(transform.position) {
            despawn_buffer.push(entity);
        }
    }

    let removed = despawn_buffer.len();
    for entity in despawn_buffer.drain(..) {
        let id = entity_id(entity);
        contact::forget_entity(touching, id);
        if world.despawn(entity).is_ok() {
            culled.push(id);
        }
    }
    if removed > 0 {
        log::trace!("culled {} out-of-bounds entities", removed);
    }
    removed
}
