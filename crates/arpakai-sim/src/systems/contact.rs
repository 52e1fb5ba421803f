//! Contact detection: sphere overlap between bodies whose filters allow it.
//!
//! Contacts have "begin" semantics. A pair is reported on the step it
//! starts touching and not again until it has separated.

use std::collections::HashSet;

use glam::Vec3;
use hecs::World;

use arpakai_core::collision::CollisionFilter;
use arpakai_core::components::Collider;
use arpakai_core::enums::EntityKind;
use arpakai_core::events::{ContactBody, ContactEvent};
use arpakai_core::types::{EntityId, Transform};

use crate::scene::entity_id;

/// Unordered pair of touching entities, smaller id first.
pub type ContactPair = (EntityId, EntityId);

pub fn pair_key(a: EntityId, b: EntityId) -> ContactPair {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

struct Candidate {
    id: EntityId,
    kind: EntityKind,
    position: Vec3,
    radius: f32,
    filter: CollisionFilter,
}

/// Detect new contacts, appending them to `out`, and update `touching`.
pub fn run(world: &World, touching: &mut HashSet<ContactPair>, out: &mut Vec<ContactEvent>) {
    let mut candidates: Vec<Candidate> = {
        let mut query =
            world.query::<(&EntityKind, &Transform, &Collider, &CollisionFilter)>();
        query
            .iter()
            .map(|(entity, (kind, transform, collider, filter))| Candidate {
                id: entity_id(entity),
                kind: *kind,
                position: transform.position,
                radius: collider.radius,
                filter: *filter,
            })
            .collect()
    };
    // Stable order so contact reports are deterministic.
    candidates.sort_by_key(|c| c.id);

    for (i, a) in candidates.iter().enumerate() {
        for b in &candidates[i + 1..] {
            if !a.filter.reports_contact_with(&b.filter) {
                continue;
            }
            let key = pair_key(a.id, b.id);
            let reach = a.radius + b.radius;
            if a.position.distance_squared(b.position) <= reach * reach {
                if touching.insert(key) {
                    out.push(ContactEvent::new(
                        ContactBody::new(a.id, a.kind),
                        ContactBody::new(b.id, b.kind),
                    ));
                }
            } else {
                touching.remove(&key);
            }
        }
    }
}

/// Forget every touching pair that involves `entity`.
pub fn forget_entity(touching: &mut HashSet<ContactPair>, entity: EntityId) {
    touching.retain(|(a, b)| *a != entity && *b != entity);
}
