//! Movement system: gravity and velocity integration.

use hecs::World;

use arpakai_core::components::RigidBody;
use arpakai_core::constants::GRAVITY;
use arpakai_core::types::Transform;

/// Semi-implicit Euler step: gravity into velocity, velocity into position.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (transform, body)) in world.query_mut::<(&mut Transform, &mut RigidBody)>() {
        if body.affected_by_gravity {
            body.velocity += GRAVITY * dt;
        }
        transform.position += body.velocity * dt;
    }
}
