//! Spin animation system.

use glam::Quat;
use hecs::World;

use arpakai_core::components::Spinning;
use arpakai_core::types::Transform;

/// Rotate every spinning entity by its angular speed times `dt`.
pub fn run(world: &mut World, dt: f32) {
    for (_entity, (transform, spinning)) in world.query_mut::<(&mut Transform, &Spinning)>() {
        let axis = spinning.0.axis.normalize_or_zero();
        if axis == glam::Vec3::ZERO {
            continue;
        }
        let delta = Quat::from_axis_angle(axis, spinning.0.angular_speed() * dt);
        transform.rotation = (delta * transform.rotation).normalize();
    }
}
