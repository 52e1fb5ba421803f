//! Gameplay layer for ARPAKAI.
//!
//! Owns the round rules (spawning, aiming, firing, contact scoring, the
//! countdown) behind the collaborator ports in `ports`, and ships a headless
//! hecs-backed `WorldScene` so a round can run without a real AR engine.

pub mod aim;
pub mod controller;
pub mod ports;
pub mod scene;
pub mod systems;
pub mod world_setup;

pub use arpakai_core as core;
pub use controller::{GameplayController, TickOutcome};
pub use scene::WorldScene;
