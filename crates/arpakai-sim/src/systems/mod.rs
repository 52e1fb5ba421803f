//! ECS systems run by the reference scene each physics step.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or in buffers
//! handed in by `WorldScene`.

pub mod cleanup;
pub mod contact;
pub mod movement;
pub mod spin;
