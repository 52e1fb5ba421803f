//! Headless ARPAKAI runner.
//!
//! Wires the gameplay controller to the reference scene, a round timer
//! thread, a JSON score slot and a channel-backed display, and runs the
//! whole round on a dedicated game-loop thread.

pub mod config;
pub mod display;
pub mod game_loop;
pub mod input;
pub mod score_slot;
pub mod state;
pub mod timer;
pub mod tracking;

pub use arpakai_core as core;
