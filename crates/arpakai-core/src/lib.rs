//! Core types and definitions for the ARPAKAI target-shooting game.
//!
//! This crate defines the vocabulary shared across all other crates:
//! entity kinds, collision groups, components, commands, events, round
//! state, and constants. It has no dependency on any engine or runtime.

pub mod collision;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
