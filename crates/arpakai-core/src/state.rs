//! Round state owned by the gameplay controller, and the snapshot shown to displays.

use serde::{Deserialize, Serialize};

use crate::enums::RoundPhase;

/// Mutable state of the current round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub score: u32,
    pub seconds_remaining: u32,
    pub phase: RoundPhase,
}

impl RoundState {
    pub fn running(seconds: u32) -> Self {
        Self {
            score: 0,
            seconds_remaining: seconds,
            phase: RoundPhase::Running,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == RoundPhase::Running
    }
}

/// Complete visible state of a round, replaced whole on every update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub phase: RoundPhase,
    pub score: u32,
    pub seconds_remaining: u32,
    pub targets_remaining: u32,
    pub bonus_targets_remaining: u32,
    pub projectiles_fired: u32,
}
