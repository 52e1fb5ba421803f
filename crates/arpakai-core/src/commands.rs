//! Player commands sent from the input surface to the gameplay controller.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Populate the scene and start the countdown.
    StartRound,
    /// Launch a projectile along the current aim vector.
    Fire,
}
