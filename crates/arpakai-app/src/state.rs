//! State shared between the game loop thread and the rest of the app.

use std::sync::{Arc, Mutex};

use arpakai_core::commands::PlayerCommand;
use arpakai_core::events::ContactEvent;
use arpakai_core::state::RoundSnapshot;

/// Messages consumed by the game loop thread.
///
/// Player input, engine contacts and timer ticks all arrive on the same
/// channel, so the controller sees them one at a time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the controller.
    Player(PlayerCommand),
    /// A contact reported by the scene engine.
    Contact(ContactEvent),
    /// One period of the round timer elapsed.
    Tick,
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest round snapshot for synchronous polling. Replaced whole on every
/// update, so a reader never sees a half-written score.
pub type SharedSnapshot = Arc<Mutex<Option<RoundSnapshot>>>;

pub fn new_shared_snapshot() -> SharedSnapshot {
    Arc::new(Mutex::new(None))
}

/// Store `snapshot`. A poisoned lock is recovered rather than dropping the update.
pub fn publish_snapshot(shared: &SharedSnapshot, snapshot: RoundSnapshot) {
    let mut lock = match shared.lock() {
        Ok(lock) => lock,
        Err(poisoned) => poisoned.into_inner(),
    };
    *lock = Some(snapshot);
}

pub fn read_snapshot(shared: &SharedSnapshot) -> Option<RoundSnapshot> {
    shared.lock().ok().and_then(|lock| lock.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpakai_core::enums::RoundPhase;

    #[test]
    fn test_shared_snapshot_starts_empty() {
        let shared = new_shared_snapshot();
        assert!(read_snapshot(&shared).is_none());
    }

    #[test]
    fn test_publish_replaces_snapshot() {
        let shared = new_shared_snapshot();
        publish_snapshot(
            &shared,
            RoundSnapshot {
                score: 5,
                ..Default::default()
            },
        );
        publish_snapshot(
            &shared,
            RoundSnapshot {
                score: 10,
                phase: RoundPhase::Ended,
                ..Default::default()
            },
        );
        let snap = read_snapshot(&shared).unwrap();
        assert_eq!(snap.score, 10);
        assert_eq!(snap.phase, RoundPhase::Ended);
    }
}
