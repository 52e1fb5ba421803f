//! Game loop thread: owns the controller and the scene, runs physics at the
//! configured rate and publishes snapshots.
//!
//! Player commands, scene contacts and timer ticks all arrive on one `mpsc`
//! channel, so the controller handles them strictly one after another.
//! The scene and controller are created inside the thread; only the
//! command sender leaves it.

use std::sync::mpsc;
use std::thread::JoinHandle;
use std::time::Instant;

use arpakai_core::commands::PlayerCommand;
use arpakai_core::enums::RoundPhase;
use arpakai_core::events::ContactEvent;
use arpakai_sim::ports::{DisplaySurface, SceneEngine, ScoreSlot, TrackingSession};
use arpakai_sim::{GameplayController, TickOutcome, WorldScene};

use crate::config::AppConfig;
use crate::state::{publish_snapshot, GameLoopCommand, SharedSnapshot};
use crate::timer::{spawn_round_timer, RoundTimer};

/// Owner's handle on the loop thread. Dropping it asks the loop to stop.
pub struct GameLoopHandle {
    commands: mpsc::Sender<GameLoopCommand>,
    thread: Option<JoinHandle<()>>,
}

impl GameLoopHandle {
    /// A sender for input producers.
    pub fn commands(&self) -> mpsc::Sender<GameLoopCommand> {
        self.commands.clone()
    }

    /// Send one command. Returns `false` once the loop has exited.
    pub fn send(&self, command: GameLoopCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    /// Wait for the loop to exit (after the round ends or on `Shutdown`).
    pub fn join(mut self) {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("game loop thread panicked");
            }
        }
    }
}

impl Drop for GameLoopHandle {
    fn drop(&mut self) {
        if self.thread.is_some() {
            let _ = self.commands.send(GameLoopCommand::Shutdown);
        }
    }
}

/// Spawns the game loop in a new thread.
pub fn spawn_game_loop<T, S, D>(
    config: AppConfig,
    tracking: T,
    score_slot: S,
    display: D,
    latest_snapshot: SharedSnapshot,
) -> std::io::Result<GameLoopHandle>
where
    T: TrackingSession + Send + 'static,
    S: ScoreSlot + Send + 'static,
    D: DisplaySurface + Send + 'static,
{
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let loop_tx = cmd_tx.clone();

    let thread = std::thread::Builder::new()
        .name("arpakai-game-loop".into())
        .spawn(move || {
            let mut scene = WorldScene::new();
            let contact_tx = loop_tx.clone();
            scene.on_contact(Box::new(move |event: ContactEvent| {
                if contact_tx.send(GameLoopCommand::Contact(event)).is_err() {
                    log::trace!("game loop gone, dropping contact");
                }
            }));
            let controller =
                GameplayController::new(config.round.clone(), scene, tracking, score_slot, display);
            run_game_loop(controller, &config, loop_tx, cmd_rx, &latest_snapshot);
        })?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        thread: Some(thread),
    })
}

/// The game loop. Runs until the round ends, a `Shutdown` command arrives,
/// or the channel disconnects.
fn run_game_loop<T, S, D>(
    mut controller: GameplayController<WorldScene, T, S, D>,
    config: &AppConfig,
    loop_tx: mpsc::Sender<GameLoopCommand>,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &SharedSnapshot,
) where
    T: TrackingSession,
    S: ScoreSlot,
    D: DisplaySurface,
{
    let step_interval = config.physics_interval();
    let dt = config.physics_dt();
    let mut timer: Option<RoundTimer> = None;
    let mut next_step_time = Instant::now();

    controller.tracking_mut().start();
    if config.auto_start {
        let _ = loop_tx.send(GameLoopCommand::Player(PlayerCommand::StartRound));
    }

    loop {
        // 1. Drain all pending commands
        let mut shutdown = false;
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => {
                    let before = controller.phase();
                    controller.handle_command(cmd);
                    if before == RoundPhase::NotStarted && controller.phase() == RoundPhase::Running
                    {
                        match spawn_round_timer(loop_tx.clone(), config.timer_period()) {
                            Ok(t) => timer = Some(t),
                            Err(err) => {
                                log::error!("Failed to start round timer: {}", err);
                                shutdown = true;
                            }
                        }
                    }
                }
                Ok(GameLoopCommand::Contact(event)) => controller.on_contact(event),
                Ok(GameLoopCommand::Tick) => {
                    if controller.tick() == TickOutcome::Ended {
                        if let Some(mut t) = timer.take() {
                            t.stop();
                        }
                    }
                }
                Ok(GameLoopCommand::Shutdown) => {
                    shutdown = true;
                    break;
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    shutdown = true;
                    break;
                }
            }
        }

        // 2. Advance physics; new contacts come back through the channel
        if controller.phase() == RoundPhase::Running {
            controller.engine_mut().step(dt);
            controller.reap_removed();
        }

        for event in controller.drain_events() {
            log::trace!("game event: {:?}", event);
        }

        // 3. Store latest snapshot for synchronous polling
        publish_snapshot(latest_snapshot, controller.snapshot());

        if shutdown || controller.phase() == RoundPhase::Ended {
            break;
        }

        // 4. Sleep until next step
        next_step_time += step_interval;
        let now = Instant::now();
        if next_step_time > now {
            std::thread::sleep(next_step_time - now);
        } else if now - next_step_time > step_interval * 2 {
            // Too far behind, reset to avoid catch-up spiral
            next_step_time = now;
        }
    }

    if let Some(mut t) = timer.take() {
        t.stop();
    }
    controller.tracking_mut().pause();
    log::debug!("Game loop exiting in phase {:?}", controller.phase());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use arpakai_core::config::RoundConfig;
    use arpakai_sim::ports::PersistError;

    use crate::display::{ChannelDisplay, DisplayUpdate};
    use crate::state::{new_shared_snapshot, read_snapshot};
    use crate::tracking::ScriptedTracking;

    #[derive(Clone, Default)]
    struct SharedSlot(Arc<Mutex<Vec<u32>>>);

    impl ScoreSlot for SharedSlot {
        fn set_final_score(&mut self, score: u32) -> Result<(), PersistError> {
            self.0.lock().unwrap().push(score);
            Ok(())
        }
    }

    fn fast_config(round_seconds: u32) -> AppConfig {
        AppConfig {
            round: RoundConfig {
                target_count: 10,
                round_seconds,
                ..Default::default()
            },
            timer_period_secs: 0.01,
            physics_rate_hz: 200,
            auto_start: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::Player(PlayerCommand::StartRound))
            .unwrap();
        tx.send(GameLoopCommand::Player(PlayerCommand::Fire)).unwrap();
        tx.send(GameLoopCommand::Tick).unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            commands,
            vec![
                GameLoopCommand::Player(PlayerCommand::StartRound),
                GameLoopCommand::Player(PlayerCommand::Fire),
                GameLoopCommand::Tick,
                GameLoopCommand::Shutdown,
            ]
        );
    }

    #[test]
    fn test_round_runs_to_completion() {
        let slot = SharedSlot::default();
        let (display_tx, display_rx) = mpsc::channel();
        let snapshot = new_shared_snapshot();

        let handle = spawn_game_loop(
            fast_config(3),
            ScriptedTracking::new(),
            slot.clone(),
            ChannelDisplay::new(display_tx),
            snapshot.clone(),
        )
        .unwrap();
        assert!(handle.send(GameLoopCommand::Player(PlayerCommand::StartRound)));
        handle.join();

        let snap = read_snapshot(&snapshot).unwrap();
        assert_eq!(snap.phase, RoundPhase::Ended);
        assert_eq!(snap.seconds_remaining, 0);
        assert_eq!(*slot.0.lock().unwrap(), vec![snap.score]);

        let updates: Vec<_> = display_rx.try_iter().collect();
        let countdown: Vec<_> = updates
            .iter()
            .filter_map(|u| match u {
                DisplayUpdate::SecondsRemaining(s) => Some(*s),
                _ => None,
            })
            .collect();
        assert_eq!(countdown, vec![3, 2, 1, 0]);
        assert_eq!(
            updates.last(),
            Some(&DisplayUpdate::RoundEnded {
                final_score: snap.score
            })
        );
    }

    #[test]
    fn test_fire_commands_reach_controller() {
        let (display_tx, _display_rx) = mpsc::channel();
        let snapshot = new_shared_snapshot();
        let tracking = ScriptedTracking::new();
        // Aim straight up, away from every target.
        tracking.look(glam::Vec3::new(0.0, 50.0, 0.0), glam::Vec3::Y);

        let handle = spawn_game_loop(
            fast_config(2),
            tracking,
            SharedSlot::default(),
            ChannelDisplay::new(display_tx),
            snapshot.clone(),
        )
        .unwrap();
        handle.send(GameLoopCommand::Player(PlayerCommand::StartRound));
        for _ in 0..3 {
            handle.send(GameLoopCommand::Player(PlayerCommand::Fire));
        }
        handle.join();

        let snap = read_snapshot(&snapshot).unwrap();
        assert_eq!(snap.projectiles_fired, 3);
        assert_eq!(snap.score, 0);
        assert_eq!(snap.targets_remaining, 10);
    }

    #[test]
    fn test_shutdown_before_start() {
        let (display_tx, _display_rx) = mpsc::channel();
        let snapshot = new_shared_snapshot();
        let slot = SharedSlot::default();

        let handle = spawn_game_loop(
            fast_config(30),
            ScriptedTracking::new(),
            slot.clone(),
            ChannelDisplay::new(display_tx),
            snapshot.clone(),
        )
        .unwrap();
        handle.send(GameLoopCommand::Shutdown);
        handle.join();

        let snap = read_snapshot(&snapshot).unwrap();
        assert_eq!(snap.phase, RoundPhase::NotStarted);
        assert!(slot.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_auto_start() {
        let (display_tx, _display_rx) = mpsc::channel();
        let snapshot = new_shared_snapshot();
        let config = AppConfig {
            auto_start: true,
            ..fast_config(1)
        };

        let handle = spawn_game_loop(
            config,
            ScriptedTracking::new(),
            SharedSlot::default(),
            ChannelDisplay::new(display_tx),
            snapshot.clone(),
        )
        .unwrap();
        handle.join();

        let snap = read_snapshot(&snapshot).unwrap();
        assert_eq!(snap.phase, RoundPhase::Ended);
    }
}
