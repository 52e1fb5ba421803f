//! Gameplay controller: the single owner of round state.
//!
//! `GameplayController` spawns targets, turns the camera pose into a fire
//! vector, launches projectiles, scores contacts, and runs the countdown.
//! It never touches geometry directly; everything goes through the ports.
//! Contact and timer events are expected to be delivered serially (the app
//! feeds both through one channel), so round state needs no lock.

use std::collections::{HashMap, HashSet};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use arpakai_core::collision::should_notify;
use arpakai_core::commands::PlayerCommand;
use arpakai_core::config::RoundConfig;
use arpakai_core::constants::FIRE_IMPULSE_OFFSET;
use arpakai_core::enums::{EntityKind, RoundPhase, TrackingStatus};
use arpakai_core::events::{ContactEvent, GameEvent};
use arpakai_core::state::{RoundSnapshot, RoundState};
use arpakai_core::types::{AimVector, EntityId};

use crate::aim;
use crate::ports::{DisplaySurface, SceneEngine, ScoreSlot, TrackingSession};
use crate::world_setup;

/// Result of one countdown tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Round is still running.
    Continue,
    /// This tick ended the round. The caller should stop its timer.
    Ended,
    /// Round not running; the tick was ignored.
    Idle,
}

pub struct GameplayController<E, T, S, D> {
    config: RoundConfig,
    engine: E,
    tracking: T,
    score_slot: S,
    display: D,
    rng: ChaCha8Rng,
    state: RoundState,
    live_targets: HashMap<EntityId, EntityKind>,
    live_projectiles: HashSet<EntityId>,
    projectiles_fired: u32,
    last_tracking_status: TrackingStatus,
    events: Vec<GameEvent>,
}

impl<E, T, S, D> GameplayController<E, T, S, D>
where
    E: SceneEngine,
    T: TrackingSession,
    S: ScoreSlot,
    D: DisplaySurface,
{
    pub fn new(config: RoundConfig, engine: E, tracking: T, score_slot: S, display: D) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self {
            config,
            engine,
            tracking,
            score_slot,
            display,
            rng,
            state: RoundState::default(),
            live_targets: HashMap::new(),
            live_projectiles: HashSet::new(),
            projectiles_fired: 0,
            last_tracking_status: TrackingStatus::Normal,
            events: Vec::new(),
        }
    }

    /// Dispatch a player command.
    pub fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::StartRound => {
                self.start_round();
            }
            PlayerCommand::Fire => {
                self.fire();
            }
        }
    }

    /// Start a round with the configured target count.
    pub fn start_round(&mut self) -> bool {
        self.start_round_with(self.config.target_count)
    }

    /// Populate the scene with `target_count` targets and start the countdown.
    ///
    /// Only valid once per controller; returns `false` if a round was
    /// already started.
    pub fn start_round_with(&mut self, target_count: u32) -> bool {
        if self.state.phase != RoundPhase::NotStarted {
            log::warn!(
                "start_round ignored: round already {:?}",
                self.state.phase
            );
            return false;
        }

        let bounds = self.config.spawn_bounds;
        let spawned =
            world_setup::spawn_targets(&mut self.engine, &mut self.rng, target_count, &bounds);
        let bonus_targets = world_setup::bonus_count(target_count);
        self.live_targets.extend(spawned);

        self.state = RoundState::running(self.config.round_seconds);
        self.display.show_seconds_remaining(self.state.seconds_remaining);
        self.display.show_score(self.state.score);
        self.events.push(GameEvent::RoundStarted {
            targets: target_count,
            bonus_targets,
            seconds: self.state.seconds_remaining,
        });

        log::info!(
            "Round started: {} targets ({} bonus), {}s on the clock",
            target_count,
            bonus_targets,
            self.state.seconds_remaining
        );
        true
    }

    /// Current fire direction and origin.
    ///
    /// Falls back to `AimVector::FALLBACK` whenever the tracking session has
    /// no pose. Never blocks.
    pub fn aim_vector(&mut self) -> AimVector {
        self.observe_tracking_status();
        aim::aim_or_fallback(self.tracking.current_camera_pose().as_ref())
    }

    /// Launch one projectile along the current aim vector.
    ///
    /// Two impulses are applied at spawn: the scaled direction at the body
    /// offset, then the raw direction through the centre of mass.
    pub fn fire(&mut self) -> Option<EntityId> {
        self.reap_removed();
        if !self.state.is_running() {
            log::debug!("fire ignored: round {:?}", self.state.phase);
            return None;
        }

        let aim = self.aim_vector();
        let entity = world_setup::spawn_projectile(&mut self.engine, aim.position);
        self.engine.apply_impulse_at(
            entity,
            aim.direction * self.config.fire_impulse_scale,
            FIRE_IMPULSE_OFFSET,
        );
        self.engine.apply_impulse(entity, aim.direction);

        self.live_projectiles.insert(entity);
        self.projectiles_fired += 1;
        self.events.push(GameEvent::ProjectileFired {
            entity,
            direction: aim.direction,
            origin: aim.position,
        });
        log::debug!(
            "Fired projectile {:?} from {} along {}",
            entity,
            aim.position,
            aim.direction
        );
        Some(entity)
    }

    /// Handle a contact reported by the scene engine.
    ///
    /// Both participants are removed. A bonus target that was still live
    /// awards `bonus_points` once; entities already removed by an earlier
    /// contact never score again.
    pub fn on_contact(&mut self, event: ContactEvent) {
        self.reap_removed();
        if !self.state.is_running() {
            log::trace!("contact ignored: round {:?}", self.state.phase);
            return;
        }
        if !event.involves_target() || !should_notify(event.a.group, event.b.group) {
            log::debug!(
                "contact between {:?} and {:?} is not projectile-target, ignoring",
                event.a.id,
                event.b.id
            );
            return;
        }

        let mut bonus_hit = false;
        for body in event.bodies() {
            let was_live = self.forget(body.id);
            if !self.engine.remove_entity(body.id) {
                log::trace!("entity {:?} already removed", body.id);
            }
            if was_live && body.kind.is_target() {
                let points = if body.kind == EntityKind::BonusTarget {
                    bonus_hit = true;
                    self.config.bonus_points
                } else {
                    0
                };
                self.events.push(GameEvent::TargetHit {
                    target: body.id,
                    kind: body.kind,
                    points,
                });
            }
        }

        if bonus_hit {
            self.state.score += self.config.bonus_points;
            self.display.show_score(self.state.score);
            self.events.push(GameEvent::ScoreChanged {
                score: self.state.score,
            });
            log::debug!("Bonus target hit, score now {}", self.state.score);
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self) -> TickOutcome {
        self.reap_removed();
        if !self.state.is_running() {
            return TickOutcome::Idle;
        }

        if self.state.seconds_remaining == 0 {
            self.end_round();
            return TickOutcome::Ended;
        }

        self.state.seconds_remaining -= 1;
        self.display.show_seconds_remaining(self.state.seconds_remaining);
        self.events.push(GameEvent::TimeChanged {
            seconds_remaining: self.state.seconds_remaining,
        });

        if self.state.seconds_remaining == 0 {
            self.end_round();
            TickOutcome::Ended
        } else {
            TickOutcome::Continue
        }
    }

    /// Forget entities the engine removed on its own, such as targets that
    /// fell out of the world. They never score. Returns how many were live.
    pub fn reap_removed(&mut self) -> usize {
        let mut reaped = 0;
        for entity in self.engine.drain_removed() {
            if self.forget(entity) {
                reaped += 1;
            }
        }
        if reaped > 0 {
            log::debug!("{} entities left the scene without a hit", reaped);
        }
        reaped
    }

    /// Current round state.
    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase
    }

    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Display view of the round.
    pub fn snapshot(&self) -> RoundSnapshot {
        let bonus_targets_remaining = self
            .live_targets
            .values()
            .filter(|kind| **kind == EntityKind::BonusTarget)
            .count() as u32;
        RoundSnapshot {
            phase: self.state.phase,
            score: self.state.score,
            seconds_remaining: self.state.seconds_remaining,
            targets_remaining: self.live_targets.len() as u32,
            bonus_targets_remaining,
            projectiles_fired: self.projectiles_fired,
        }
    }

    /// Take all events emitted since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Targets spawned this round that have not been hit yet.
    pub fn live_targets(&self) -> &HashMap<EntityId, EntityKind> {
        &self.live_targets
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn tracking_mut(&mut self) -> &mut T {
        &mut self.tracking
    }

    pub fn score_slot(&self) -> &S {
        &self.score_slot
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Drop an entity from the live sets. Returns whether it was live.
    fn forget(&mut self, entity: EntityId) -> bool {
        self.live_targets.remove(&entity).is_some() || self.live_projectiles.remove(&entity)
    }

    fn end_round(&mut self) {
        self.state.phase = RoundPhase::Ended;
        let final_score = self.state.score;

        if let Err(err) = self.score_slot.set_final_score(final_score) {
            log::error!("Failed to persist final score {}: {}", final_score, err);
        }
        self.display.round_ended(final_score);
        self.events.push(GameEvent::RoundEnded { final_score });
        log::info!("Round ended with score {}", final_score);
    }

    /// Log tracking trouble once per status change rather than on every aim.
    fn observe_tracking_status(&mut self) {
        let status = self.tracking.status();
        if status == self.last_tracking_status {
            return;
        }
        match &status {
            TrackingStatus::Normal => log::info!("Tracking recovered"),
            TrackingStatus::Interrupted => {
                log::warn!("Tracking interrupted, aiming with fallback vector")
            }
            TrackingStatus::Failed(reason) => {
                log::warn!("Tracking failed ({}), aiming with fallback vector", reason)
            }
        }
        self.last_tracking_status = status;
    }
}
