//! Gameplay constants and tuning parameters.

use glam::Vec3;

// --- Round ---

/// Length of a round in seconds.
pub const ROUND_SECONDS: u32 = 30;

/// Round timer period in seconds.
pub const TIMER_PERIOD_SECS: f64 = 1.0;

/// Score slot key the final score is stored under.
pub const SCORE_SLOT_KEY: &str = "score";

// --- Targets ---

/// Number of targets spawned at round start.
pub const TARGET_COUNT: u32 = 100;

/// Every Nth slot (after the first N-1) is a bonus target.
pub const BONUS_INTERVAL: u32 = 10;

/// Points awarded for hitting a bonus target.
pub const BONUS_POINTS: u32 = 5;

/// Lower corner of the target spawn box.
pub const TARGET_BOUNDS_MIN: Vec3 = Vec3::new(-5.0, -4.0, -5.0);

/// Upper corner of the target spawn box.
pub const TARGET_BOUNDS_MAX: Vec3 = Vec3::new(10.0, 5.0, 10.0);

/// Seconds per full revolution of a target's spin animation.
pub const TARGET_SPIN_PERIOD_SECS: f32 = 1.0;

/// Contact radius of a simple target.
pub const SIMPLE_TARGET_RADIUS: f32 = 0.1;

/// Contact radius of a bonus target (mesh scaled by 0.3).
pub const BONUS_TARGET_RADIUS: f32 = 0.3;

pub const TARGET_MASS: f32 = 1.0;

// --- Projectiles ---

/// Contact radius of a projectile (mesh scaled by 0.1).
pub const PROJECTILE_RADIUS: f32 = 0.1;

pub const PROJECTILE_MASS: f32 = 1.0;

/// Multiplier applied to the aim direction for the first launch impulse.
pub const FIRE_IMPULSE_SCALE: f32 = 2.0;

/// Body-space point the scaled launch impulse is applied at.
pub const FIRE_IMPULSE_OFFSET: Vec3 = Vec3::new(0.1, 0.0, 0.0);

// --- Aim ---

/// Aim direction when no camera pose is available.
pub const FALLBACK_AIM_DIRECTION: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Aim origin when no camera pose is available.
pub const FALLBACK_AIM_POSITION: Vec3 = Vec3::new(0.0, 0.0, -0.2);

// --- Reference physics ---

/// Gravitational acceleration (m/s²).
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);

/// Physics step rate of the reference engine (Hz).
pub const PHYSICS_RATE: u32 = 60;

/// Entities below this height are culled by the reference engine.
pub const KILL_PLANE_Y: f32 = -100.0;

/// Entities farther than this from the origin are culled by the reference engine.
pub const CULL_DISTANCE: f32 = 1000.0;
