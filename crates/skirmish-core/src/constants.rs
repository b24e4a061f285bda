//! Simulation constants and tuning parameters.

// --- Frame timing ---

/// Nominal simulation rate for fixed-step hosts (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the nominal rate.
pub const TICK_DT: f32 = 1.0 / TICK_RATE as f32;

/// Upper clamp on a single frame's delta time. A stalled host (pause,
/// surface rebuild) otherwise hands the first frame back a multi-second dt
/// that slingshots every entity across the arena.
pub const MAX_FRAME_DT: f32 = 1.0 / 15.0;

// --- Arena ---

/// Ships are clamped to ±ARENA_BOUND on both battle axes.
pub const ARENA_BOUND: f32 = 4.0;

/// Projectiles self-deactivate beyond ±PROJECTILE_BOUND on any axis.
pub const PROJECTILE_BOUND: f32 = 10.0;

// --- Enemy AI ---

/// Enemy chase speed when closing on the player.
pub const PURSUIT_SPEED: f32 = 2.0;

/// Ideal enemy stand-off range; the strafe band is centered here.
pub const COMBAT_DISTANCE: f32 = 3.0;

/// Below this range the enemy panic-flees.
pub const EVASION_DISTANCE: f32 = 1.5;

/// Flee speed when inside EVASION_DISTANCE.
pub const EVASION_STRENGTH: f32 = 3.0;

/// Magnitude of the per-axis random jitter added to every steering decision.
pub const WANDER_AMOUNT: f32 = 1.0;

/// Strafe speed as a fraction of PURSUIT_SPEED inside the combat band.
pub const STRAFE_SPEED_FACTOR: f32 = 0.7;

/// Gain of the proportional pull toward COMBAT_DISTANCE while strafing.
pub const BAND_CORRECTION_GAIN: f32 = 0.3;

/// Enemies hold fire beyond this multiple of COMBAT_DISTANCE.
pub const ENEMY_FIRE_RANGE_FACTOR: f32 = 2.0;

/// Bernoulli fire gate per eligible tick. Frame-rate dependent: at higher
/// tick rates this fires more often in wall-clock time.
pub const ENEMY_FIRE_PROBABILITY: f32 = 0.3;

// --- Player autopilot ---

/// Scale applied to the autopilot's chosen directive.
pub const MOVE_SPEED: f32 = 2.5;

/// Incoming projectiles inside this radius contribute to the evasion vector.
pub const EVASION_RADIUS: f32 = 2.0;

/// Scale of the accumulated evasion vector before MOVE_SPEED is applied.
pub const PLAYER_EVASION_STRENGTH: f32 = 4.0;

/// Depth the autopilot holds when not evading.
pub const PREFERRED_Y: f32 = 1.5;

/// Proportional gain steering toward the target position.
pub const CENTER_PULL: f32 = 1.0;

/// Magnitude of the lateral random term while station-keeping.
pub const LATERAL_JITTER: f32 = 0.5;

/// Horizontal offset within which an enemy counts as "roughly ahead".
pub const AHEAD_LATERAL_TOLERANCE: f32 = 1.5;

/// Bernoulli idle-fire gate when nothing is ahead. Frame-rate dependent,
/// same caveat as ENEMY_FIRE_PROBABILITY.
pub const PLAYER_IDLE_FIRE_PROBABILITY: f32 = 0.1;

// --- Projectiles ---

/// Projectile travel speed (units/sec).
pub const PROJECTILE_SPEED: f32 = 8.0;

/// Projectile billboard size.
pub const PROJECTILE_SIZE: f32 = 0.3;

/// Projectile collision radius.
pub const PROJECTILE_RADIUS: f32 = 0.15;

/// Damage applied per projectile hit.
pub const PROJECTILE_DAMAGE: i32 = 10;

/// Default projectile pool capacity.
pub const DEFAULT_POOL_CAPACITY: usize = 32;

// --- Ships ---

/// Collision radius as a fraction of visual size.
pub const COLLISION_RADIUS_FACTOR: f32 = 0.4;

/// Default fire rate in shots per second.
pub const DEFAULT_FIRE_RATE: f32 = 0.5;

/// Duration of the damage-tint flash (seconds).
pub const HIT_FLASH_SECS: f32 = 0.25;

pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const ENEMY_MAX_HEALTH: i32 = 30;

pub const PLAYER_SHIP_SIZE: f32 = 0.8;
pub const ENEMY_SHIP_SIZE: f32 = 0.6;

// --- Scene ---

/// Number of enemy ships in the default battle.
pub const DEFAULT_ENEMY_COUNT: usize = 3;

/// Delay before a destroyed ship returns to its spawn point (seconds).
pub const RESPAWN_DELAY_SECS: f32 = 3.0;

/// Player spawn depth. Matches the autopilot's preferred station.
pub const PLAYER_SPAWN_Y: f32 = PREFERRED_Y;

/// Enemy spawn depth, across the arena from the player.
pub const ENEMY_SPAWN_Y: f32 = -2.5;

/// Horizontal spacing between enemy spawn points.
pub const ENEMY_SPAWN_SPACING: f32 = 1.5;
