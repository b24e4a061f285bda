//! Enemy ship controller.
//!
//! Distance-banded behavior against the player: flee when crowded, pursue
//! when far, strafe inside the combat band. Only velocities are written;
//! position integration belongs to the scene.

use glam::Vec3;
use rand::Rng;

use skirmish_core::constants::*;
use skirmish_core::ship::Ship;

/// Deterministic steering decision, before wander jitter.
///
/// Returns the desired (vx, vy). Split out from [`update_behavior`] so the
/// branch logic is testable without a random source.
pub fn steering(enemy: &Ship, player: &Ship) -> (f32, f32) {
    let dx = player.position.x - enemy.position.x;
    let dy = player.position.y - enemy.position.y;
    let distance = (dx * dx + dy * dy).sqrt();

    let (dir_x, dir_y) = if distance > 0.0 {
        (dx / distance, dy / distance)
    } else {
        (0.0, 0.0)
    };

    if distance < EVASION_DISTANCE {
        // Too close: break away from the player.
        (-dir_x * EVASION_STRENGTH, -dir_y * EVASION_STRENGTH)
    } else if distance > COMBAT_DISTANCE * 1.5 {
        // Too far: close aggressively.
        (dir_x * PURSUIT_SPEED, dir_y * PURSUIT_SPEED)
    } else {
        // Combat band: strafe perpendicular to the line of sight, side
        // chosen by a position parity test so it is stable per-ship.
        let perp_x = -dir_y;
        let perp_y = dir_x;
        let side = if (enemy.position.x + enemy.position.y) % 2.0 < 1.0 {
            1.0
        } else {
            -1.0
        };

        let mut vx = perp_x * PURSUIT_SPEED * STRAFE_SPEED_FACTOR * side;
        let mut vy = perp_y * PURSUIT_SPEED * STRAFE_SPEED_FACTOR * side;

        // Proportional correction toward the ideal stand-off range.
        let band_error = (distance - COMBAT_DISTANCE) / COMBAT_DISTANCE;
        vx += dir_x * PURSUIT_SPEED * band_error * BAND_CORRECTION_GAIN;
        vy += dir_y * PURSUIT_SPEED * band_error * BAND_CORRECTION_GAIN;

        (vx, vy)
    }
}

/// Update the enemy's desired velocity for this tick.
///
/// Mutates only `vx`/`vy`. If either party is dead the enemy holds still.
pub fn update_behavior(enemy: &mut Ship, player: &Ship, _dt: f32, rng: &mut impl Rng) {
    if enemy.is_dead || player.is_dead {
        enemy.vx = 0.0;
        enemy.vy = 0.0;
        return;
    }

    let (vx, vy) = steering(enemy, player);

    // Wander jitter keeps the motion from being perfectly predictable.
    enemy.vx = vx + (rng.gen::<f32>() - 0.5) * WANDER_AMOUNT;
    enemy.vy = vy + (rng.gen::<f32>() - 0.5) * WANDER_AMOUNT;
}

/// Fire decision: closed cooldown or out-of-range means no; otherwise a
/// Bernoulli gate per eligible tick, not a cooldown distribution.
pub fn should_fire(enemy: &Ship, player: &Ship, rng: &mut impl Rng) -> bool {
    if enemy.is_dead || player.is_dead {
        return false;
    }
    if !enemy.can_fire() {
        return false;
    }

    let range = enemy.position.horizontal_distance_to(&player.position);
    if range > COMBAT_DISTANCE * ENEMY_FIRE_RANGE_FACTOR {
        return false;
    }

    rng.gen::<f32>() < ENEMY_FIRE_PROBABILITY
}

/// Normalized line-of-sight toward the player. Coincident positions fall
/// back to straight down-screen to avoid a zero-length direction.
pub fn fire_direction(enemy: &Ship, player: &Ship) -> Vec3 {
    let los = player.position.to_vec3() - enemy.position.to_vec3();
    los.try_normalize().unwrap_or(Vec3::new(0.0, -1.0, 0.0))
}
