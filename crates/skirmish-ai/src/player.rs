//! Player autopilot.
//!
//! Dodges incoming fire first, station-keeps second. Like the enemy
//! controller it only writes desired velocities.

use rand::Rng;

use skirmish_core::constants::*;
use skirmish_core::projectile::Projectile;
use skirmish_core::ship::{Faction, Ship};

/// Accumulated evasion vector from enemy projectiles within
/// [`EVASION_RADIUS`], each weighted by linear danger falloff. Zero when
/// nothing threatens.
pub fn evasion_vector(player: &Ship, projectiles: &[Projectile]) -> (f32, f32) {
    let mut evade_x = 0.0;
    let mut evade_y = 0.0;

    for projectile in projectiles {
        if !projectile.active || projectile.faction != Faction::Enemy {
            continue;
        }

        let dx = projectile.position.x - player.position.x;
        let dy = projectile.position.y - player.position.y;
        let distance = (dx * dx + dy * dy).sqrt();

        if distance < EVASION_RADIUS {
            let danger = 1.0 - distance / EVASION_RADIUS;
            evade_x -= dx * danger;
            evade_y -= dy * danger;
        }
    }

    (evade_x, evade_y)
}

/// Update the player's desired velocity for this tick.
///
/// Escape takes strict priority over positioning: any non-zero evasion
/// vector dominates the station-keeping directive.
pub fn update_behavior(
    player: &mut Ship,
    enemies: &[Ship],
    projectiles: &[Projectile],
    _dt: f32,
    rng: &mut impl Rng,
) {
    if player.is_dead {
        player.vx = 0.0;
        player.vy = 0.0;
        return;
    }

    let (evade_x, evade_y) = evasion_vector(player, projectiles);

    let (desired_vx, desired_vy) = if evade_x != 0.0 || evade_y != 0.0 {
        (
            evade_x * PLAYER_EVASION_STRENGTH,
            evade_y * PLAYER_EVASION_STRENGTH,
        )
    } else {
        // Hold the preferred depth; blend halfway toward the centroid of
        // living enemies for a better firing angle.
        let mut target_x = 0.0;
        let living = enemies.iter().filter(|e| !e.is_dead);
        let (sum, count) = living.fold((0.0, 0u32), |(s, c), e| (s + e.position.x, c + 1));
        if count > 0 {
            target_x = (sum / count as f32) * 0.5;
        }

        let mut vx = (target_x - player.position.x) * CENTER_PULL;
        let vy = (PREFERRED_Y - player.position.y) * CENTER_PULL;

        // Lateral wobble so the station-keeping is not perfectly static.
        vx += (rng.gen::<f32>() - 0.5) * LATERAL_JITTER;

        (vx, vy)
    };

    player.vx = desired_vx * MOVE_SPEED;
    player.vy = desired_vy * MOVE_SPEED;
}

/// Fire decision: shoot when any living enemy is roughly ahead, otherwise
/// an occasional idle shot through a Bernoulli gate.
pub fn should_fire(player: &Ship, enemies: &[Ship], rng: &mut impl Rng) -> bool {
    if !player.can_fire() {
        return false;
    }

    for enemy in enemies {
        if enemy.is_dead {
            continue;
        }

        let lateral = (enemy.position.x - player.position.x).abs();
        let ahead = enemy.position.y < player.position.y;
        if ahead && lateral < AHEAD_LATERAL_TOLERANCE {
            return true;
        }
    }

    rng.gen::<f32>() < PLAYER_IDLE_FIRE_PROBABILITY
}

/// Nearest living enemy by squared distance, if any survive.
pub fn find_nearest_enemy<'a>(player: &Ship, enemies: &'a [Ship]) -> Option<&'a Ship> {
    let mut nearest: Option<&Ship> = None;
    let mut best = f32::MAX;

    for enemy in enemies {
        if enemy.is_dead {
            continue;
        }
        let d2 = player.position.distance_squared_to(&enemy.position);
        if d2 < best {
            best = d2;
            nearest = Some(enemy);
        }
    }

    nearest
}
