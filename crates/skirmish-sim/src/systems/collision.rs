//! Collision resolution between projectiles and ships.
//!
//! Pure functions over caller-provided slices; no owned state. Every
//! predicate compares squared distances against the squared radius sum
//! with strict inequality, so tangent contact is not a hit and no square
//! root runs on the hot path.

use skirmish_core::ship::{Faction, Ship};
use skirmish_core::projectile::Projectile;

/// Check every active projectile of the given faction against one ship.
/// Hits damage the ship, deactivate the projectile, and count toward the
/// result. A dead ship short-circuits to zero.
pub fn projectiles_vs_ship(projectiles: &mut [Projectile], ship: &mut Ship, faction: Faction) -> u32 {
    if ship.is_dead {
        return 0;
    }

    let mut collisions = 0;

    for projectile in projectiles.iter_mut() {
        if !projectile.active || projectile.faction != faction {
            continue;
        }

        let min_distance = projectile.collision_radius + ship.collision_radius;
        let distance_squared = projectile.position.distance_squared_to(&ship.position);

        if distance_squared < min_distance * min_distance {
            ship.take_damage(projectile.damage);
            projectile.deactivate();
            collisions += 1;
            log::debug!(
                "projectile hit {:?} ship, hp {}/{}",
                ship.faction,
                ship.current_health,
                ship.max_health
            );
        }
    }

    collisions
}

/// Player-owned projectiles against every living enemy.
pub fn player_projectiles_vs_enemies(projectiles: &mut [Projectile], enemies: &mut [Ship]) -> u32 {
    let mut total = 0;
    for enemy in enemies.iter_mut() {
        if enemy.is_dead {
            continue;
        }
        total += projectiles_vs_ship(projectiles, enemy, Faction::Player);
    }
    total
}

/// Enemy-owned projectiles against the player.
pub fn enemy_projectiles_vs_player(projectiles: &mut [Projectile], player: &mut Ship) -> u32 {
    projectiles_vs_ship(projectiles, player, Faction::Enemy)
}

/// Hull-on-hull overlap test. False if either ship is dead.
pub fn ship_ship_collision(a: &Ship, b: &Ship) -> bool {
    if a.is_dead || b.is_dead {
        return false;
    }

    let min_distance = a.collision_radius + b.collision_radius;
    a.position.distance_squared_to(&b.position) < min_distance * min_distance
}
