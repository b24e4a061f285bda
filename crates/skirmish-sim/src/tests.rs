//! Tests for the projectile pool, collision resolution, and the battle
//! scene pipeline.

use glam::Vec3;

use skirmish_core::constants::*;
use skirmish_core::events::BattleEvent;
use skirmish_core::ship::{Faction, Ship};
use skirmish_core::types::Position;

use crate::pool::ProjectilePool;
use crate::scene::{BattleScene, SceneConfig};
use crate::systems::collision;

fn ship_at(faction: Faction, x: f32, y: f32, radius: f32) -> Ship {
    let mut ship = Ship::new(faction, Position::new(x, y, 0.0), 1.0, 30);
    ship.collision_radius = radius;
    ship
}

// ---- Pool ----

#[test]
fn test_pool_grows_only_to_capacity() {
    let mut pool = ProjectilePool::new(2);
    assert!(pool.spawn(Position::default(), Vec3::Y, Faction::Player).is_some());
    assert!(pool.spawn(Position::default(), Vec3::Y, Faction::Player).is_some());

    // Two active projectiles, capacity 2: the third spawn is dropped.
    assert!(pool.spawn(Position::default(), Vec3::Y, Faction::Player).is_none());
    assert_eq!(pool.len(), 2);
    assert_eq!(pool.active_count(), 2);
}

#[test]
fn test_pool_reuses_inactive_slots() {
    let mut pool = ProjectilePool::new(2);
    for _ in 0..100 {
        let p = pool.spawn(Position::default(), Vec3::Y, Faction::Enemy).unwrap();
        p.deactivate();
    }
    // Heavy churn never allocates past the first slot.
    assert_eq!(pool.len(), 1);
}

#[test]
fn test_spawned_projectile_is_active_with_unit_direction() {
    let mut pool = ProjectilePool::new(4);
    let p = pool
        .spawn(Position::new(1.0, 2.0, 0.0), Vec3::new(5.0, 0.0, 0.0), Faction::Player)
        .unwrap();
    assert!(p.active);
    assert_eq!(p.faction, Faction::Player);
    assert!((p.velocity.length() - PROJECTILE_SPEED).abs() < 1e-4);
}

#[test]
fn test_active_view_is_recomputed() {
    let mut pool = ProjectilePool::new(4);
    pool.spawn(Position::default(), Vec3::Y, Faction::Player);
    pool.spawn(Position::default(), Vec3::Y, Faction::Enemy);
    assert_eq!(pool.iter_active().count(), 2);

    pool.projectiles_mut()[0].deactivate();
    assert_eq!(pool.iter_active().count(), 1);
}

#[test]
fn test_clear_deactivates_everything() {
    let mut pool = ProjectilePool::new(4);
    for _ in 0..4 {
        pool.spawn(Position::default(), Vec3::Y, Faction::Player);
    }
    pool.clear();
    assert_eq!(pool.active_count(), 0);
    // Slots survive the reset for reuse.
    assert_eq!(pool.len(), 4);
}

// ---- Collision ----

#[test]
fn test_projectile_hit_damages_and_deactivates() {
    // Projectile at origin (r=0.1), ship at 0.05 (r=0.1):
    // 0.0025 < 0.04, so this is a hit.
    let mut pool = ProjectilePool::new(1);
    {
        let p = pool.spawn(Position::default(), Vec3::Y, Faction::Player).unwrap();
        p.collision_radius = 0.1;
    }
    let mut ship = ship_at(Faction::Enemy, 0.05, 0.0, 0.1);
    let health_before = ship.current_health;

    let hits = collision::projectiles_vs_ship(pool.projectiles_mut(), &mut ship, Faction::Player);
    assert_eq!(hits, 1);
    assert_eq!(ship.current_health, health_before - PROJECTILE_DAMAGE);
    assert_eq!(pool.active_count(), 0);
}

#[test]
fn test_owner_filter_excludes_friendly_fire() {
    let mut pool = ProjectilePool::new(1);
    pool.spawn(Position::default(), Vec3::Y, Faction::Enemy);
    let mut enemy = ship_at(Faction::Enemy, 0.0, 0.0, 0.5);

    let hits = collision::projectiles_vs_ship(pool.projectiles_mut(), &mut enemy, Faction::Player);
    assert_eq!(hits, 0);
    assert_eq!(pool.active_count(), 1);
}

#[test]
fn test_dead_ship_takes_no_collisions() {
    let mut pool = ProjectilePool::new(1);
    pool.spawn(Position::default(), Vec3::Y, Faction::Player);
    let mut ship = ship_at(Faction::Enemy, 0.0, 0.0, 0.5);
    ship.take_damage(ship.max_health);

    let hits = collision::projectiles_vs_ship(pool.projectiles_mut(), &mut ship, Faction::Player);
    assert_eq!(hits, 0);
    assert_eq!(pool.active_count(), 1, "projectile keeps flying");
}

#[test]
fn test_ship_ship_collision_strict_inequality() {
    let a = ship_at(Faction::Player, 0.0, 0.0, 0.5);
    // Tangent contact: distance exactly equals the radius sum.
    let tangent = ship_at(Faction::Enemy, 1.0, 0.0, 0.5);
    assert!(!collision::ship_ship_collision(&a, &tangent));

    let overlapping = ship_at(Faction::Enemy, 0.99, 0.0, 0.5);
    assert!(collision::ship_ship_collision(&a, &overlapping));
}

#[test]
fn test_ship_ship_collision_false_when_dead() {
    let a = ship_at(Faction::Player, 0.0, 0.0, 0.5);
    let mut b = ship_at(Faction::Enemy, 0.1, 0.0, 0.5);
    b.take_damage(b.max_health);
    assert!(!collision::ship_ship_collision(&a, &b));
}

#[test]
fn test_enemy_projectiles_vs_player_wrapper() {
    let mut pool = ProjectilePool::new(2);
    pool.spawn(Position::default(), Vec3::Y, Faction::Enemy);
    pool.spawn(Position::default(), Vec3::Y, Faction::Player);
    let mut player = ship_at(Faction::Player, 0.0, 0.0, 0.5);

    let hits = collision::enemy_projectiles_vs_player(pool.projectiles_mut(), &mut player);
    assert_eq!(hits, 1, "only the enemy-owned projectile connects");
}

#[test]
fn test_player_projectiles_vs_enemies_skips_dead() {
    let mut pool = ProjectilePool::new(1);
    pool.spawn(Position::default(), Vec3::Y, Faction::Player);

    let mut enemies = vec![
        ship_at(Faction::Enemy, 0.0, 0.0, 0.5),
        ship_at(Faction::Enemy, 0.1, 0.0, 0.5),
    ];
    let max = enemies[0].max_health;
    enemies[0].take_damage(max);

    let hits = collision::player_projectiles_vs_enemies(pool.projectiles_mut(), &mut enemies);
    assert_eq!(hits, 1);
    assert!(enemies[1].current_health < enemies[1].max_health);
}

// ---- Scene ----

#[test]
fn test_determinism_same_seed() {
    let mut a = BattleScene::new(SceneConfig { seed: 1234, ..Default::default() });
    let mut b = BattleScene::new(SceneConfig { seed: 1234, ..Default::default() });

    for _ in 0..600 {
        a.tick(TICK_DT);
        b.tick(TICK_DT);
    }

    let snap_a = serde_json::to_string(&a.snapshot()).unwrap();
    let snap_b = serde_json::to_string(&b.snapshot()).unwrap();
    assert_eq!(snap_a, snap_b);
}

#[test]
fn test_different_seeds_diverge() {
    let mut a = BattleScene::new(SceneConfig { seed: 1, ..Default::default() });
    let mut b = BattleScene::new(SceneConfig { seed: 2, ..Default::default() });

    for _ in 0..600 {
        a.tick(TICK_DT);
        b.tick(TICK_DT);
    }

    let snap_a = serde_json::to_string(&a.snapshot()).unwrap();
    let snap_b = serde_json::to_string(&b.snapshot()).unwrap();
    assert_ne!(snap_a, snap_b);
}

#[test]
fn test_long_run_stays_within_invariants() {
    let mut scene = BattleScene::new(SceneConfig::default());

    for _ in 0..3000 {
        scene.tick(TICK_DT);
        scene.drain_events();

        assert!(scene.pool().len() <= scene.pool().capacity());

        let player = scene.player();
        assert!(player.current_health >= 0 && player.current_health <= player.max_health);
        assert!(player.position.x.abs() <= ARENA_BOUND);
        assert!(player.position.y.abs() <= ARENA_BOUND);
        for e in scene.enemies() {
            assert!(e.current_health >= 0 && e.current_health <= e.max_health);
        }
    }
}

#[test]
fn test_saturated_pool_drops_shots_silently() {
    // Zero-capacity pool: every fire request must surface as a dropped
    // shot, never a panic.
    let mut scene = BattleScene::new(SceneConfig {
        seed: 9,
        pool_capacity: 0,
        ..Default::default()
    });

    let mut dropped = false;
    for _ in 0..240 {
        scene.tick(TICK_DT);
        if scene
            .drain_events()
            .iter()
            .any(|e| matches!(e, BattleEvent::ShotDropped { .. }))
        {
            dropped = true;
            break;
        }
    }
    assert!(dropped, "a fire request should have been dropped");
    assert!(scene.score().shots_dropped > 0);
}

#[test]
fn test_destroyed_enemy_respawns_after_delay() {
    let mut scene = BattleScene::new(SceneConfig::default());

    let max = scene.enemies()[0].max_health;
    scene.enemies_mut()[0].take_damage(max);

    scene.tick(TICK_DT);
    let events = scene.drain_events();
    assert!(events.contains(&BattleEvent::ShipDestroyed { faction: Faction::Enemy }));
    assert_eq!(scene.score().enemies_destroyed, 1);

    // Run past the respawn delay (dt is clamped to MAX_FRAME_DT per tick).
    let ticks_needed = (RESPAWN_DELAY_SECS / MAX_FRAME_DT).ceil() as usize + 2;
    let mut respawned = false;
    for _ in 0..ticks_needed {
        scene.tick(MAX_FRAME_DT);
        if scene
            .drain_events()
            .contains(&BattleEvent::ShipRespawned { faction: Faction::Enemy })
        {
            respawned = true;
            break;
        }
    }
    assert!(respawned);
    assert!(!scene.enemies()[0].is_dead);
    assert_eq!(scene.enemies()[0].current_health, max);
}

#[test]
fn test_destroyed_player_counts_once() {
    let mut scene = BattleScene::new(SceneConfig::default());
    let max = scene.player().max_health;
    scene.player_mut().take_damage(max);

    scene.tick(TICK_DT);
    scene.tick(TICK_DT);
    scene.tick(TICK_DT);
    assert_eq!(scene.score().player_deaths, 1);
}

#[test]
fn test_reset_clears_pool_and_revives_ships() {
    let mut scene = BattleScene::new(SceneConfig::default());
    for _ in 0..300 {
        scene.tick(TICK_DT);
    }
    let max = scene.player().max_health;
    scene.player_mut().take_damage(max);

    scene.reset();
    assert_eq!(scene.pool().active_count(), 0);
    assert!(!scene.player().is_dead);
    assert!(scene.enemies().iter().all(|e| !e.is_dead));
    assert!(scene.drain_events().is_empty());
}

#[test]
fn test_tick_clamps_oversized_dt() {
    let mut scene = BattleScene::new(SceneConfig::default());
    scene.tick(10.0);
    // One clamped tick cannot teleport the player out of the arena.
    assert!(scene.player().position.y.abs() <= ARENA_BOUND);
    assert!((scene.time().elapsed_secs - MAX_FRAME_DT).abs() < 1e-6);
}

#[test]
fn test_shots_spawn_clear_of_the_shooter() {
    // The middle enemy is dead ahead at spawn, so the player fires on the
    // first tick; the shot must leave from the muzzle, not the hull center.
    let mut scene = BattleScene::new(SceneConfig::default());
    scene.tick(TICK_DT);

    let player = scene.player();
    let fired: Vec<_> = scene
        .pool()
        .iter_active()
        .filter(|p| p.faction == Faction::Player)
        .collect();
    assert!(!fired.is_empty());
    for p in &fired {
        assert!(p.position.distance_to(&player.position) > player.collision_radius);
    }
}

#[test]
fn test_snapshot_contains_only_active_projectiles() {
    let mut scene = BattleScene::new(SceneConfig::default());
    scene.pool_mut().spawn(Position::default(), Vec3::Y, Faction::Player);
    let p = scene.pool_mut().spawn(Position::default(), Vec3::Y, Faction::Enemy).unwrap();
    p.deactivate();

    let snapshot = scene.snapshot();
    assert_eq!(snapshot.projectiles.len(), 1);
    assert!(snapshot.projectiles.iter().all(|p| p.active));
}
