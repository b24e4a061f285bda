//! Battle scene orchestrator.
//!
//! Owns the ships, the projectile pool, and the scene RNG, and wires the
//! per-tick data flow: AI writes velocities, fire decisions go through the
//! cooldown gate into the pool, ships and projectiles integrate, then the
//! collision pass mutates health and activity. Events accumulate per tick
//! for the host to drain.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use skirmish_core::constants::*;
use skirmish_core::events::BattleEvent;
use skirmish_core::projectile::Projectile;
use skirmish_core::ship::{Faction, Ship};
use skirmish_core::types::{Position, SimTime};

use skirmish_ai::{enemy, player};

use crate::pool::ProjectilePool;
use crate::render::{RenderContext, SceneObject};
use crate::systems::collision;

/// Configuration for a new battle. Same seed = same battle.
#[derive(Debug, Clone, Copy)]
pub struct SceneConfig {
    pub seed: u64,
    pub enemy_count: usize,
    pub pool_capacity: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            enemy_count: DEFAULT_ENEMY_COUNT,
            pool_capacity: DEFAULT_POOL_CAPACITY,
        }
    }
}

/// Running battle totals.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ScoreState {
    pub enemies_destroyed: u32,
    pub player_deaths: u32,
    pub shots_dropped: u32,
}

/// Serializable view of the battle for an embedding renderer or UI.
#[derive(Debug, Clone, Serialize)]
pub struct SceneSnapshot {
    pub time: SimTime,
    pub player: Ship,
    pub enemies: Vec<Ship>,
    pub projectiles: Vec<Projectile>,
    pub score: ScoreState,
}

pub struct BattleScene {
    player: Ship,
    enemies: Vec<Ship>,
    pool: ProjectilePool,
    rng: ChaCha8Rng,
    time: SimTime,
    events: Vec<BattleEvent>,
    score: ScoreState,
    /// Seconds until the player returns; `None` while alive.
    player_respawn: Option<f32>,
    enemy_respawns: Vec<Option<f32>>,
}

impl BattleScene {
    pub fn new(config: SceneConfig) -> Self {
        let player = Ship::new(
            Faction::Player,
            player_spawn(),
            PLAYER_SHIP_SIZE,
            PLAYER_MAX_HEALTH,
        );
        let enemies = (0..config.enemy_count)
            .map(|i| {
                Ship::new(
                    Faction::Enemy,
                    enemy_spawn(i, config.enemy_count),
                    ENEMY_SHIP_SIZE,
                    ENEMY_MAX_HEALTH,
                )
            })
            .collect::<Vec<_>>();

        log::info!(
            "battle scene ready: {} enemies, pool capacity {}",
            enemies.len(),
            config.pool_capacity
        );

        Self {
            player,
            enemy_respawns: vec![None; enemies.len()],
            enemies,
            pool: ProjectilePool::new(config.pool_capacity),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            time: SimTime::default(),
            events: Vec::new(),
            score: ScoreState::default(),
            player_respawn: None,
        }
    }

    /// Advance the battle by one tick.
    pub fn tick(&mut self, dt: f32) {
        // Guard against a stalled host even when driven directly.
        let dt = dt.min(MAX_FRAME_DT);
        self.time.advance(dt);

        self.advance_respawns(dt);

        // AI writes desired velocities.
        for e in &mut self.enemies {
            enemy::update_behavior(e, &self.player, dt, &mut self.rng);
        }
        player::update_behavior(
            &mut self.player,
            &self.enemies,
            self.pool.projectiles(),
            dt,
            &mut self.rng,
        );

        self.resolve_fire();

        // Integration.
        self.player.integrate(dt);
        for e in &mut self.enemies {
            e.integrate(dt);
        }
        self.pool.update_all(dt);

        // Collision resolution.
        let hits_on_enemies =
            collision::player_projectiles_vs_enemies(self.pool.projectiles_mut(), &mut self.enemies);
        if hits_on_enemies > 0 {
            self.events.push(BattleEvent::ProjectileHit {
                target: Faction::Enemy,
                hits: hits_on_enemies,
            });
        }
        let hits_on_player =
            collision::enemy_projectiles_vs_player(self.pool.projectiles_mut(), &mut self.player);
        if hits_on_player > 0 {
            self.events.push(BattleEvent::ProjectileHit {
                target: Faction::Player,
                hits: hits_on_player,
            });
        }

        self.record_deaths();
    }

    /// Cooldown-gated fire requests from both AIs into the pool.
    fn resolve_fire(&mut self) {
        for i in 0..self.enemies.len() {
            if !enemy::should_fire(&self.enemies[i], &self.player, &mut self.rng) {
                continue;
            }
            let direction = enemy::fire_direction(&self.enemies[i], &self.player);
            let position = self.enemies[i].muzzle_position(direction);
            if self.pool.spawn(position, direction, Faction::Enemy).is_some() {
                self.enemies[i].mark_fired();
            } else {
                self.drop_shot(Faction::Enemy);
            }
        }

        if player::should_fire(&self.player, &self.enemies, &mut self.rng) {
            // Aim at the nearest living enemy; fall back to the ship's
            // fixed firing axis when none survive or positions coincide.
            let direction = match player::find_nearest_enemy(&self.player, &self.enemies) {
                Some(target) => (target.position.to_vec3() - self.player.position.to_vec3())
                    .try_normalize()
                    .unwrap_or_else(|| self.player.default_fire_direction()),
                None => self.player.default_fire_direction(),
            };
            let position = self.player.muzzle_position(direction);
            if self.pool.spawn(position, direction, Faction::Player).is_some() {
                self.player.mark_fired();
            } else {
                self.drop_shot(Faction::Player);
            }
        }
    }

    fn drop_shot(&mut self, faction: Faction) {
        self.score.shots_dropped += 1;
        self.events.push(BattleEvent::ShotDropped { faction });
    }

    /// Start respawn countdowns for ships that died this tick.
    fn record_deaths(&mut self) {
        for (i, e) in self.enemies.iter().enumerate() {
            if e.is_dead && self.enemy_respawns[i].is_none() {
                self.enemy_respawns[i] = Some(RESPAWN_DELAY_SECS);
                self.score.enemies_destroyed += 1;
                self.events.push(BattleEvent::ShipDestroyed {
                    faction: Faction::Enemy,
                });
            }
        }

        if self.player.is_dead && self.player_respawn.is_none() {
            self.player_respawn = Some(RESPAWN_DELAY_SECS);
            self.score.player_deaths += 1;
            self.events.push(BattleEvent::ShipDestroyed {
                faction: Faction::Player,
            });
        }
    }

    /// Count down respawn timers and bring expired ships back.
    fn advance_respawns(&mut self, dt: f32) {
        if let Some(remaining) = self.player_respawn {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.player.respawn(player_spawn());
                self.player_respawn = None;
                self.events.push(BattleEvent::ShipRespawned {
                    faction: Faction::Player,
                });
            } else {
                self.player_respawn = Some(remaining);
            }
        }

        let count = self.enemies.len();
        for (i, slot) in self.enemy_respawns.iter_mut().enumerate() {
            if let Some(remaining) = *slot {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    self.enemies[i].respawn(enemy_spawn(i, count));
                    *slot = None;
                    self.events.push(BattleEvent::ShipRespawned {
                        faction: Faction::Enemy,
                    });
                } else {
                    *slot = Some(remaining);
                }
            }
        }
    }

    /// Take this tick's events, leaving the buffer empty.
    pub fn drain_events(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.events)
    }

    /// Reset the battle: everything respawned, pool cleared, score kept.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.player.respawn(player_spawn());
        self.player_respawn = None;
        let count = self.enemies.len();
        for (i, e) in self.enemies.iter_mut().enumerate() {
            e.respawn(enemy_spawn(i, count));
            self.enemy_respawns[i] = None;
        }
        self.events.clear();
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            time: self.time,
            player: self.player.clone(),
            enemies: self.enemies.clone(),
            projectiles: self.pool.iter_active().cloned().collect(),
            score: self.score,
        }
    }

    pub fn player(&self) -> &Ship {
        &self.player
    }

    pub fn enemies(&self) -> &[Ship] {
        &self.enemies
    }

    pub fn pool(&self) -> &ProjectilePool {
        &self.pool
    }

    pub fn score(&self) -> ScoreState {
        self.score
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    #[cfg(test)]
    pub fn pool_mut(&mut self) -> &mut ProjectilePool {
        &mut self.pool
    }

    #[cfg(test)]
    pub fn player_mut(&mut self) -> &mut Ship {
        &mut self.player
    }

    #[cfg(test)]
    pub fn enemies_mut(&mut self) -> &mut [Ship] {
        &mut self.enemies
    }
}

impl SceneObject for BattleScene {
    fn update(&mut self, dt: f32) {
        self.tick(dt);
    }

    fn draw(&self, ctx: &mut dyn RenderContext) {
        if !self.player.is_dead {
            ctx.draw_ship(&self.player);
        }
        for e in &self.enemies {
            if !e.is_dead {
                ctx.draw_ship(e);
            }
        }
        self.pool.draw_all(ctx);
    }
}

fn player_spawn() -> Position {
    Position::new(0.0, PLAYER_SPAWN_Y, 0.0)
}

/// Enemies spread evenly across the far side of the arena.
fn enemy_spawn(index: usize, count: usize) -> Position {
    let offset = index as f32 - (count.saturating_sub(1)) as f32 * 0.5;
    Position::new(offset * ENEMY_SPAWN_SPACING, ENEMY_SPAWN_Y, 0.0)
}
