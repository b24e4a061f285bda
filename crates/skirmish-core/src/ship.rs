//! Ship entity model.
//!
//! Ships are passive data holders: AI writes their velocity, the collision
//! system mutates their health, the scene integrates their position. No
//! behavior decisions live here.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::types::Position;

/// Which side of the battle an entity belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Faction {
    Player,
    Enemy,
}

/// A combat craft. Created once at scene setup, never destroyed; death is a
/// flag that excludes the ship from AI, fire, and damage until respawn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub faction: Faction,
    pub position: Position,
    /// Battle-plane velocity. Depth velocity is unused in the 2.5D battle.
    pub vx: f32,
    pub vy: f32,
    /// Visual billboard size.
    pub size: f32,
    pub collision_radius: f32,
    pub max_health: i32,
    pub current_health: i32,
    pub is_dead: bool,
    /// Shots per second.
    pub fire_rate: f32,
    fire_timer: f32,
    /// Remaining damage-tint time, for the renderer.
    pub hit_flash: f32,
}

impl Ship {
    pub fn new(faction: Faction, position: Position, size: f32, max_health: i32) -> Self {
        Self {
            faction,
            position,
            vx: 0.0,
            vy: 0.0,
            size,
            collision_radius: size * COLLISION_RADIUS_FACTOR,
            max_health,
            current_health: max_health,
            is_dead: false,
            fire_rate: DEFAULT_FIRE_RATE,
            fire_timer: 0.0,
            hit_flash: 0.0,
        }
    }

    /// Integrate velocity into position and advance timers. Dead ships are
    /// frozen in place.
    pub fn integrate(&mut self, dt: f32) {
        if self.is_dead {
            return;
        }

        self.position.x = (self.position.x + self.vx * dt).clamp(-ARENA_BOUND, ARENA_BOUND);
        self.position.y = (self.position.y + self.vy * dt).clamp(-ARENA_BOUND, ARENA_BOUND);

        self.fire_timer = (self.fire_timer - dt).max(0.0);
        self.hit_flash = (self.hit_flash - dt).max(0.0);
    }

    /// Apply damage. Death is idempotent: a dead ship takes no further
    /// damage and health stays clamped to [0, max_health].
    pub fn take_damage(&mut self, damage: i32) {
        if self.is_dead {
            return;
        }

        self.current_health = (self.current_health - damage).max(0);
        self.hit_flash = HIT_FLASH_SECS;

        if self.current_health == 0 {
            self.is_dead = true;
            log::debug!("{:?} ship destroyed", self.faction);
        }
    }

    /// Cooldown gate: true when alive and the fire timer has expired.
    pub fn can_fire(&self) -> bool {
        !self.is_dead && self.fire_timer <= 0.0
    }

    /// Reset the cooldown after a shot.
    pub fn mark_fired(&mut self) {
        self.fire_timer = 1.0 / self.fire_rate;
    }

    /// Where a shot leaves the hull: the ship's center nudged along the
    /// fire direction past its own collision radius, so a projectile
    /// starts clear of the firing ship.
    pub fn muzzle_position(&self, direction: Vec3) -> Position {
        let offset = direction * (self.collision_radius + PROJECTILE_RADIUS);
        Position::new(
            self.position.x + offset.x,
            self.position.y + offset.y,
            self.position.z + offset.z,
        )
    }

    /// Fallback fire direction when no aim point is available:
    /// players shoot up-screen, enemies down-screen.
    pub fn default_fire_direction(&self) -> Vec3 {
        match self.faction {
            Faction::Player => Vec3::new(0.0, 1.0, 0.0),
            Faction::Enemy => Vec3::new(0.0, -1.0, 0.0),
        }
    }

    /// Return to the battle at full health.
    pub fn respawn(&mut self, position: Position) {
        self.position = position;
        self.current_health = self.max_health;
        self.is_dead = false;
        self.vx = 0.0;
        self.vy = 0.0;
        self.fire_timer = 0.0;
        self.hit_flash = 0.0;
        log::debug!("{:?} ship respawned at ({}, {})", self.faction, position.x, position.y);
    }

    /// Model transform for the drawing layer: translate to position, rotate
    /// flat for the top-down view, scale to billboard size.
    pub fn model_transform(&self) -> Mat4 {
        Mat4::from_translation(self.position.to_vec3())
            * Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2)
            * Mat4::from_scale(Vec3::splat(self.size))
    }
}
