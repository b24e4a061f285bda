//! Projectile entity model.
//!
//! Projectiles are pooled flyweights: allocated once, activated and
//! deactivated indefinitely, never freed. An inactive projectile carries no
//! owner semantics until the next `activate` reassigns one.

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::ship::Faction;
use crate::types::Position;

/// A single in-flight shot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Position,
    pub velocity: Vec3,
    pub faction: Faction,
    pub active: bool,
    pub speed: f32,
    pub size: f32,
    pub collision_radius: f32,
    pub damage: i32,
}

impl Default for Projectile {
    fn default() -> Self {
        Self::new()
    }
}

impl Projectile {
    pub fn new() -> Self {
        Self {
            position: Position::default(),
            velocity: Vec3::ZERO,
            faction: Faction::Player,
            active: false,
            speed: PROJECTILE_SPEED,
            size: PROJECTILE_SIZE,
            collision_radius: PROJECTILE_RADIUS,
            damage: PROJECTILE_DAMAGE,
        }
    }

    /// Bring the projectile into flight. The direction is normalized; a
    /// zero-length input falls back to straight up-screen at full speed.
    pub fn activate(&mut self, position: Position, direction: Vec3, faction: Faction) {
        self.position = position;
        self.velocity = match direction.try_normalize() {
            Some(dir) => dir * self.speed,
            None => Vec3::new(0.0, self.speed, 0.0),
        };
        self.faction = faction;
        self.active = true;
    }

    /// Return the projectile to the pool. Idempotent.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Integrate position; self-deactivates once out of bounds.
    pub fn update(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        self.position.x += self.velocity.x * dt;
        self.position.y += self.velocity.y * dt;
        self.position.z += self.velocity.z * dt;

        if self.position.x.abs() > PROJECTILE_BOUND
            || self.position.y.abs() > PROJECTILE_BOUND
            || self.position.z.abs() > PROJECTILE_BOUND
        {
            self.deactivate();
        }
    }

    /// Model transform for the drawing layer.
    pub fn model_transform(&self) -> Mat4 {
        Mat4::from_translation(self.position.to_vec3())
            * Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2)
            * Mat4::from_scale(Vec3::splat(self.size))
    }
}
