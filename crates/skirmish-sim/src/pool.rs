//! Projectile pool.
//!
//! Owns the full backing collection of projectiles and reuses inactive
//! slots instead of allocating per shot. Grows on demand up to a fixed
//! capacity and never shrinks; a saturated pool answers `None`, which
//! callers treat as a silently dropped shot, not an error.

use glam::Vec3;

use skirmish_core::projectile::Projectile;
use skirmish_core::ship::Faction;
use skirmish_core::types::Position;

use crate::render::RenderContext;

pub struct ProjectilePool {
    slots: Vec<Projectile>,
    capacity: usize,
}

impl ProjectilePool {
    pub fn new(capacity: usize) -> Self {
        log::debug!("projectile pool created, capacity {capacity}");
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Hand out the first inactive slot, allocating a fresh one while the
    /// pool is below capacity. `None` means every slot is in flight.
    pub fn obtain(&mut self) -> Option<&mut Projectile> {
        if let Some(idx) = self.slots.iter().position(|p| !p.active) {
            return self.slots.get_mut(idx);
        }

        if self.slots.len() < self.capacity {
            self.slots.push(Projectile::new());
            log::debug!("projectile pool grew to {}", self.slots.len());
            return self.slots.last_mut();
        }

        log::warn!("projectile pool saturated, shot dropped");
        None
    }

    /// `obtain` + `activate` in one step. If a projectile comes back it is
    /// guaranteed active with the given state.
    pub fn spawn(
        &mut self,
        position: Position,
        direction: Vec3,
        faction: Faction,
    ) -> Option<&mut Projectile> {
        let projectile = self.obtain()?;
        projectile.activate(position, direction, faction);
        Some(projectile)
    }

    /// Lazy view over the in-flight projectiles, recomputed per call so it
    /// can never go stale.
    pub fn iter_active(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().filter(|p| p.active)
    }

    /// Full backing collection, for AI threat scans.
    pub fn projectiles(&self) -> &[Projectile] {
        &self.slots
    }

    /// Full backing collection, for the collision pass.
    pub fn projectiles_mut(&mut self) -> &mut [Projectile] {
        &mut self.slots
    }

    /// Advance every active projectile. Kept separate from `draw_all` so
    /// the draw phase never mutates state.
    pub fn update_all(&mut self, dt: f32) {
        for projectile in &mut self.slots {
            if projectile.active {
                projectile.update(dt);
            }
        }
    }

    /// Draw every active projectile.
    pub fn draw_all(&self, ctx: &mut dyn RenderContext) {
        for projectile in &self.slots {
            if projectile.active {
                ctx.draw_projectile(projectile);
            }
        }
    }

    /// Deactivate everything; used on scene reset.
    pub fn clear(&mut self) {
        for projectile in &mut self.slots {
            projectile.deactivate();
        }
    }

    /// Number of slots ever allocated (active or not).
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn active_count(&self) -> usize {
        self.iter_active().count()
    }
}
