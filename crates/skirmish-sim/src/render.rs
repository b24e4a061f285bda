//! Rendering boundary.
//!
//! The simulation never touches a GPU: entities hand their state (and a
//! model transform) to a [`RenderContext`] owned by the embedding host.
//! Camera math is likewise consumed through [`CameraProjection`] — the
//! core supplies model transforms and nothing else. Both are injected
//! objects, not process-wide globals.

use glam::Mat4;

use skirmish_core::projectile::Projectile;
use skirmish_core::ship::Ship;

/// Abstract drawable capability. One call per visible entity per frame,
/// always after the update phase.
pub trait RenderContext {
    fn draw_ship(&mut self, ship: &Ship);
    fn draw_projectile(&mut self, projectile: &Projectile);
}

/// Turns a model transform into a clip-space transform.
pub trait CameraProjection {
    fn model_to_clip(&self, model: Mat4) -> Mat4;
}

/// An object the scene loop drives: `update(dt)` then `draw()` each tick,
/// in registration order.
pub trait SceneObject {
    fn update(&mut self, dt: f32);
    fn draw(&self, ctx: &mut dyn RenderContext);
}

/// Fixed top-down camera over the battle plane.
pub struct TopDownCamera {
    view_proj: Mat4,
}

impl TopDownCamera {
    /// Orthographic camera looking straight down the z axis at a
    /// half-extent wide slice of the battle plane.
    pub fn new(half_extent: f32) -> Self {
        let proj = Mat4::orthographic_rh(
            -half_extent,
            half_extent,
            -half_extent,
            half_extent,
            0.1,
            100.0,
        );
        let view = Mat4::look_at_rh(
            glam::Vec3::new(0.0, 0.0, 6.0),
            glam::Vec3::ZERO,
            glam::Vec3::Y,
        );
        Self {
            view_proj: proj * view,
        }
    }
}

impl CameraProjection for TopDownCamera {
    fn model_to_clip(&self, model: Mat4) -> Mat4 {
        self.view_proj * model
    }
}

/// Discards all draw calls. Used by headless runs and tests.
#[derive(Default)]
pub struct NullRenderContext;

impl RenderContext for NullRenderContext {
    fn draw_ship(&mut self, _ship: &Ship) {}
    fn draw_projectile(&mut self, _projectile: &Projectile) {}
}
