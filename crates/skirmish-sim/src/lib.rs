//! Battle simulation: projectile pool, collision resolution, the scene
//! orchestrator, and the fixed top-level scene loop. Completely headless —
//! drawing happens behind the [`render::RenderContext`] boundary, which
//! keeps every test here deterministic.

pub mod driver;
pub mod pool;
pub mod render;
pub mod scene;
pub mod systems;

#[cfg(test)]
mod tests;
