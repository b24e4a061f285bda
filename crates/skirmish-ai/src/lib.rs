//! Behavior controllers for the skirmish battle.
//!
//! Pure decision functions: they read ship and projectile state, write
//! desired velocities, and answer fire questions. No scene or pool
//! dependency, and randomness is always caller-injected for determinism.

pub mod enemy;
pub mod player;
