//! Core types and definitions for the skirmish simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! geometry, entity models, battle events, and tuning constants.
//! It has no dependency on any runtime or rendering framework.

pub mod constants;
pub mod events;
pub mod projectile;
pub mod ship;
pub mod types;
