//! Stateless per-tick systems.

pub mod collision;
