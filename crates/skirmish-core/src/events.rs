//! Battle events emitted by the scene for the embedding host
//! (sound cues, score overlays, haptics).

use serde::{Deserialize, Serialize};

use crate::ship::Faction;

/// One noteworthy thing that happened during a tick. Drained by the host
/// after each scene update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleEvent {
    /// A ship's health reached zero.
    ShipDestroyed { faction: Faction },
    /// A destroyed ship returned to its spawn point.
    ShipRespawned { faction: Faction },
    /// Projectiles struck a ship this tick.
    ProjectileHit { target: Faction, hits: u32 },
    /// A fire request was dropped because the pool was saturated.
    ShotDropped { faction: Faction },
}
