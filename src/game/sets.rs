use bevy::prelude::*;

/// System sets for explicit ordering of the frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Input handling - trigger edge, aiming, pause
    Input,
    /// Weapon control - reload and fire decisions
    Combat,
    /// Transient effects - tracer fades, casing physics, bullets, readout
    Effects,
    /// Cleanup systems - expiry reaping
    Cleanup,
}
