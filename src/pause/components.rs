use bevy::prelude::*;

/// Marker for the "PAUSED" overlay root node
#[derive(Component)]
pub struct PauseOverlay;
