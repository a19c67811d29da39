use bevy::prelude::*;

/// A block downrange for shooting at
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct RangeTarget;

/// Marker for the ground plane casings bounce on
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct GroundPlane;
