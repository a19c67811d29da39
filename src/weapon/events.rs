use bevy::prelude::*;

use crate::hitscan::components::HitscanResult;

/// Animation cue for the fire motion
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireCue {
    pub weapon: Entity,
}

/// Written after a shot has been fully resolved
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct ShotFired {
    pub weapon: Entity,
    pub result: HitscanResult,
    pub remaining_ammo: u32,
}
