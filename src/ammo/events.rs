use bevy::prelude::*;

/// Written once per trigger pull on an empty magazine
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfAmmo {
    pub weapon: Entity,
}

/// Written whenever a weapon's magazine is refilled
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reloaded {
    pub weapon: Entity,
}
