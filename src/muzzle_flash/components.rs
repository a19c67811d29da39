use bevy::prelude::*;
use bevy_hanabi::prelude::EffectAsset;

/// A short-lived flash at the muzzle of a weapon that just fired
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct MuzzleFlash;

/// The particle burst every muzzle flash plays
#[derive(Resource, Clone)]
pub struct MuzzleFlashEffect(pub Handle<EffectAsset>);
