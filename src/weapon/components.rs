use bevy::prelude::*;

use crate::casing::components::CasingTemplate;
use crate::hitscan::components::LayerMask;
use crate::tracer::components::TracerStyle;

/// Tilt from world up beyond which the weapon counts as turned over and
/// refills itself
pub const RELOAD_TILT_DEGREES: f32 = 100.0;

/// Slack for float error in [`tilt_degrees`], so a weapon at exactly
/// [`RELOAD_TILT_DEGREES`] still counts as upright
const TILT_EPSILON_DEGREES: f32 = 1e-3;

/// Tunable settings for one weapon.
#[derive(Clone, Debug, PartialEq)]
pub struct WeaponConfig {
    pub max_ammo: u32,
    /// Lifetime of casings and muzzle flashes
    pub destroy_timer: f32,
    /// Launch speed of the physical bullet
    pub shot_speed: f32,
    pub eject_power: f32,
    pub tracer: TracerStyle,
    pub hit_layers: LayerMask,
    pub range: f32,
    pub barrel_offset: f32,
    pub muzzle_flash: bool,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            max_ammo: 10,
            destroy_timer: 2.0,
            shot_speed: 500.0,
            eject_power: 150.0,
            tracer: TracerStyle::default(),
            hit_layers: LayerMask::ALL,
            range: 100.0,
            barrel_offset: 0.5,
            muzzle_flash: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WeaponPhase {
    #[default]
    Idle,
    /// Set for the frame in which a shot went off
    Firing,
}

/// A handgun. Muzzle and ejection port are offsets in the weapon's local
/// space. A missing muzzle falls back to the weapon's own pose, while a
/// missing port or casing template disables casing ejection.
#[derive(Component, Clone, Debug)]
pub struct Weapon {
    pub config: WeaponConfig,
    pub muzzle: Option<Transform>,
    pub ejection_port: Option<Transform>,
    pub casing: Option<CasingTemplate>,
    pub phase: WeaponPhase,
}

impl Weapon {
    pub fn new(config: WeaponConfig) -> Self {
        Self {
            config,
            muzzle: None,
            ejection_port: None,
            casing: None,
            phase: WeaponPhase::Idle,
        }
    }

    pub fn with_muzzle(mut self, muzzle: Transform) -> Self {
        self.muzzle = Some(muzzle);
        self
    }

    pub fn with_ejection_port(mut self, port: Transform, casing: CasingTemplate) -> Self {
        self.ejection_port = Some(port);
        self.casing = Some(casing);
        self
    }

    /// World pose of the muzzle.
    pub fn muzzle_pose(&self, weapon_transform: &Transform) -> Transform {
        match self.muzzle {
            Some(local) => weapon_transform.mul_transform(local),
            None => *weapon_transform,
        }
    }

    /// World pose of the ejection port, if the weapon has one.
    pub fn ejection_pose(&self, weapon_transform: &Transform) -> Option<Transform> {
        self.ejection_port
            .map(|local| weapon_transform.mul_transform(local))
    }
}

/// Angle in degrees between the weapon's up axis and world up.
pub fn tilt_degrees(weapon_transform: &Transform) -> f32 {
    weapon_transform.up().angle_between(Vec3::Y).to_degrees()
}

/// True once the weapon is tilted past [`RELOAD_TILT_DEGREES`]. At the
/// threshold itself it may still fire.
pub fn is_turned_over(weapon_transform: &Transform) -> bool {
    tilt_degrees(weapon_transform) > RELOAD_TILT_DEGREES + TILT_EPSILON_DEGREES
}

/// Edge-triggered player intent for the current frame
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TriggerInput {
    pub fire_pressed: bool,
    pub reload_pressed: bool,
}
