use bevy::prelude::*;
use crate::ammo::events::{OutOfAmmo, Reloaded};
use crate::game::sets::GameSet;
use crate::muzzle_flash::systems::setup_muzzle_flash_effect;
use crate::weapon::components::TriggerInput;
use crate::weapon::events::{FireCue, ShotFired};
use crate::weapon::systems::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<TriggerInput>()
        .add_message::<FireCue>()
        .add_message::<ShotFired>()
        .add_message::<OutOfAmmo>()
        .add_message::<Reloaded>()
        .add_systems(Startup, setup_muzzle_flash_effect)
        .add_systems(
            Update,
            (read_trigger_input, aim_weapon)
                .chain()
                .in_set(GameSet::Input),
        )
        .add_systems(Update, weapon_control_system.in_set(GameSet::Combat));
}
