use bevy::prelude::*;
use crate::game::sets::GameSet;
use crate::readout::systems::*;

pub fn plugin(app: &mut App) {
    app.add_systems(Update, update_ammo_readouts.in_set(GameSet::Effects));
}
