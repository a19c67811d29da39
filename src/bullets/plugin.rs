use bevy::prelude::*;
use crate::bullets::systems::*;
use crate::game::sets::GameSet;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (attach_bullet_visuals, bullet_movement_system).in_set(GameSet::Effects),
    );
}
