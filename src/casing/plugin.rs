use bevy::prelude::*;
use crate::casing::components::CasingPhysics;
use crate::casing::systems::*;
use crate::game::sets::GameSet;

pub fn plugin(app: &mut App) {
    app.init_resource::<CasingPhysics>().add_systems(
        Update,
        (attach_casing_visuals, integrate_casings).in_set(GameSet::Effects),
    );
}
