use bevy::prelude::*;
use crate::game::sets::GameSet;
use crate::tracer::systems::*;

pub fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (attach_tracer_visuals, advance_fade_tasks, sync_tracer_materials)
            .chain()
            .in_set(GameSet::Effects),
    );
}
