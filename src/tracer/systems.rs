use bevy::prelude::*;

use crate::game::resources::GameMeshes;
use crate::lifetime::components::Expiry;
use crate::tracer::components::*;

/// Spawns a tracer from just ahead of `origin` to `end`, plus the fade task
/// that animates it. The line's despawn timer and the fade start together
/// and run independently.
pub fn spawn_tracer(
    commands: &mut Commands,
    origin: Vec3,
    forward: Dir3,
    end: Vec3,
    style: &TracerStyle,
) -> Entity {
    let color = glow_color(style.color);
    let line = TracerLine {
        start: origin + *forward * TRACER_START_NUDGE,
        end,
        color,
        width: style.width,
    };

    let tracer = commands
        .spawn((
            line.transform(),
            line,
            Expiry::from_seconds(style.duration),
            Name::new("TracerLine"),
        ))
        .id();

    commands.spawn(FadeTask::new(tracer, style.duration, color));

    tracer
}

/// Advances every fade task by one frame.
///
/// Each step checks the target tracer still exists; if it was despawned the
/// task ends quietly. Otherwise the alpha for the current elapsed time is
/// written, and the task finishes once the full duration has been shown.
pub fn advance_fade_tasks(
    mut commands: Commands,
    time: Res<Time>,
    mut tasks: Query<(Entity, &mut FadeTask)>,
    mut tracers: Query<&mut TracerLine>,
) {
    for (task_entity, mut task) in tasks.iter_mut() {
        let Ok(mut line) = tracers.get_mut(task.target) else {
            commands.entity(task_entity).try_despawn();
            continue;
        };

        line.color = task.current_color();

        if task.is_finished() {
            commands.entity(task_entity).try_despawn();
        } else {
            task.elapsed += time.delta_secs();
        }
    }
}

/// Gives newly spawned tracers a mesh and their own fading material.
/// Tracers stay invisible when no render assets exist.
pub fn attach_tracer_visuals(
    mut commands: Commands,
    game_meshes: Option<Res<GameMeshes>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
    added: Query<(Entity, &TracerLine), Added<TracerLine>>,
) {
    let (Some(game_meshes), Some(mut materials)) = (game_meshes, materials) else {
        return;
    };

    for (entity, line) in added.iter() {
        let material = materials.add(StandardMaterial {
            base_color: line.color.into(),
            emissive: line.color,
            unlit: true,
            alpha_mode: AlphaMode::Blend,
            ..default()
        });

        commands.entity(entity).insert((
            Mesh3d(game_meshes.tracer.clone()),
            MeshMaterial3d(material),
        ));
    }
}

/// Pushes each tracer's faded colour into its material.
pub fn sync_tracer_materials(
    materials: Option<ResMut<Assets<StandardMaterial>>>,
    tracers: Query<(&TracerLine, &MeshMaterial3d<StandardMaterial>), Changed<TracerLine>>,
) {
    let Some(mut materials) = materials else {
        return;
    };

    for (line, material_handle) in tracers.iter() {
        if let Some(material) = materials.get_mut(&material_handle.0) {
            material.base_color = line.color.into();
            material.emissive = line.color;
        }
    }
}
