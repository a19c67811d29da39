use bevy::prelude::*;

use crate::bullets::components::*;
use crate::game::resources::{GameMaterials, GameMeshes};
use crate::hitscan::components::{Collider, LayerMask, Wall};
use crate::hitscan::systems::resolve_hitscan;
use crate::lifetime::components::Expiry;

/// Launches a bullet from the muzzle along its forward axis.
pub fn spawn_bullet(
    commands: &mut Commands,
    muzzle: Transform,
    speed: f32,
    lifetime: f32,
) -> Entity {
    commands
        .spawn((
            Bullet {
                velocity: *muzzle.forward() * speed,
            },
            muzzle,
            Expiry::from_seconds(lifetime),
            Name::new("Bullet"),
        ))
        .id()
}

/// Moves bullets and destroys any whose path this frame crosses a wall.
pub fn bullet_movement_system(
    mut commands: Commands,
    time: Res<Time>,
    mut bullets: Query<(Entity, &mut Transform, &Bullet), Without<Wall>>,
    walls: Query<(Entity, &Transform, &Collider), With<Wall>>,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, bullet) in bullets.iter_mut() {
        let travel = bullet.velocity * dt;
        let distance = travel.length();
        let Ok(direction) = Dir3::new(travel) else {
            continue;
        };

        let sweep = resolve_hitscan(transform.translation, direction, distance, LayerMask::ALL, walls.iter());
        if let Some(wall) = sweep.surface() {
            info!("Bullet destroyed on collision with wall {:?}", wall);
            commands.entity(entity).try_despawn();
            continue;
        }

        transform.translation += travel;
    }
}

/// Gives newly fired bullets their mesh.
pub fn attach_bullet_visuals(
    mut commands: Commands,
    game_meshes: Option<Res<GameMeshes>>,
    game_materials: Option<Res<GameMaterials>>,
    added: Query<Entity, Added<Bullet>>,
) {
    let (Some(meshes), Some(materials)) = (game_meshes, game_materials) else {
        return;
    };

    for entity in added.iter() {
        commands.entity(entity).insert((
            Mesh3d(meshes.bullet.clone()),
            MeshMaterial3d(materials.bullet.clone()),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn setup_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_systems(Update, bullet_movement_system);
        app
    }

    fn step(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        app.update();
    }

    #[test]
    fn test_spawn_bullet_uses_muzzle_forward() {
        let mut app = App::new();
        let muzzle = Transform::from_xyz(0.0, 1.0, 0.0);

        let bullet = app
            .world_mut()
            .run_system_once(move |mut commands: Commands| {
                spawn_bullet(&mut commands, muzzle, 500.0, 2.0)
            })
            .unwrap();

        let component = app.world().get::<Bullet>(bullet).unwrap();
        assert_eq!(component.velocity, Vec3::new(0.0, 0.0, -500.0));
        assert_eq!(app.world().get::<Expiry>(bullet).unwrap().remaining_secs(), 2.0);
    }

    #[test]
    fn test_bullet_moves_by_velocity() {
        let mut app = setup_app();
        let bullet = app
            .world_mut()
            .spawn((Bullet { velocity: Vec3::new(10.0, 0.0, 0.0) }, Transform::IDENTITY))
            .id();

        step(&mut app, 0.5);

        let transform = app.world().get::<Transform>(bullet).unwrap();
        assert!((transform.translation.x - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_bullet_destroyed_by_wall() {
        let mut app = setup_app();
        app.world_mut().spawn((
            Wall,
            Collider::cuboid(Vec3::new(0.5, 5.0, 5.0)),
            Transform::from_xyz(20.0, 0.0, 0.0),
        ));
        let bullet = app
            .world_mut()
            .spawn((Bullet { velocity: Vec3::new(500.0, 0.0, 0.0) }, Transform::IDENTITY))
            .id();

        // One 0.1s step covers 50 units, tunnelling straight through the wall
        // unless the whole segment is swept
        step(&mut app, 0.1);

        assert!(app.world().get_entity(bullet).is_err());
    }

    #[test]
    fn test_bullet_ignores_non_wall_colliders() {
        let mut app = setup_app();
        app.world_mut().spawn((
            Collider::sphere(1.0),
            Transform::from_xyz(2.0, 0.0, 0.0),
        ));
        let bullet = app
            .world_mut()
            .spawn((Bullet { velocity: Vec3::new(10.0, 0.0, 0.0) }, Transform::IDENTITY))
            .id();

        step(&mut app, 0.5);

        assert!(app.world().get_entity(bullet).is_ok());
    }
}
