use bevy::prelude::*;

use crate::ammo::components::AmmoState;
use crate::casing::components::CasingTemplate;
use crate::game::components::*;
use crate::game::resources::DemoSettings;
use crate::hitscan::components::{layers, Collider, LayerMask, Wall};
use crate::readout::components::AmmoReadout;
use crate::weapon::components::Weapon;

/// Spacing between target blocks along X
const TARGET_SPACING: f32 = 4.0;
const TARGET_DISTANCE: f32 = 20.0;
const BACKSTOP_DISTANCE: f32 = 60.0;

fn block_visual(
    meshes: &mut Option<ResMut<Assets<Mesh>>>,
    materials: &mut Option<ResMut<Assets<StandardMaterial>>>,
    half_extents: Vec3,
    color: Color,
) -> Option<(Mesh3d, MeshMaterial3d<StandardMaterial>)> {
    let meshes = meshes.as_deref_mut()?;
    let materials = materials.as_deref_mut()?;
    Some((
        Mesh3d(meshes.add(Cuboid::from_size(half_extents * 2.0))),
        MeshMaterial3d(materials.add(color)),
    ))
}

fn spawn_block(
    commands: &mut Commands,
    transform: Transform,
    half_extents: Vec3,
    layer: LayerMask,
    visual: Option<(Mesh3d, MeshMaterial3d<StandardMaterial>)>,
) -> Entity {
    let mut block = commands.spawn((
        Wall,
        Collider::cuboid(half_extents).with_layers(layer),
        transform,
    ));
    if let Some(visual) = visual {
        block.insert(visual);
    }
    block.id()
}

/// Builds the firing range: camera, light, floor, backstop, targets, the
/// handgun and its ammo readout.
pub fn setup_range(
    mut commands: Commands,
    settings: Res<DemoSettings>,
    mut meshes: Option<ResMut<Assets<Mesh>>>,
    mut materials: Option<ResMut<Assets<StandardMaterial>>>,
    camera_query: Query<Entity, With<Camera>>,
) {
    if camera_query.is_empty() {
        commands.spawn((
            Camera3d::default(),
            Transform::from_xyz(0.0, 2.2, 2.5).looking_at(Vec3::new(0.0, 1.5, -TARGET_DISTANCE), Vec3::Y),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 10.0, 4.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    // Floor
    let floor_extents = Vec3::new(50.0, 0.5, 80.0);
    let floor_visual = block_visual(&mut meshes, &mut materials, floor_extents, Color::srgb(0.3, 0.32, 0.3));
    let floor = spawn_block(
        &mut commands,
        Transform::from_xyz(0.0, -0.5, -BACKSTOP_DISTANCE / 2.0),
        floor_extents,
        layers::WALLS,
        floor_visual,
    );
    commands.entity(floor).insert(GroundPlane);

    // Backstop
    let backstop_extents = Vec3::new(30.0, 10.0, 0.5);
    let backstop_visual = block_visual(&mut meshes, &mut materials, backstop_extents, Color::srgb(0.45, 0.4, 0.35));
    spawn_block(
        &mut commands,
        Transform::from_xyz(0.0, 10.0, -BACKSTOP_DISTANCE),
        backstop_extents,
        layers::WALLS,
        backstop_visual,
    );

    let target_extents = Vec3::new(1.0, 1.0, 0.25);
    let first_x = -(settings.targets.saturating_sub(1) as f32) * TARGET_SPACING / 2.0;
    for i in 0..settings.targets {
        let visual = block_visual(&mut meshes, &mut materials, target_extents, Color::srgb(0.8, 0.2, 0.15));
        let target = spawn_block(
            &mut commands,
            Transform::from_xyz(first_x + i as f32 * TARGET_SPACING, 1.5, -TARGET_DISTANCE),
            target_extents,
            layers::TARGETS,
            visual,
        );
        commands.entity(target).insert(RangeTarget);
    }

    // Handgun held just below the camera
    let config = settings.weapon.clone();
    let ammo = AmmoState::full(config.max_ammo);
    let weapon = Weapon::new(config)
        .with_muzzle(Transform::from_xyz(0.0, 0.05, -0.2))
        .with_ejection_port(Transform::from_xyz(0.03, 0.06, -0.05), CasingTemplate::default());
    let weapon_visual = block_visual(&mut meshes, &mut materials, Vec3::new(0.03, 0.07, 0.15), Color::srgb(0.15, 0.15, 0.17));
    let mut gun = commands.spawn((
        weapon,
        ammo,
        Transform::from_xyz(0.25, 1.5, 0.0),
        Name::new("Handgun"),
    ));
    if let Some(visual) = weapon_visual {
        gun.insert(visual);
    }
    let gun = gun.id();

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            ..default()
        },
        Text::new(""),
        TextFont {
            font_size: 48.0,
            ..default()
        },
        TextColor(Color::WHITE),
        AmmoReadout::new(gun),
    ));

    info!("Range ready with {} targets", settings.targets);
}
