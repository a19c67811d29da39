use bevy::prelude::*;

use crate::weapon::components::WeaponConfig;

/// Scene tuning picked at launch
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DemoSettings {
    pub weapon: WeaponConfig,
    /// Target blocks placed downrange
    pub targets: u32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            weapon: WeaponConfig::default(),
            targets: 3,
        }
    }
}

/// Shared meshes for transient effects, created once at startup
#[derive(Resource, Clone)]
pub struct GameMeshes {
    /// Unit cylinder (radius 0.5, height 1) stretched between tracer end points
    pub tracer: Handle<Mesh>,
    pub casing: Handle<Mesh>,
    pub bullet: Handle<Mesh>,
}

/// Shared materials for effects that never change colour.
/// Tracers get their own material each because they fade individually.
#[derive(Resource, Clone)]
pub struct GameMaterials {
    pub casing: Handle<StandardMaterial>,
    pub bullet: Handle<StandardMaterial>,
}

/// Creates [`GameMeshes`] and [`GameMaterials`].
/// Skipped when the render asset stores are absent (headless tests).
pub fn setup_effect_assets(
    mut commands: Commands,
    meshes: Option<ResMut<Assets<Mesh>>>,
    materials: Option<ResMut<Assets<StandardMaterial>>>,
) {
    let (Some(mut meshes), Some(mut materials)) = (meshes, materials) else {
        return;
    };

    commands.insert_resource(GameMeshes {
        tracer: meshes.add(Cylinder::new(0.5, 1.0)),
        // 9mm brass, roughly
        casing: meshes.add(Cylinder::new(0.012, 0.04)),
        bullet: meshes.add(Sphere::new(0.02)),
    });

    commands.insert_resource(GameMaterials {
        casing: materials.add(StandardMaterial {
            base_color: Color::srgb(0.85, 0.65, 0.25),
            metallic: 0.9,
            perceptual_roughness: 0.3,
            ..default()
        }),
        bullet: materials.add(StandardMaterial {
            base_color: Color::srgb(0.6, 0.5, 0.4),
            metallic: 0.8,
            ..default()
        }),
    });
}
