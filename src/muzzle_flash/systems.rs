use bevy::prelude::*;
use bevy_hanabi::prelude::*;
use bevy_hanabi::Gradient as HanabiGradient;

use crate::lifetime::components::Expiry;
use crate::muzzle_flash::components::*;

const FLASH_PARTICLE_LIFETIME: f32 = 0.06;
const FLASH_PARTICLE_COUNT: f32 = 24.0;
const FLASH_SPEED: f32 = 2.5;
const FLASH_SIZE: f32 = 0.05;

/// Creates the muzzle flash burst - a hot white-yellow pop that is gone
/// within a few frames
pub fn create_muzzle_flash_effect(effects: &mut Assets<EffectAsset>) -> Handle<EffectAsset> {
    let mut color_gradient = HanabiGradient::<Vec4>::new();
    color_gradient.add_key(0.0, Vec4::new(4.0, 3.6, 2.0, 1.0)); // HDR white-yellow
    color_gradient.add_key(0.4, Vec4::new(2.0, 1.2, 0.3, 0.8));
    color_gradient.add_key(1.0, Vec4::new(1.0, 0.4, 0.0, 0.0));

    let mut size_gradient = HanabiGradient::<Vec3>::new();
    size_gradient.add_key(0.0, Vec3::splat(FLASH_SIZE));
    size_gradient.add_key(0.3, Vec3::splat(FLASH_SIZE * 2.0));
    size_gradient.add_key(1.0, Vec3::splat(0.0));

    let writer = ExprWriter::new();
    let lifetime = writer.lit(FLASH_PARTICLE_LIFETIME).expr();
    let init_lifetime = SetAttributeModifier::new(Attribute::LIFETIME, lifetime);

    let init_pos = SetPositionSphereModifier {
        center: writer.lit(Vec3::ZERO).expr(),
        radius: writer.lit(0.02).expr(),
        dimension: ShapeDimension::Volume,
    };

    let init_vel = SetVelocitySphereModifier {
        center: writer.lit(Vec3::ZERO).expr(),
        speed: writer.lit(FLASH_SPEED).expr(),
    };

    let drag = LinearDragModifier::new(writer.lit(20.0).expr());

    let effect = EffectAsset::new(
        64,
        SpawnerSettings::once(FLASH_PARTICLE_COUNT.into()),
        writer.finish(),
    )
    .with_name("muzzle_flash")
    .with_simulation_space(SimulationSpace::Global)
    .init(init_lifetime)
    .init(init_pos)
    .init(init_vel)
    .update(drag)
    .render(ColorOverLifetimeModifier {
        gradient: color_gradient,
        blend: ColorBlendMode::Overwrite,
        mask: ColorBlendMask::RGBA,
    })
    .render(SizeOverLifetimeModifier {
        gradient: size_gradient,
        screen_space_size: false,
    });

    effects.add(effect)
}

/// Builds the shared [`MuzzleFlashEffect`].
/// Uses Option to handle tests that don't have the HanabiPlugin
pub fn setup_muzzle_flash_effect(
    mut commands: Commands,
    effects: Option<ResMut<Assets<EffectAsset>>>,
) {
    let Some(mut effects) = effects else {
        return;
    };
    commands.insert_resource(MuzzleFlashEffect(create_muzzle_flash_effect(&mut effects)));
}

/// Spawns a flash at the muzzle that despawns after `lifetime` seconds.
/// Particles are attached only when the effect asset exists.
pub fn spawn_muzzle_flash(
    commands: &mut Commands,
    muzzle: Transform,
    effect: Option<&MuzzleFlashEffect>,
    lifetime: f32,
) -> Entity {
    let mut flash = commands.spawn((
        MuzzleFlash,
        muzzle,
        Expiry::from_seconds(lifetime),
        Name::new("MuzzleFlash"),
    ));

    if let Some(effect) = effect {
        flash.insert(ParticleEffect::new(effect.0.clone()));
    }

    flash.id()
}
