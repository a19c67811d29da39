use bevy::prelude::*;

use crate::ammo::components::{AmmoState, FireOutcome};
use crate::ammo::events::{OutOfAmmo, Reloaded};
use crate::audio::components::{AudioBroadcaster, SoundClip};
use crate::bullets::systems::spawn_bullet;
use crate::casing::components::CasingPhysics;
use crate::casing::systems::eject_casing;
use crate::hitscan::components::Collider;
use crate::hitscan::systems::{hitscan_origin, resolve_hitscan};
use crate::muzzle_flash::components::MuzzleFlashEffect;
use crate::muzzle_flash::systems::spawn_muzzle_flash;
use crate::tracer::systems::spawn_tracer;
use crate::weapon::components::*;
use crate::weapon::events::*;

/// Radians per second the aim keys turn the weapon
const AIM_SPEED: f32 = 1.5;

/// Samples this frame's trigger and reload presses.
pub fn read_trigger_input(
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut trigger: ResMut<TriggerInput>,
) {
    let fire_click = mouse.is_some_and(|mouse| mouse.just_pressed(MouseButton::Left));
    let fire_key = keys.as_ref().is_some_and(|keys| keys.just_pressed(KeyCode::Space));
    let reload_key = keys.as_ref().is_some_and(|keys| keys.just_pressed(KeyCode::KeyR));

    *trigger = TriggerInput {
        fire_pressed: fire_click || fire_key,
        reload_pressed: reload_key,
    };
}

/// A/D yaw, W/S pitch, Q/E roll. Rolling far enough turns the weapon over.
pub fn aim_weapon(
    time: Res<Time>,
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mut weapons: Query<&mut Transform, With<Weapon>>,
) {
    let Some(keys) = keys else {
        return;
    };

    let axis = |positive: KeyCode, negative: KeyCode| -> f32 {
        let mut value = 0.0;
        if keys.pressed(positive) {
            value += 1.0;
        }
        if keys.pressed(negative) {
            value -= 1.0;
        }
        value
    };

    let step = AIM_SPEED * time.delta_secs();
    let yaw = axis(KeyCode::KeyA, KeyCode::KeyD) * step;
    let pitch = axis(KeyCode::KeyW, KeyCode::KeyS) * step;
    let roll = axis(KeyCode::KeyQ, KeyCode::KeyE) * step;

    for mut transform in weapons.iter_mut() {
        transform.rotate_y(yaw);
        transform.rotate_local_x(pitch);
        transform.rotate_local_z(roll);
    }
}

/// Runs one control step for every weapon.
///
/// Auto-reload is checked first: a weapon turned more than
/// [`RELOAD_TILT_DEGREES`] from upright with a partial magazine refills.
/// Then a trigger press on an upright weapon either fires (ammo spent, fire
/// cue, hitscan, tracer, bullet, muzzle flash, casing, gunshot) or reports
/// out of ammo.
#[allow(clippy::too_many_arguments)]
pub fn weapon_control_system(
    mut commands: Commands,
    trigger: Res<TriggerInput>,
    casing_physics: Option<Res<CasingPhysics>>,
    flash_effect: Option<Res<MuzzleFlashEffect>>,
    mut audio: AudioBroadcaster,
    mut fire_cues: MessageWriter<FireCue>,
    mut shots: MessageWriter<ShotFired>,
    mut out_of_ammo: MessageWriter<OutOfAmmo>,
    mut reloaded: MessageWriter<Reloaded>,
    mut weapons: Query<(Entity, &Transform, &mut Weapon, &mut AmmoState)>,
    colliders: Query<(Entity, &Transform, &Collider)>,
) {
    let max_angular_speed = casing_physics
        .map(|physics| physics.max_angular_speed)
        .unwrap_or_else(|| CasingPhysics::default().max_angular_speed);
    let mut rng = rand::thread_rng();

    for (entity, transform, mut weapon, mut ammo) in weapons.iter_mut() {
        weapon.phase = WeaponPhase::Idle;
        let turned_over = is_turned_over(transform);
        if (turned_over || trigger.reload_pressed) && !ammo.is_full() {
            ammo.reload();
            reloaded.write(Reloaded { weapon: entity });
            audio.play_once(SoundClip::Reload);
            info!("Reloaded {:?} to {}", entity, ammo.current());
        }

        if !trigger.fire_pressed || turned_over {
            continue;
        }

        if ammo.fire() == FireOutcome::NotFired {
            out_of_ammo.write(OutOfAmmo { weapon: entity });
            info!("Out of ammo!");
            continue;
        }

        weapon.phase = WeaponPhase::Firing;
        fire_cues.write(FireCue { weapon: entity });

        let config = &weapon.config;
        let muzzle = weapon.muzzle_pose(transform);
        let forward = muzzle.forward();

        let origin = hitscan_origin(&muzzle, config.barrel_offset);
        let result = resolve_hitscan(origin, forward, config.range, config.hit_layers, colliders.iter());

        spawn_tracer(&mut commands, origin, forward, result.point(), &config.tracer);
        spawn_bullet(&mut commands, muzzle, config.shot_speed, config.destroy_timer);

        if config.muzzle_flash {
            spawn_muzzle_flash(&mut commands, muzzle, flash_effect.as_deref(), config.destroy_timer);
        }

        eject_casing(
            &mut commands,
            weapon.ejection_pose(transform),
            weapon.casing.as_ref(),
            config.eject_power,
            max_angular_speed,
            config.destroy_timer,
            &mut rng,
        );

        audio.play_once(SoundClip::Gunshot);

        debug!(
            "Shot from {:?}: {} left, hit {:?}",
            entity,
            ammo.current(),
            result.surface()
        );
        shots.write(ShotFired {
            weapon: entity,
            result,
            remaining_ammo: ammo.current(),
        });
    }
}
