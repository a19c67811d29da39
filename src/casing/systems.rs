use bevy::prelude::*;
use rand::Rng;

use crate::casing::components::*;
use crate::game::components::GroundPlane;
use crate::game::resources::{GameMaterials, GameMeshes};
use crate::hitscan::components::{Collider, ColliderShape};
use crate::lifetime::components::Expiry;

/// Rolls the push and spin for a casing leaving `port`.
///
/// The push has a magnitude in `[0.7 * eject_power, eject_power]` and points
/// from a spot behind and below the port toward the port itself. A negative
/// or non-finite power ejects with no push.
pub fn roll_ejection_kick<R: Rng>(port: &Transform, eject_power: f32, rng: &mut R) -> EjectionKick {
    let blast_origin = port.translation
        - *port.right() * EJECT_ORIGIN_BACK
        - *port.up() * EJECT_ORIGIN_DOWN;
    let direction = (port.translation - blast_origin).normalize_or(*port.up());
    let power = if eject_power.is_finite() { eject_power.max(0.0) } else { 0.0 };
    let magnitude = rng.gen_range(power * EJECT_MIN_FRACTION..=power);

    let torque = Vec3::new(
        0.0,
        rng.gen_range(EJECT_YAW_TORQUE.0..=EJECT_YAW_TORQUE.1),
        rng.gen_range(EJECT_ROLL_TORQUE.0..=EJECT_ROLL_TORQUE.1),
    );

    EjectionKick {
        impulse: direction * magnitude,
        torque,
    }
}

/// Spawns a casing at the ejection port and kicks it out.
/// Without a port or a casing template this does nothing.
#[allow(clippy::too_many_arguments)]
pub fn eject_casing<R: Rng>(
    commands: &mut Commands,
    port: Option<Transform>,
    template: Option<&CasingTemplate>,
    eject_power: f32,
    max_angular_speed: f32,
    lifetime: f32,
    rng: &mut R,
) -> Option<Entity> {
    let (Some(port), Some(template)) = (port, template) else {
        return None;
    };

    let kick = roll_ejection_kick(&port, eject_power, rng);
    let mut body = CasingBody::at_rest(template);
    body.apply_impulse(kick.impulse * EJECT_FORCE_STEP);
    body.apply_torque_impulse(kick.torque, max_angular_speed);

    let casing = commands
        .spawn((
            Casing,
            body,
            port,
            Expiry::from_seconds(lifetime),
            Name::new("Casing"),
        ))
        .id();

    Some(casing)
}

/// Height of the top face of a ground collider.
fn ground_top(transform: &Transform, collider: &Collider) -> f32 {
    let half_height = match collider.shape {
        ColliderShape::Cuboid { half_extents } => half_extents.y,
        ColliderShape::Sphere { radius } => radius,
    };
    transform.translation.y + half_height
}

/// Integrates casing motion with gravity and a bouncy floor. The floor is
/// the highest ground plane top, or [`CasingPhysics::floor_height`] without one.
pub fn integrate_casings(
    time: Res<Time>,
    physics: Res<CasingPhysics>,
    ground: Query<(&Transform, &Collider), (With<GroundPlane>, Without<Casing>)>,
    mut casings: Query<(&mut Transform, &mut CasingBody), With<Casing>>,
) {
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    let floor_height = ground
        .iter()
        .map(|(transform, collider)| ground_top(transform, collider))
        .max_by(f32::total_cmp)
        .unwrap_or(physics.floor_height);

    for (mut transform, mut body) in casings.iter_mut() {
        body.linear_velocity += physics.gravity * dt;
        transform.translation += body.linear_velocity * dt;

        if transform.translation.y < floor_height {
            transform.translation.y = floor_height;
            if body.linear_velocity.y < 0.0 {
                let keep = 1.0 - physics.friction;
                body.linear_velocity.y = -body.linear_velocity.y * physics.restitution;
                body.linear_velocity.x *= keep;
                body.linear_velocity.z *= keep;
                body.angular_velocity *= keep;
            }
        }

        body.angular_velocity *= (1.0 - physics.angular_damping * dt).max(0.0);
        let spin = Quat::from_scaled_axis(body.angular_velocity * dt);
        transform.rotation = (spin * transform.rotation).normalize();
    }
}

/// Gives newly ejected casings their brass mesh.
pub fn attach_casing_visuals(
    mut commands: Commands,
    game_meshes: Option<Res<GameMeshes>>,
    game_materials: Option<Res<GameMaterials>>,
    added: Query<Entity, Added<Casing>>,
) {
    let (Some(meshes), Some(materials)) = (game_meshes, game_materials) else {
        return;
    };

    for entity in added.iter() {
        commands.entity(entity).insert((
            Mesh3d(meshes.casing.clone()),
            MeshMaterial3d(materials.casing.clone()),
        ));
    }
}
