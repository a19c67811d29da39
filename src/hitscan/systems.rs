use bevy::math::bounding::{Aabb3d, BoundingSphere, RayCast3d};
use bevy::prelude::*;

use crate::hitscan::components::*;

/// Ray origin for a shot: the muzzle pushed forward so the ray clears the
/// weapon's own geometry.
pub fn hitscan_origin(muzzle: &Transform, barrel_offset: f32) -> Vec3 {
    muzzle.translation + *muzzle.forward() * barrel_offset
}

/// Distance along `ray` to the collider's surface, if within `max_distance`.
/// A ray starting inside the shape reports 0.
pub fn ray_distance(
    ray: Ray3d,
    max_distance: f32,
    transform: &Transform,
    collider: &Collider,
) -> Option<f32> {
    match collider.shape {
        ColliderShape::Cuboid { half_extents } => {
            // Test in the cuboid's local frame so rotated boxes work
            let inverse = transform.rotation.inverse();
            let local_ray = Ray3d::new(
                inverse * (ray.origin - transform.translation),
                inverse * ray.direction,
            );
            RayCast3d::from_ray(local_ray, max_distance)
                .aabb_intersection_at(&Aabb3d::new(Vec3::ZERO, half_extents))
        }
        ColliderShape::Sphere { radius } => RayCast3d::from_ray(ray, max_distance)
            .sphere_intersection_at(&BoundingSphere::new(transform.translation, radius)),
    }
}

/// Casts a ray against `colliders` and reports the nearest eligible surface.
///
/// Colliders whose layers do not intersect `filter` are skipped. With nothing
/// in range the result is a miss at exactly `max_distance` along the ray.
pub fn resolve_hitscan<'a>(
    origin: Vec3,
    direction: Dir3,
    max_distance: f32,
    filter: LayerMask,
    colliders: impl IntoIterator<Item = (Entity, &'a Transform, &'a Collider)>,
) -> HitscanResult {
    let ray = Ray3d::new(origin, direction);

    let nearest = colliders
        .into_iter()
        .filter(|(_, _, collider)| collider.layers.intersects(filter))
        .filter_map(|(entity, transform, collider)| {
            ray_distance(ray, max_distance, transform, collider).map(|distance| (entity, distance))
        })
        .min_by(|a, b| a.1.total_cmp(&b.1));

    match nearest {
        Some((surface, distance)) => HitscanResult::Hit {
            point: ray.get_point(distance),
            distance,
            surface,
        },
        None => HitscanResult::Miss {
            point: ray.get_point(max_distance),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hitscan::components::layers;

    const EPSILON: f32 = 1e-4;

    fn spawn_collider(world: &mut World, transform: Transform, collider: Collider) -> Entity {
        world.spawn((transform, collider)).id()
    }

    fn cast(world: &mut World, origin: Vec3, direction: Dir3, max: f32, filter: LayerMask) -> HitscanResult {
        let mut query = world.query::<(Entity, &Transform, &Collider)>();
        resolve_hitscan(origin, direction, max, filter, query.iter(world))
    }

    #[test]
    fn test_empty_world_misses_at_max_range() {
        let mut world = World::new();
        let result = cast(&mut world, Vec3::new(1.0, 2.0, 3.0), Dir3::NEG_Z, 100.0, LayerMask::ALL);

        assert_eq!(result, HitscanResult::Miss { point: Vec3::new(1.0, 2.0, -97.0) });
    }

    #[test]
    fn test_cuboid_hit_at_front_face() {
        let mut world = World::new();
        // Front face sits at z = -10
        let wall = spawn_collider(
            &mut world,
            Transform::from_xyz(0.0, 0.0, -11.0),
            Collider::cuboid(Vec3::ONE),
        );

        let result = cast(&mut world, Vec3::ZERO, Dir3::NEG_Z, 100.0, LayerMask::ALL);

        let HitscanResult::Hit { point, distance, surface } = result else {
            panic!("expected a hit, got {:?}", result);
        };
        assert_eq!(surface, wall);
        assert!((distance - 10.0).abs() < EPSILON);
        assert!(point.distance(Vec3::new(0.0, 0.0, -10.0)) < EPSILON);
    }

    #[test]
    fn test_sphere_hit_distance() {
        let mut world = World::new();
        let target = spawn_collider(
            &mut world,
            Transform::from_xyz(20.0, 0.0, 0.0),
            Collider::sphere(2.0),
        );

        let result = cast(&mut world, Vec3::ZERO, Dir3::X, 100.0, LayerMask::ALL);

        assert_eq!(result.surface(), Some(target));
        assert!((result.point().x - 18.0).abs() < EPSILON);
    }

    #[test]
    fn test_surface_beyond_range_is_a_miss() {
        let mut world = World::new();
        spawn_collider(
            &mut world,
            Transform::from_xyz(0.0, 0.0, -60.0),
            Collider::cuboid(Vec3::ONE),
        );

        let result = cast(&mut world, Vec3::ZERO, Dir3::NEG_Z, 50.0, LayerMask::ALL);

        assert_eq!(result, HitscanResult::Miss { point: Vec3::new(0.0, 0.0, -50.0) });
    }

    #[test]
    fn test_nearest_surface_wins() {
        let mut world = World::new();
        spawn_collider(
            &mut world,
            Transform::from_xyz(0.0, 0.0, -30.0),
            Collider::cuboid(Vec3::ONE),
        );
        let near = spawn_collider(
            &mut world,
            Transform::from_xyz(0.0, 0.0, -5.0),
            Collider::sphere(0.5),
        );

        let result = cast(&mut world, Vec3::ZERO, Dir3::NEG_Z, 100.0, LayerMask::ALL);

        assert_eq!(result.surface(), Some(near));
    }

    #[test]
    fn test_layer_filter_skips_ineligible_surfaces() {
        let mut world = World::new();
        spawn_collider(
            &mut world,
            Transform::from_xyz(0.0, 0.0, -5.0),
            Collider::cuboid(Vec3::ONE).with_layers(layers::TARGETS),
        );
        let wall = spawn_collider(
            &mut world,
            Transform::from_xyz(0.0, 0.0, -20.0),
            Collider::cuboid(Vec3::ONE).with_layers(layers::WALLS),
        );

        let result = cast(&mut world, Vec3::ZERO, Dir3::NEG_Z, 100.0, layers::WALLS);

        assert_eq!(result.surface(), Some(wall));
    }

    #[test]
    fn test_rotated_cuboid_uses_local_frame() {
        let mut world = World::new();
        // A thin slab turned 90 degrees about Y so its thin side faces +X
        let slab = spawn_collider(
            &mut world,
            Transform::from_xyz(10.0, 0.0, 0.0).with_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2)),
            Collider::cuboid(Vec3::new(0.1, 2.0, 3.0)),
        );

        let result = cast(&mut world, Vec3::ZERO, Dir3::X, 100.0, LayerMask::ALL);

        let HitscanResult::Hit { distance, surface, .. } = result else {
            panic!("expected a hit, got {:?}", result);
        };
        assert_eq!(surface, slab);
        assert!((distance - 7.0).abs() < EPSILON);
    }

    #[test]
    fn test_origin_inside_collider_hits_at_zero() {
        let mut world = World::new();
        spawn_collider(&mut world, Transform::IDENTITY, Collider::sphere(1.0));

        let result = cast(&mut world, Vec3::ZERO, Dir3::Y, 10.0, LayerMask::ALL);

        let HitscanResult::Hit { distance, .. } = result else {
            panic!("expected a hit, got {:?}", result);
        };
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_hitscan_origin_applies_barrel_offset() {
        let muzzle = Transform::from_xyz(0.0, 1.0, 0.0);
        // Default forward is -Z
        let origin = hitscan_origin(&muzzle, 0.5);
        assert!(origin.distance(Vec3::new(0.0, 1.0, -0.5)) < EPSILON);
    }
}
