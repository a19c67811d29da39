use bevy::prelude::*;

/// Ejection impulse is drawn from `[EJECT_MIN_FRACTION * power, power]`
pub const EJECT_MIN_FRACTION: f32 = 0.7;
/// The explosive push originates this far behind (along -right) the port
pub const EJECT_ORIGIN_BACK: f32 = 0.3;
/// and this far below it
pub const EJECT_ORIGIN_DOWN: f32 = 0.6;
pub const EJECT_YAW_TORQUE: (f32, f32) = (100.0, 500.0);
pub const EJECT_ROLL_TORQUE: (f32, f32) = (100.0, 1000.0);
/// Eject power is a force applied for one fixed physics step of this length
pub const EJECT_FORCE_STEP: f32 = 0.02;

/// What a weapon spits out of its ejection port.
#[derive(Clone, Debug, PartialEq)]
pub struct CasingTemplate {
    pub mass: f32,
    pub inertia: f32,
}

impl Default for CasingTemplate {
    fn default() -> Self {
        Self {
            mass: 1.0,
            inertia: 1.0,
        }
    }
}

/// A spent casing tumbling away from the weapon
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Casing;

/// Minimal rigid-body state for casings.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct CasingBody {
    pub linear_velocity: Vec3,
    pub angular_velocity: Vec3,
    pub mass: f32,
    pub inertia: f32,
}

impl CasingBody {
    pub fn at_rest(template: &CasingTemplate) -> Self {
        Self {
            linear_velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: template.mass,
            inertia: template.inertia,
        }
    }

    pub fn apply_impulse(&mut self, impulse: Vec3) {
        self.linear_velocity += impulse / self.mass;
    }

    pub fn apply_torque_impulse(&mut self, torque: Vec3, max_angular_speed: f32) {
        self.angular_velocity = (self.angular_velocity + torque / self.inertia)
            .clamp_length_max(max_angular_speed);
    }
}

/// Randomised push and spin for one ejected casing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EjectionKick {
    pub impulse: Vec3,
    pub torque: Vec3,
}

/// World settings for casing motion.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CasingPhysics {
    pub gravity: Vec3,
    /// Floor used when the scene has no ground plane
    pub floor_height: f32,
    /// Fraction of vertical speed kept on a bounce
    pub restitution: f32,
    /// Fraction of horizontal and angular speed lost on a bounce
    pub friction: f32,
    /// Per-second angular damping
    pub angular_damping: f32,
    pub max_angular_speed: f32,
}

impl Default for CasingPhysics {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            floor_height: 0.0,
            restitution: 0.3,
            friction: 0.4,
            angular_damping: 0.05,
            max_angular_speed: 7.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_impulse_scales_by_mass() {
        let mut body = CasingBody::at_rest(&CasingTemplate { mass: 2.0, inertia: 1.0 });
        body.apply_impulse(Vec3::new(4.0, 0.0, 0.0));
        assert_eq!(body.linear_velocity, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_torque_impulse_is_clamped() {
        let mut body = CasingBody::at_rest(&CasingTemplate::default());
        body.apply_torque_impulse(Vec3::new(0.0, 500.0, 1000.0), 7.0);
        assert!((body.angular_velocity.length() - 7.0).abs() < 1e-4);
        // Direction is preserved
        assert!(body.angular_velocity.z > body.angular_velocity.y);
    }

    #[test]
    fn test_casing_physics_defaults() {
        let physics = CasingPhysics::default();
        assert_eq!(physics.gravity, Vec3::new(0.0, -9.81, 0.0));
        assert_eq!(physics.floor_height, 0.0);
    }
}
