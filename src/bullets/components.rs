use bevy::prelude::*;

/// A physical slug fired alongside the hitscan shot.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Bullet {
    pub velocity: Vec3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_component_creation() {
        let bullet = Bullet {
            velocity: Vec3::new(0.0, 0.0, -500.0),
        };
        assert_eq!(bullet.velocity.length(), 500.0);
    }
}
