use bevy::prelude::*;

/// Bitmask of collision layers. Used both as a collider's membership and as
/// a raycast filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LayerMask(pub u32);

impl LayerMask {
    pub const ALL: Self = Self(u32::MAX);
    pub const NONE: Self = Self(0);

    pub const fn layer(index: u32) -> Self {
        Self(1 << index)
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl Default for LayerMask {
    fn default() -> Self {
        layers::DEFAULT
    }
}

/// Named layers used by the range.
pub mod layers {
    use super::LayerMask;

    pub const DEFAULT: LayerMask = LayerMask::layer(0);
    pub const WALLS: LayerMask = LayerMask::layer(1);
    pub const TARGETS: LayerMask = LayerMask::layer(2);
}

/// Collision shape in the entity's local space. Transform scale is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColliderShape {
    Cuboid { half_extents: Vec3 },
    Sphere { radius: f32 },
}

/// A surface that shots and bullets can hit.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Collider {
    pub shape: ColliderShape,
    pub layers: LayerMask,
}

impl Collider {
    pub fn cuboid(half_extents: Vec3) -> Self {
        Self {
            shape: ColliderShape::Cuboid { half_extents },
            layers: LayerMask::default(),
        }
    }

    pub fn sphere(radius: f32) -> Self {
        Self {
            shape: ColliderShape::Sphere { radius },
            layers: LayerMask::default(),
        }
    }

    pub fn with_layers(mut self, layers: LayerMask) -> Self {
        self.layers = layers;
        self
    }
}

/// Marks colliders that destroy bullets on contact
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Wall;

/// Outcome of a hitscan ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HitscanResult {
    Hit {
        point: Vec3,
        distance: f32,
        surface: Entity,
    },
    Miss {
        point: Vec3,
    },
}

impl HitscanResult {
    /// Where the shot ends: the hit point, or the max-range point on a miss.
    pub fn point(&self) -> Vec3 {
        match self {
            HitscanResult::Hit { point, .. } | HitscanResult::Miss { point } => *point,
        }
    }

    pub fn surface(&self) -> Option<Entity> {
        match self {
            HitscanResult::Hit { surface, .. } => Some(*surface),
            HitscanResult::Miss { .. } => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, HitscanResult::Hit { .. })
    }
}
