use bevy::prelude::*;

/// How far the visible line starts ahead of the ray origin, so it does not
/// clip into the weapon mesh
pub const TRACER_START_NUDGE: f32 = 0.1;
/// RGB multiplier giving the tracer an HDR glow
pub const TRACER_GLOW_BOOST: f32 = 2.0;

/// Visual settings for a weapon's tracers.
#[derive(Clone, Debug, PartialEq)]
pub struct TracerStyle {
    pub color: Color,
    pub width: f32,
    /// Both the fade duration and the line's lifetime
    pub duration: f32,
}

impl Default for TracerStyle {
    fn default() -> Self {
        Self {
            color: Color::srgb(1.0, 0.92, 0.016), // Yellow
            width: 0.5,
            duration: 0.5,
        }
    }
}

/// A transient line segment drawn along a shot's path.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct TracerLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: LinearRgba,
    pub width: f32,
}

impl TracerLine {
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Pose that stretches a unit Y-up cylinder from `start` to `end`.
    pub fn transform(&self) -> Transform {
        let direction = (self.end - self.start).normalize_or_zero();
        let rotation = if direction == Vec3::ZERO {
            Quat::IDENTITY
        } else {
            Quat::from_rotation_arc(Vec3::Y, direction)
        };
        Transform::from_translation((self.start + self.end) / 2.0)
            .with_rotation(rotation)
            .with_scale(Vec3::new(self.width, self.length(), self.width))
    }
}

/// Per-frame fade animation for one tracer. Lives on its own entity and
/// ends early if its target disappears.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct FadeTask {
    pub target: Entity,
    pub elapsed: f32,
    pub duration: f32,
    pub base_color: LinearRgba,
}

impl FadeTask {
    pub fn new(target: Entity, duration: f32, base_color: LinearRgba) -> Self {
        Self {
            target,
            elapsed: 0.0,
            duration,
            base_color,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn current_color(&self) -> LinearRgba {
        self.base_color.with_alpha(fade_alpha(self.elapsed, self.duration))
    }
}

/// Opacity at `elapsed` seconds into a fade lasting `duration`:
/// 1 at the start, 0 at the end, linear in between.
pub fn fade_alpha(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    1.0 - (elapsed / duration).clamp(0.0, 1.0)
}

/// The configured colour with RGB doubled for glow, fully opaque.
pub fn glow_color(color: Color) -> LinearRgba {
    let linear = color.to_linear();
    LinearRgba::new(
        linear.red * TRACER_GLOW_BOOST,
        linear.green * TRACER_GLOW_BOOST,
        linear.blue * TRACER_GLOW_BOOST,
        1.0,
    )
}
