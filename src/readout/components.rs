use bevy::prelude::*;

use crate::ammo::components::AmmoState;

pub const FLASH_TEXT: &str = "RELOAD";
/// Length of each half of a flash cycle
pub const FLASH_PHASE_SECS: f32 = 0.5;
pub const FLASH_CYCLES: u32 = 3;

pub const READOUT_RED: Color = Color::srgb(1.0, 0.0, 0.0);
pub const READOUT_YELLOW: Color = Color::srgb(1.0, 0.92, 0.016);
pub const READOUT_WHITE: Color = Color::WHITE;

/// On-screen ammo counter bound to one weapon.
#[derive(Component, Debug, Clone)]
pub struct AmmoReadout {
    pub weapon: Entity,
    /// Present while the "RELOAD" warning is flashing
    pub flash: Option<FlashCue>,
}

impl AmmoReadout {
    pub fn new(weapon: Entity) -> Self {
        Self { weapon, flash: None }
    }

    pub fn is_flashing(&self) -> bool {
        self.flash.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashPhase {
    Alert,
    Original,
}

/// Alternates the readout between the warning and whatever it showed when
/// the cue started.
#[derive(Debug, Clone, PartialEq)]
pub struct FlashCue {
    pub elapsed: f32,
    pub original_text: String,
    pub original_color: Color,
}

impl FlashCue {
    pub fn new(original_text: impl Into<String>, original_color: Color) -> Self {
        Self {
            elapsed: 0.0,
            original_text: original_text.into(),
            original_color,
        }
    }

    pub fn total_duration() -> f32 {
        FLASH_CYCLES as f32 * 2.0 * FLASH_PHASE_SECS
    }

    /// What to show at the current elapsed time, or `None` once every cycle
    /// has played.
    pub fn phase(&self) -> Option<FlashPhase> {
        if self.elapsed >= Self::total_duration() {
            return None;
        }
        let half_cycle = (self.elapsed / FLASH_PHASE_SECS).floor() as u32;
        if half_cycle % 2 == 0 {
            Some(FlashPhase::Alert)
        } else {
            Some(FlashPhase::Original)
        }
    }
}

/// Red when empty, yellow at or under 30% of the magazine, white otherwise.
pub fn readout_color(ammo: &AmmoState) -> Color {
    if ammo.is_empty() {
        READOUT_RED
    } else if ammo.is_low() {
        READOUT_YELLOW
    } else {
        READOUT_WHITE
    }
}
