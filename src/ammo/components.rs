use bevy::prelude::*;

/// Fraction of the magazine at or below which ammo counts as low.
pub const LOW_AMMO_FRACTION: f32 = 0.3;

/// Result of pulling the trigger on an [`AmmoState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired,
    NotFired,
}

/// Magazine counter for a weapon. `current` never leaves `0..=max`.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub struct AmmoState {
    max: u32,
    current: u32,
}

impl AmmoState {
    /// A full magazine of `max` rounds.
    pub fn full(max: u32) -> Self {
        Self { max, current: max }
    }

    /// A magazine holding `current` rounds, clamped to `max`.
    pub fn with_current(max: u32, current: u32) -> Self {
        Self {
            max,
            current: current.min(max),
        }
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn reload(&mut self) {
        self.current = self.max;
    }

    /// Spends one round. An empty magazine is a no-op, not an error.
    pub fn fire(&mut self) -> FireOutcome {
        if self.current == 0 {
            return FireOutcome::NotFired;
        }
        self.current -= 1;
        FireOutcome::Fired
    }

    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    pub fn is_full(&self) -> bool {
        self.current == self.max
    }

    pub fn is_low(&self) -> bool {
        self.current as f32 <= self.max as f32 * LOW_AMMO_FRACTION
    }
}
