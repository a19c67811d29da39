use bevy::prelude::*;

/// Remaining lifetime of a transient entity. Only ticks while gameplay runs,
/// so a pause does not eat into it.
#[derive(Component, Debug, Clone)]
pub struct Expiry {
    pub lifetime: Timer,
}

impl Expiry {
    pub fn from_seconds(secs: f32) -> Self {
        Self {
            lifetime: Timer::from_seconds(secs.max(0.0), TimerMode::Once),
        }
    }

    pub fn is_due(&self) -> bool {
        self.lifetime.is_finished()
    }

    pub fn remaining_secs(&self) -> f32 {
        self.lifetime.remaining_secs()
    }
}
