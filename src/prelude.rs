pub use bevy::prelude::*;
pub use crate::states::*;

// Re-export components
pub use crate::ammo::components::*;
pub use crate::audio::components::*;
pub use crate::bullets::components::*;
pub use crate::casing::components::*;
pub use crate::game::components::*;
pub use crate::hitscan::components::*;
pub use crate::lifetime::components::*;
pub use crate::muzzle_flash::components::*;
pub use crate::readout::components::*;
pub use crate::tracer::components::*;
pub use crate::weapon::components::*;

// Re-export messages
pub use crate::ammo::events::*;
pub use crate::weapon::events::*;

pub use crate::game::resources::*;
pub use crate::game::sets::GameSet;
