pub mod components;
pub mod plugin;
pub mod resources;
pub mod sets;
pub mod systems;

pub use components::*;
pub use resources::*;
pub use sets::*;
pub use systems::*;
