pub mod components;
pub mod events;

pub use components::*;
pub use events::*;
