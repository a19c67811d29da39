pub mod ammo;
pub mod audio;
pub mod bullets;
pub mod casing;
pub mod cli;
pub mod game;
pub mod hitscan;
pub mod lifetime;
pub mod muzzle_flash;
pub mod pause;
pub mod readout;
pub mod states;
pub mod tracer;
pub mod weapon;
pub mod prelude;

pub use game::plugin::plugin as game_plugin;
