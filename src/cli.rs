use clap::Parser;

use crate::game::resources::DemoSettings;
use crate::weapon::components::WeaponConfig;

/// Accepts finite values of zero or more.
fn non_negative(value: &str) -> Result<f32, String> {
    let parsed: f32 = value.parse().map_err(|_| format!("`{value}` is not a number"))?;
    if parsed.is_finite() && parsed >= 0.0 {
        Ok(parsed)
    } else {
        Err(format!("`{value}` must be a finite number of zero or more"))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Handgun firing range", long_about = None)]
pub struct DemoArgs {
    /// Magazine size
    #[arg(long)]
    pub max_ammo: Option<u32>,

    /// Hitscan reach in world units
    #[arg(long, value_parser = non_negative)]
    pub range: Option<f32>,

    /// Seconds a tracer stays visible
    #[arg(long, value_parser = non_negative)]
    pub line_duration: Option<f32>,

    /// Casing ejection impulse
    #[arg(long, value_parser = non_negative)]
    pub eject_power: Option<f32>,

    /// Physical bullet speed
    #[arg(long, value_parser = non_negative)]
    pub shot_speed: Option<f32>,

    /// Disable the muzzle flash effect
    #[arg(long)]
    pub no_muzzle_flash: bool,

    /// Number of target blocks downrange
    #[arg(long, default_value_t = 3)]
    pub targets: u32,
}

impl DemoArgs {
    /// Applies the flags on top of the default weapon tuning.
    pub fn into_settings(self) -> DemoSettings {
        let mut weapon = WeaponConfig::default();
        if let Some(max_ammo) = self.max_ammo {
            weapon.max_ammo = max_ammo;
        }
        if let Some(range) = self.range {
            weapon.range = range;
        }
        if let Some(duration) = self.line_duration {
            weapon.tracer.duration = duration;
        }
        if let Some(eject_power) = self.eject_power {
            weapon.eject_power = eject_power;
        }
        if let Some(shot_speed) = self.shot_speed {
            weapon.shot_speed = shot_speed;
        }
        weapon.muzzle_flash = !self.no_muzzle_flash;

        DemoSettings {
            weapon,
            targets: self.targets,
        }
    }
}
