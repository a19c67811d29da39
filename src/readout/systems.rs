use bevy::prelude::*;

use crate::ammo::components::AmmoState;
use crate::readout::components::*;

fn show(text: &mut Text, color: &mut TextColor, value: &str, tint: Color) {
    if text.0 != value {
        text.0 = value.to_string();
    }
    color.0 = tint;
}

/// Keeps every ammo readout in step with its weapon.
///
/// While a flash cue runs the count is not refreshed. When the cue ends the
/// readout shows the live count again, and an empty magazine starts a new
/// cue straight away.
pub fn update_ammo_readouts(
    time: Res<Time>,
    weapons: Query<&AmmoState>,
    mut readouts: Query<(&mut AmmoReadout, &mut Text, &mut TextColor)>,
) {
    let dt = time.delta_secs();

    for (mut readout, mut text, mut color) in readouts.iter_mut() {
        if let Some(cue) = readout.flash.as_mut() {
            cue.elapsed += dt;
            match cue.phase() {
                Some(FlashPhase::Alert) => {
                    show(&mut text, &mut color, FLASH_TEXT, READOUT_RED);
                    continue;
                }
                Some(FlashPhase::Original) => {
                    show(&mut text, &mut color, &cue.original_text, cue.original_color);
                    continue;
                }
                None => readout.flash = None,
            }
        }

        let Ok(ammo) = weapons.get(readout.weapon) else {
            warn_once!("Ammo readout bound to missing weapon {:?}", readout.weapon);
            continue;
        };

        let count = ammo.current().to_string();
        let tint = readout_color(ammo);
        show(&mut text, &mut color, &count, tint);

        if ammo.is_empty() {
            readout.flash = Some(FlashCue::new(count, tint));
            show(&mut text, &mut color, FLASH_TEXT, READOUT_RED);
        }
    }
}
