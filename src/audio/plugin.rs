use bevy::prelude::*;
use crate::audio::components::AudioRequest;
use crate::audio::systems::*;
use crate::game::sets::GameSet;

/// The single shared channel every one-shot sound effect plays through.
/// Registered once by the binary alongside the kira audio plugin.
#[derive(Resource)]
pub struct SfxChannel;

pub fn plugin(app: &mut App) {
    app.add_message::<AudioRequest>()
        .add_systems(Startup, load_sound_bank)
        // Runs whether or not gameplay is paused so queued shots still sound
        .add_systems(Update, broadcast_audio_requests.after(GameSet::Cleanup));
}
