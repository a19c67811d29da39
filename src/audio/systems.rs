use bevy::prelude::*;
use bevy_kira_audio::prelude::*;
use crate::audio::components::*;
use crate::audio::plugin::SfxChannel;

/// Loads every clip into the [`SoundBank`]. Skipped without an asset server.
pub fn load_sound_bank(mut commands: Commands, asset_server: Option<Res<AssetServer>>) {
    let Some(asset_server) = asset_server else {
        return;
    };

    commands.insert_resource(SoundBank {
        gunshot: asset_server.load(SoundClip::Gunshot.asset_path()),
        reload: asset_server.load(SoundClip::Reload.asset_path()),
    });
}

/// Plays each pending request once on the shared effects channel.
/// Without an audio channel or sound bank, requests are dropped.
pub fn broadcast_audio_requests(
    mut requests: MessageReader<AudioRequest>,
    channel: Option<Res<AudioChannel<SfxChannel>>>,
    sound_bank: Option<Res<SoundBank>>,
) {
    for request in requests.read() {
        match (channel.as_ref(), sound_bank.as_ref()) {
            (Some(channel), Some(sound_bank)) => {
                channel.play(sound_bank.handle(request.clip));
            }
            _ => debug!("No audio output, dropping {:?}", request.clip),
        }
    }
}
