use bevy::ecs::system::SystemParam;
use bevy::prelude::*;

/// One-shot clips the range knows how to play
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundClip {
    Gunshot,
    Reload,
}

impl SoundClip {
    pub fn asset_path(&self) -> &'static str {
        match self {
            SoundClip::Gunshot => "sounds/gunshot.ogg",
            SoundClip::Reload => "sounds/reload.ogg",
        }
    }
}

/// Fire-and-forget request to play a clip once
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct AudioRequest {
    pub clip: SoundClip,
}

/// Loaded handles for every [`SoundClip`]
#[derive(Resource, Clone)]
pub struct SoundBank {
    pub gunshot: Handle<bevy_kira_audio::AudioSource>,
    pub reload: Handle<bevy_kira_audio::AudioSource>,
}

impl SoundBank {
    pub fn handle(&self, clip: SoundClip) -> Handle<bevy_kira_audio::AudioSource> {
        match clip {
            SoundClip::Gunshot => self.gunshot.clone(),
            SoundClip::Reload => self.reload.clone(),
        }
    }
}

/// Handle systems take to request sounds. Every request goes to the same
/// shared sound-effect channel and overlaps whatever is already playing.
#[derive(SystemParam)]
pub struct AudioBroadcaster<'w> {
    requests: MessageWriter<'w, AudioRequest>,
}

impl AudioBroadcaster<'_> {
    pub fn play_once(&mut self, clip: SoundClip) {
        self.requests.write(AudioRequest { clip });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_clip_paths_are_distinct() {
        assert_ne!(SoundClip::Gunshot.asset_path(), SoundClip::Reload.asset_path());
    }

    #[test]
    fn test_play_once_writes_request() {
        let mut app = App::new();
        app.add_message::<AudioRequest>();

        app.world_mut()
            .run_system_once(|mut audio: AudioBroadcaster| {
                audio.play_once(SoundClip::Gunshot);
                audio.play_once(SoundClip::Gunshot);
            })
            .unwrap();

        let messages = app.world().resource::<Messages<AudioRequest>>();
        let mut reader = messages.get_cursor();
        let clips: Vec<SoundClip> = reader.read(messages).map(|r| r.clip).collect();
        assert_eq!(clips, vec![SoundClip::Gunshot, SoundClip::Gunshot]);
    }
}
