use bevy_hanabi::HanabiPlugin;
use bevy_kira_audio::{AudioApp, AudioPlugin as KiraAudioPlugin};
use clap::Parser;
use tracer_range::audio::plugin::SfxChannel;
use tracer_range::cli::DemoArgs;
use tracer_range::game_plugin;
use tracer_range::prelude::*;

fn main() {
    let settings = DemoArgs::parse().into_settings();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Tracer Range".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins((KiraAudioPlugin, HanabiPlugin))
        .add_audio_channel::<SfxChannel>()
        .init_state::<GameState>()
        .insert_resource(settings)
        .add_plugins(game_plugin)
        .run();
}
