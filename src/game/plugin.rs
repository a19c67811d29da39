use bevy::prelude::*;
use crate::game::resources::*;
use crate::game::sets::GameSet;
use crate::game::systems::*;
use crate::lifetime::systems::reap_expired;
use crate::states::*;

pub fn plugin(app: &mut App) {
    app.init_resource::<DemoSettings>()
        // Gameplay runs in a fixed order and only while not paused
        .configure_sets(
            Update,
            (GameSet::Input, GameSet::Combat, GameSet::Effects, GameSet::Cleanup)
                .chain()
                .run_if(in_state(GameState::InGame)),
        )
        .add_systems(Startup, (setup_effect_assets, setup_range))
        .add_systems(Update, reap_expired.in_set(GameSet::Cleanup))
        .add_plugins((
            crate::audio::plugin::plugin,
            crate::weapon::plugin::plugin,
            crate::tracer::plugin::plugin,
            crate::bullets::plugin::plugin,
            crate::casing::plugin::plugin,
            crate::readout::plugin::plugin,
            crate::pause::plugin::plugin,
        ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ammo::components::AmmoState;
    use crate::tracer::components::TracerLine;
    use crate::weapon::components::{TriggerInput, Weapon};
    use bevy::ecs::system::RunSystemOnce;
    use std::time::Duration;

    fn setup_app(settings: DemoSettings) -> App {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_resource::<Time>();
        app.init_state::<GameState>();
        app.insert_resource(settings);
        app.add_plugins(plugin);
        app
    }

    fn step(app: &mut App, secs: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(secs));
        app.update();
    }

    fn pull_trigger(app: &mut App) {
        // Input set would overwrite the flag, so drive the control step directly
        app.world_mut().resource_mut::<TriggerInput>().fire_pressed = true;
        app.world_mut()
            .run_system_once(crate::weapon::systems::weapon_control_system)
            .unwrap();
        app.world_mut().resource_mut::<TriggerInput>().fire_pressed = false;
    }

    #[test]
    fn test_game_plugin_builds_range() {
        let mut app = setup_app(DemoSettings::default());
        app.update();

        let mut weapons = app.world_mut().query::<(&Weapon, &AmmoState)>();
        let (_, ammo) = weapons.single(app.world()).unwrap();
        assert!(ammo.is_full());
    }

    #[test]
    fn test_cli_settings_reach_the_weapon() {
        let mut settings = DemoSettings::default();
        settings.weapon.max_ammo = 4;
        let mut app = setup_app(settings);
        app.update();

        let mut weapons = app.world_mut().query::<&AmmoState>();
        assert_eq!(weapons.single(app.world()).unwrap().max(), 4);
    }

    #[test]
    fn test_tracer_expires_after_line_duration() {
        let mut app = setup_app(DemoSettings::default());
        app.update();

        pull_trigger(&mut app);
        app.update();
        let mut lines = app.world_mut().query::<&TracerLine>();
        assert_eq!(lines.iter(app.world()).count(), 1);

        step(&mut app, 0.3);
        step(&mut app, 0.3);
        let mut lines = app.world_mut().query::<&TracerLine>();
        assert_eq!(lines.iter(app.world()).count(), 0);
    }

    #[test]
    fn test_tracer_survives_a_long_pause() {
        let mut app = setup_app(DemoSettings::default());
        app.update();

        pull_trigger(&mut app);
        app.update();
        step(&mut app, 0.1);

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Paused);
        step(&mut app, 5.0);
        step(&mut app, 5.0);

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::InGame);
        step(&mut app, 0.1);

        let mut lines = app.world_mut().query::<&TracerLine>();
        assert_eq!(lines.iter(app.world()).count(), 1, "pause must not use up the tracer's lifetime");

        step(&mut app, 0.4);
        let mut lines = app.world_mut().query::<&TracerLine>();
        assert_eq!(lines.iter(app.world()).count(), 0);
    }
}
