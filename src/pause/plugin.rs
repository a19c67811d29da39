use bevy::prelude::*;

use crate::pause::systems::*;
use crate::states::GameState;

pub fn plugin(app: &mut App) {
    app
        // ESC key to enter pause from InGame
        .add_systems(
            Update,
            enter_pause_input.run_if(in_state(GameState::InGame)),
        )
        .add_systems(OnEnter(GameState::Paused), setup_pause_overlay)
        .add_systems(Update, pause_input.run_if(in_state(GameState::Paused)))
        .add_systems(OnExit(GameState::Paused), cleanup_pause_overlay);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pause::components::PauseOverlay;

    fn setup_app() -> App {
        let mut app = App::new();
        app.add_plugins(bevy::state::app::StatesPlugin);
        app.init_state::<GameState>();
        app.init_resource::<ButtonInput<KeyCode>>();
        app.add_plugins(plugin);
        app
    }

    fn press_escape(app: &mut App) {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.clear();
        keys.press(KeyCode::Escape);
    }

    fn release_keys(app: &mut App) {
        let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        keys.release_all();
        keys.clear();
    }

    fn state(app: &App) -> GameState {
        *app.world().resource::<State<GameState>>().get()
    }

    #[test]
    fn test_escape_toggles_pause() {
        let mut app = setup_app();
        app.update();
        assert_eq!(state(&app), GameState::InGame);

        press_escape(&mut app);
        app.update();
        release_keys(&mut app);
        app.update();
        assert_eq!(state(&app), GameState::Paused);

        let mut overlays = app.world_mut().query::<&PauseOverlay>();
        assert_eq!(overlays.iter(app.world()).count(), 1);

        press_escape(&mut app);
        app.update();
        release_keys(&mut app);
        app.update();
        assert_eq!(state(&app), GameState::InGame);

        let mut overlays = app.world_mut().query::<&PauseOverlay>();
        assert_eq!(overlays.iter(app.world()).count(), 0);
    }
}
