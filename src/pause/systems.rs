use bevy::prelude::*;

use crate::pause::components::PauseOverlay;
use crate::states::GameState;

/// Dims the range and shows a banner while paused.
pub fn setup_pause_overlay(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
            PauseOverlay,
        ))
        .with_child((
            Text::new("PAUSED"),
            TextFont {
                font_size: 60.0,
                ..default()
            },
            TextColor(Color::WHITE),
        ));
}

/// Handles ESC key to pause the game from InGame state
pub fn enter_pause_input(
    keyboard_input: Option<Res<ButtonInput<KeyCode>>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard_input.is_some_and(|keys| keys.just_pressed(KeyCode::Escape)) {
        next_state.set(GameState::Paused);
    }
}

/// Handles ESC key to resume game from pause
pub fn pause_input(
    keyboard_input: Option<Res<ButtonInput<KeyCode>>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if keyboard_input.is_some_and(|keys| keys.just_pressed(KeyCode::Escape)) {
        next_state.set(GameState::InGame);
    }
}

pub fn cleanup_pause_overlay(mut commands: Commands, query: Query<Entity, With<PauseOverlay>>) {
    for entity in query.iter() {
        commands.entity(entity).try_despawn();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_setup_pause_overlay_spawns_banner() {
        let mut app = App::new();
        app.world_mut().run_system_once(setup_pause_overlay).unwrap();

        let mut overlays = app.world_mut().query::<&PauseOverlay>();
        assert_eq!(overlays.iter(app.world()).count(), 1);
    }

    #[test]
    fn test_cleanup_pause_overlay_removes_banner() {
        let mut app = App::new();
        app.world_mut().run_system_once(setup_pause_overlay).unwrap();
        app.world_mut().run_system_once(cleanup_pause_overlay).unwrap();

        let mut overlays = app.world_mut().query::<&PauseOverlay>();
        assert_eq!(overlays.iter(app.world()).count(), 0);
    }
}
