//! UI domain: death screen presentation and retry flow.

use bevy::prelude::*;

use crate::core::GameState;
use crate::vitality::{Easing, SmoothingTuning, Transition};

/// Overlay opacity once the fade-in completes
const DEATH_OVERLAY_ALPHA: f32 = 0.85;

/// Marker for the death screen overlay
#[derive(Component)]
pub struct DeathScreenUI;

/// Marker for the retry button on death screen
#[derive(Component)]
pub struct RetryButton;

/// Fades the overlay in alongside the light fade-out
#[derive(Component, Debug)]
pub struct DeathScreenFade(pub Transition);

pub(crate) fn spawn_death_screen(mut commands: Commands, tuning: Res<SmoothingTuning>) {
    let mut fade = Transition::at(0.0);
    fade.retarget(DEATH_OVERLAY_ALPHA, tuning.death_fade_time, Easing::Linear);

    // Full screen dark overlay
    commands
        .spawn((
            DeathScreenUI,
            DeathScreenFade(fade),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.0)),
            // High z-index to be on top of everything
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("THE LIGHT GOES OUT"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.75, 0.45)),
                Node {
                    margin: UiRect::bottom(Val::Px(40.0)),
                    ..default()
                },
            ));

            // Retry button
            parent
                .spawn((
                    RetryButton,
                    Button,
                    Node {
                        padding: UiRect::axes(Val::Px(40.0), Val::Px(16.0)),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                    BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                ))
                .with_child((
                    Text::new("RETRY"),
                    TextFont {
                        font_size: 28.0,
                        ..default()
                    },
                    TextColor(Color::srgb(0.9, 0.9, 0.9)),
                ));

            // Hint text
            parent.spawn((
                Text::new("Press [Enter], [R] or Start to retry"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.4, 0.4, 0.45)),
                Node {
                    margin: UiRect::top(Val::Px(20.0)),
                    ..default()
                },
            ));
        });
}

pub(crate) fn fade_in_death_screen(
    time: Res<Time>,
    mut query: Query<(&mut DeathScreenFade, &mut BackgroundColor), With<DeathScreenUI>>,
) {
    for (mut fade, mut bg_color) in &mut query {
        let alpha = fade.0.advance(time.delta_secs());
        bg_color.0.set_alpha(alpha);
    }
}

pub(crate) fn handle_retry_button(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    button_query: Query<&Interaction, (With<RetryButton>, Changed<Interaction>)>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let should_retry = keyboard.just_pressed(KeyCode::Enter)
        || keyboard.just_pressed(KeyCode::NumpadEnter)
        || keyboard.just_pressed(KeyCode::KeyR)
        || gamepads
            .iter()
            .any(|gamepad| gamepad.just_pressed(GamepadButton::Start))
        || button_query
            .iter()
            .any(|interaction| *interaction == Interaction::Pressed);

    if should_retry {
        info!("Retrying");
        next_state.set(GameState::Playing);
    }
}

pub(crate) fn despawn_death_screen(
    mut commands: Commands,
    death_screen_query: Query<Entity, With<DeathScreenUI>>,
) {
    for entity in &death_screen_query {
        commands.entity(entity).despawn();
    }
}
