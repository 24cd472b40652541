//! UI domain: player HUD health bar driven by the smoothed bar frame.

use bevy::prelude::*;

use crate::movement::Player;
use crate::vitality::{VisualSmoothing, VitalityModel};

pub(crate) const PLAYER_HEALTHBAR_WIDTH: f32 = 200.0;
pub(crate) const PLAYER_HEALTHBAR_HEIGHT: f32 = 20.0;
pub(crate) const PLAYER_HEALTHBAR_PADDING: f32 = 16.0;

/// Marker for the player's HUD health bar container
#[derive(Component)]
pub struct PlayerHealthBarUI;

/// Marker for the player's health bar fill element
#[derive(Component)]
pub struct PlayerHealthBarFill;

/// Marker for the `current / max` readout
#[derive(Component)]
pub struct PlayerHealthLabel;

/// Fill fraction for a bar sprite frame. Frame 0 is empty.
pub fn frame_fill(frame: usize, last_frame: usize) -> f32 {
    if last_frame == 0 {
        return 1.0;
    }
    (frame as f32 / last_frame as f32).clamp(0.0, 1.0)
}

pub fn health_label(current: f32, max: f32) -> String {
    format!("{} / {}", current, max)
}

/// Green at full, yellow at half, red when nearly empty
pub fn fill_color(fill: f32) -> Color {
    if fill > 0.5 {
        let t = (fill - 0.5) * 2.0;
        Color::srgb(1.0 - t * 0.8, 0.8, 0.3 * (1.0 - t))
    } else {
        let t = fill * 2.0;
        Color::srgb(0.9, 0.2 + t * 0.6, 0.2)
    }
}

pub(crate) fn spawn_player_healthbar_ui(mut commands: Commands) {
    // Root container positioned at top-left
    commands
        .spawn((
            PlayerHealthBarUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(PLAYER_HEALTHBAR_PADDING),
                top: Val::Px(PLAYER_HEALTHBAR_PADDING),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(10.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Px(PLAYER_HEALTHBAR_WIDTH),
                        height: Val::Px(PLAYER_HEALTHBAR_HEIGHT),
                        border: UiRect::all(Val::Px(2.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
                    BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
                ))
                .with_child((
                    PlayerHealthBarFill,
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Percent(100.0),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.2, 0.8, 0.3)),
                ));

            parent.spawn((
                PlayerHealthLabel,
                Text::new(""),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.8)),
            ));
        });
}

pub(crate) fn update_player_healthbar(
    player_query: Query<&VisualSmoothing, With<Player>>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<PlayerHealthBarFill>>,
) {
    let Ok(smoothing) = player_query.single() else {
        return;
    };

    let fill = frame_fill(smoothing.frame.frame(), smoothing.frame.last_frame());
    for (mut node, mut bg_color) in &mut fill_query {
        node.width = Val::Percent(fill * 100.0);
        bg_color.0 = fill_color(fill);
    }
}

pub(crate) fn update_player_health_label(
    player_query: Query<&VitalityModel, (With<Player>, Changed<VitalityModel>)>,
    mut label_query: Query<&mut Text, With<PlayerHealthLabel>>,
) {
    let Ok(vitality) = player_query.single() else {
        return;
    };

    for mut text in &mut label_query {
        **text = health_label(vitality.current(), vitality.max());
    }
}
