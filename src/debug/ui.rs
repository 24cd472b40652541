//! Debug domain: status line and controller readout.

use bevy::prelude::*;

use crate::ambient::AmbientProfiles;
use crate::debug::state::DebugState;
use crate::movement::{MotionController, Player};
use crate::vitality::VitalityModel;

/// Marker for debug info overlay (grounded, timers, health)
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

/// Marker for status message text
#[derive(Component, Debug)]
pub struct DebugStatusMessage;

pub fn controller_readout(
    controller: &MotionController,
    vitality: &VitalityModel,
    profiles: &AmbientProfiles,
) -> String {
    let mut lines = vec![
        format!("grounded: {:?}", controller.grounded),
        format!("velocity: {:.0}, {:.0}", controller.velocity.x, controller.velocity.y),
        format!("coyote: {:.2}", controller.coyote_timer),
        format!("cooldown: {:.2}", controller.attack_cooldown_timer),
        format!("health: {}/{}", vitality.current(), vitality.max()),
        format!("ambient: {}", profiles.active()),
    ];
    if controller.is_frozen() {
        lines.push(format!("frozen: {:.2}", controller.freeze.remaining));
    }
    if controller.is_invincible() {
        lines.push(format!("invincible: {:.2}", controller.invincibility.remaining));
    }
    if let Some(remaining) = profiles.remaining() {
        lines.push(format!("ambient reverts in {:.1}", remaining));
    }
    lines.join("\n")
}

pub(crate) fn spawn_debug_overlay(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            right: Val::Px(12.0),
            top: Val::Px(12.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            row_gap: Val::Px(6.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                DebugStatusMessage,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.5)),
            ));
            parent.spawn((
                DebugInfoOverlay,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.7, 0.85, 0.9)),
            ));
        });
}

pub(crate) fn update_debug_overlay(
    debug_state: Res<DebugState>,
    profiles: Res<AmbientProfiles>,
    player_query: Query<(&MotionController, &VitalityModel), With<Player>>,
    mut status_query: Query<&mut Text, (With<DebugStatusMessage>, Without<DebugInfoOverlay>)>,
    mut info_query: Query<&mut Text, (With<DebugInfoOverlay>, Without<DebugStatusMessage>)>,
) {
    let status = debug_state
        .status_message
        .as_ref()
        .map(|(msg, _)| msg.clone())
        .unwrap_or_default();
    for mut text in &mut status_query {
        **text = status.clone();
    }

    let info = match player_query.single() {
        Ok((controller, vitality)) if debug_state.show_info => {
            controller_readout(controller, vitality, &profiles)
        }
        _ => String::new(),
    };
    for mut text in &mut info_query {
        **text = info.clone();
    }
}
