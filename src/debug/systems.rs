//! Debug domain: hotkeys for poking at health and the ambient profile.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::ambient::{AmbientProfiles, AmbientTuning, DEFAULT_PROFILE_ALIAS};
use crate::debug::state::{DebugAction, DebugState};
use crate::movement::Player;
use crate::vitality::{
    HealthChangedEvent, HealthUpdate, PlayerDeathEvent, VitalityModel, publish_health_update,
};

pub const DEBUG_DAMAGE: f32 = 1.0;
pub const DEBUG_HEAL: f32 = 1.0;
pub const DEBUG_MAX_HEALTH_STEP: f32 = 5.0;
pub const DEBUG_AMBIENT_DURATION: f32 = 10.0;

const MESSAGE_DURATION: f32 = 2.0;

/// Health changes behind the vitality hotkeys. Other actions do nothing here.
pub fn apply_vitality_action(
    action: DebugAction,
    vitality: &mut VitalityModel,
) -> Option<HealthUpdate> {
    match action {
        DebugAction::Damage => vitality.take_damage(DEBUG_DAMAGE),
        DebugAction::Heal => vitality.heal(DEBUG_HEAL),
        DebugAction::RaiseMaxHealth => {
            let new_max = vitality.max() + DEBUG_MAX_HEALTH_STEP;
            vitality.set_max_health(new_max)
        }
        DebugAction::ToggleAmbient | DebugAction::ToggleInfo => None,
    }
}

/// Restore the default if a temporary profile is running, otherwise start the
/// first non-default profile for a while. Returns a status line.
pub fn toggle_ambient(profiles: &mut AmbientProfiles, tuning: &AmbientTuning) -> String {
    if profiles.is_temporary() {
        return match profiles.set_profile(DEFAULT_PROFILE_ALIAS) {
            Ok(()) => format!("Ambient restored to '{}'", profiles.active()),
            Err(e) => e.to_string(),
        };
    }

    let Some(alternate) = tuning
        .profiles
        .iter()
        .find(|profile| profile.name != tuning.default_profile)
    else {
        return "No alternate ambient profile".to_string();
    };

    match profiles.set_temporary(&alternate.name, DEBUG_AMBIENT_DURATION) {
        Ok(_) => format!(
            "Ambient '{}' for {}s",
            alternate.name, DEBUG_AMBIENT_DURATION
        ),
        Err(e) => e.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    ambient_tuning: Res<AmbientTuning>,
    mut profiles: ResMut<AmbientProfiles>,
    mut player_query: Query<(Entity, &mut VitalityModel), With<Player>>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut death_events: MessageWriter<PlayerDeathEvent>,
) {
    for action in DebugAction::from_hotkeys(&keyboard) {
        match action {
            DebugAction::ToggleInfo => {
                debug_state.show_info = !debug_state.show_info;
            }
            DebugAction::ToggleAmbient => {
                let msg = toggle_ambient(&mut profiles, &ambient_tuning);
                info!("[DEBUG] {}", msg);
                debug_state.set_message(msg, MESSAGE_DURATION);
            }
            DebugAction::Damage | DebugAction::Heal | DebugAction::RaiseMaxHealth => {
                let Ok((entity, mut vitality)) = player_query.single_mut() else {
                    continue;
                };
                let msg = match apply_vitality_action(action, &mut vitality) {
                    Some(update) => {
                        publish_health_update(
                            entity,
                            &update,
                            &mut health_events,
                            &mut death_events,
                        );
                        format!("{:?}: health {}/{}", action, update.current, update.max)
                    }
                    None => format!("{:?}: no effect", action),
                };
                info!("[DEBUG] {}", msg);
                debug_state.set_message(msg, MESSAGE_DURATION);
            }
        }
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}
