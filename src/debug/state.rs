//! Debug domain: state and action definitions for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether to show the controller readout (grounded, timers, health)
    pub show_info: bool,
    /// Message to display temporarily
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    pub fn tick_message(&mut self, dt: f32) {
        if let Some((_, ref mut duration)) = self.status_message {
            *duration -= dt;
            if *duration <= 0.0 {
                self.status_message = None;
            }
        }
    }
}

/// Actions bound to debug hotkeys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugAction {
    /// F5
    Damage,
    /// F6
    Heal,
    /// F7
    RaiseMaxHealth,
    /// F8
    ToggleAmbient,
    /// F4
    ToggleInfo,
}

impl DebugAction {
    pub fn from_hotkeys(keyboard: &ButtonInput<KeyCode>) -> Vec<DebugAction> {
        [
            (KeyCode::F4, DebugAction::ToggleInfo),
            (KeyCode::F5, DebugAction::Damage),
            (KeyCode::F6, DebugAction::Heal),
            (KeyCode::F7, DebugAction::RaiseMaxHealth),
            (KeyCode::F8, DebugAction::ToggleAmbient),
        ]
        .into_iter()
        .filter(|(key, _)| keyboard.just_pressed(*key))
        .map(|(_, action)| action)
        .collect()
    }
}
