//! Debug tooling for tuning the player by hand.
//!
//! Hotkeys:
//! - F4 toggles the controller readout
//! - F5 deals 1 damage, F6 heals 1
//! - F7 raises max health by 5
//! - F8 toggles a temporary ambient profile

mod state;
mod systems;
mod ui;

#[cfg(test)]
mod tests;

pub use state::{DebugAction, DebugState};
pub use systems::{apply_vitality_action, toggle_ambient};
pub use ui::controller_readout;

use bevy::prelude::*;

use crate::debug::systems::{handle_debug_hotkeys, update_status_message};
use crate::debug::ui::{spawn_debug_overlay, update_debug_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_debug_overlay)
            .add_systems(
                Update,
                (
                    handle_debug_hotkeys,
                    update_status_message,
                    update_debug_overlay,
                )
                    .chain(),
            );
    }
}
