//! UI domain: HUD, light and shadow presentation, and the death flow.

mod death;
mod glow;
mod hud_inventory;
mod hud_player;

#[cfg(test)]
mod tests;

pub use death::{DeathScreenFade, DeathScreenUI, RetryButton};
pub use glow::{BLINK_PERIOD, ShadowVeil, blink_visible, glow_alpha, veil_alpha};
pub use hud_inventory::inventory_summary;
pub use hud_player::{fill_color, frame_fill, health_label};

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::death::{
    despawn_death_screen, fade_in_death_screen, handle_retry_button, spawn_death_screen,
};
use crate::ui::glow::{
    blink_while_invincible, spawn_shadow_veil, update_player_glow, update_shadow_veil,
};
use crate::ui::hud_inventory::{spawn_inventory_display_ui, update_inventory_display};
use crate::ui::hud_player::{
    spawn_player_healthbar_ui, update_player_health_label, update_player_healthbar,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Startup,
            (
                spawn_shadow_veil,
                spawn_player_healthbar_ui,
                spawn_inventory_display_ui,
            ),
        )
        .add_systems(
            Update,
            (
                update_player_healthbar,
                update_player_health_label,
                update_inventory_display,
                update_player_glow,
                update_shadow_veil,
                blink_while_invincible,
            ),
        )
        .add_systems(OnEnter(GameState::GameOver), spawn_death_screen)
        .add_systems(OnExit(GameState::GameOver), despawn_death_screen)
        .add_systems(
            Update,
            (fade_in_death_screen, handle_retry_button).run_if(in_state(GameState::GameOver)),
        );
    }
}
