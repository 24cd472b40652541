//! Core domain: game state, camera, sandbox level, and the death/retry flow.

mod sandbox;
mod state;
mod systems;

pub use sandbox::SandboxEntity;
pub use state::GameState;

use bevy::prelude::*;

use crate::content::SandboxDef;
use crate::core::sandbox::spawn_sandbox;
use crate::core::systems::{enter_game_over, reset_world, setup_camera};
use crate::vitality::VitalityFeedbackSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<SandboxDef>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::Playing), spawn_sandbox)
            .add_systems(OnExit(GameState::GameOver), reset_world)
            .add_systems(
                FixedUpdate,
                enter_game_over
                    .after(VitalityFeedbackSet)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
