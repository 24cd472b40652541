//! Core domain: camera, game over, and world reset.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::ambient::{AmbientProfiles, DEFAULT_PROFILE_ALIAS};
use crate::collectibles::Inventory;
use crate::combat::Projectile;
use crate::core::sandbox::SandboxEntity;
use crate::core::state::GameState;
use crate::movement::{ActionInput, Player};
use crate::vitality::PlayerDeathEvent;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn enter_game_over(
    mut events: MessageReader<PlayerDeathEvent>,
    mut game_state: ResMut<NextState<GameState>>,
) {
    if events.read().last().is_some() {
        info!("Player died, game over");
        game_state.set(GameState::GameOver);
    }
}

/// Clear the finished attempt so `OnEnter(Playing)` can spawn a fresh one.
pub(crate) fn reset_world(
    mut commands: Commands,
    doomed: Query<Entity, Or<(With<SandboxEntity>, With<Player>, With<Projectile>)>>,
    mut inventory: ResMut<Inventory>,
    mut profiles: ResMut<AmbientProfiles>,
    mut input: ResMut<ActionInput>,
) {
    for entity in &doomed {
        commands.entity(entity).despawn();
    }
    *inventory = Inventory::default();
    *input = ActionInput::default();
    if let Err(e) = profiles.set_profile(DEFAULT_PROFILE_ALIAS) {
        warn!("Could not restore ambient profile: {}", e);
    }
}
