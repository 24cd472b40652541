//! Movement domain: player locomotion, jumping, attack freeze, and contact intake.

mod bootstrap;
mod components;
mod controller;
mod resources;
mod systems;


pub use bootstrap::PlayerGlow;
pub use components::{
    ContactClass, ContactPhase, ContactQueue, ContactSignal, Facing, GameLayer, Ground,
    GroundCheck, GroundedState, Player,
};
pub use controller::{
    AttackFired, ContactHit, Freeze, Invincibility, MotionController, TickReport,
    resolve_attack_direction,
};
pub use resources::{ActionInput, MovementTuning};

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::{apply_world_gravity, spawn_player};
use crate::movement::systems::{
    gather_contact_signals, check_ground, read_input, run_motion_tick, sync_facing,
};
use crate::vitality::VitalityFeedbackSet;

/// The fixed-step motion tick and its contact intake
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct MotionTickSet;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<ActionInput>()
            .add_systems(Startup, apply_world_gravity)
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(Update, (read_input, sync_facing))
            .add_systems(
                FixedUpdate,
                (check_ground, gather_contact_signals, run_motion_tick)
                    .chain()
                    .in_set(MotionTickSet)
                    .before(VitalityFeedbackSet)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
