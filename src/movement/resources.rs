//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    /// World gravity magnitude, pixels per second squared
    pub gravity: f32,
    pub coyote_time: f32,
    /// Extra gravity while falling
    pub fall_multiplier: f32,
    /// Extra gravity while rising with jump released
    pub low_jump_multiplier: f32,
    /// Axis magnitude below which facing does not change
    pub facing_dead_zone: f32,
    /// Aim stick magnitude below which arrow keys or facing decide attack direction
    pub aim_dead_zone: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            jump_force: 620.0,
            gravity: 1400.0,
            coyote_time: 0.15,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            facing_dead_zone: 0.2,
            aim_dead_zone: 0.2,
        }
    }
}

impl MovementTuning {
    /// Apex height of a full-held jump: h = v² / (2g)
    pub fn full_jump_height(&self) -> f32 {
        self.jump_force * self.jump_force / (2.0 * self.gravity)
    }
}

/// Logical actions for the player. Edge flags latch until a motion tick
/// consumes them so presses between fixed steps are not lost.
#[derive(Resource, Debug, Clone, Default)]
pub struct ActionInput {
    /// Pre-clamped to [-1, 1]
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub attack_pressed: bool,
    pub collect_pressed: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Secondary analog stick, when a gamepad is connected
    pub aim: Option<Vec2>,
}

impl ActionInput {
    /// Clear the edges read by the motion tick. Collect is cleared by the
    /// pickup systems.
    pub fn consume_motion_edges(&mut self) {
        self.jump_pressed = false;
        self.attack_pressed = false;
    }
}
