//! Vitality domain: player health, death, and smoothed visual feedback.

mod events;
mod model;
mod smoothing;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{HealthChangedEvent, PlayerDeathEvent, publish_health_update};
pub use model::{HealthUpdate, VitalityModel, VitalityTargets, VitalityTuning, round_tenth};
pub use smoothing::{
    Easing, FrameTransition, SmoothingTuning, Transition, VisualSmoothing, smoothstep,
};

use bevy::prelude::*;

use crate::vitality::systems::{
    advance_visual_smoothing, retarget_visual_smoothing, start_death_fade,
};

/// Systems that must see this tick's health notifications
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct VitalityFeedbackSet;

pub struct VitalityPlugin;

impl Plugin for VitalityPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<VitalityTuning>()
            .init_resource::<SmoothingTuning>()
            .add_message::<HealthChangedEvent>()
            .add_message::<PlayerDeathEvent>()
            .add_systems(
                FixedUpdate,
                (
                    retarget_visual_smoothing,
                    start_death_fade,
                    advance_visual_smoothing,
                )
                    .chain()
                    .in_set(VitalityFeedbackSet),
            );
    }
}
