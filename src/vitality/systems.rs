//! Vitality domain: systems driving smoothed presentation values.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::vitality::events::{HealthChangedEvent, PlayerDeathEvent};
use crate::vitality::smoothing::{SmoothingTuning, VisualSmoothing};

/// Restart the light, shadow, and frame transitions toward the new targets.
pub(crate) fn retarget_visual_smoothing(
    tuning: Res<SmoothingTuning>,
    mut health_events: MessageReader<HealthChangedEvent>,
    mut query: Query<&mut VisualSmoothing>,
) {
    for event in health_events.read() {
        let Ok(mut smoothing) = query.get_mut(event.entity) else {
            continue;
        };
        smoothing.retarget(event.targets, &tuning);
    }
}

pub(crate) fn start_death_fade(
    tuning: Res<SmoothingTuning>,
    mut death_events: MessageReader<PlayerDeathEvent>,
    mut query: Query<&mut VisualSmoothing>,
) {
    for event in death_events.read() {
        if let Ok(mut smoothing) = query.get_mut(event.entity) {
            smoothing.start_death_fade(&tuning);
        }
    }
}

pub(crate) fn advance_visual_smoothing(time: Res<Time>, mut query: Query<&mut VisualSmoothing>) {
    let dt = time.delta_secs();
    for mut smoothing in &mut query {
        smoothing.advance(dt);
    }
}
