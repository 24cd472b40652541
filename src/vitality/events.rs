//! Vitality domain: health notifications for the presentation layer.

use bevy::ecs::message::{Message, MessageWriter};
use bevy::prelude::*;

use crate::vitality::model::{HealthUpdate, VitalityTargets};

/// Emitted on every applied health mutation
#[derive(Debug, Clone)]
pub struct HealthChangedEvent {
    pub entity: Entity,
    pub current: f32,
    pub max: f32,
    pub targets: VitalityTargets,
}

impl Message for HealthChangedEvent {}

/// Emitted once, after the health change that drove health to zero
#[derive(Debug)]
pub struct PlayerDeathEvent {
    pub entity: Entity,
}

impl Message for PlayerDeathEvent {}

/// Writes the notifications for one applied mutation, death last.
pub fn publish_health_update(
    entity: Entity,
    update: &HealthUpdate,
    health_events: &mut MessageWriter<HealthChangedEvent>,
    death_events: &mut MessageWriter<PlayerDeathEvent>,
) {
    health_events.write(HealthChangedEvent {
        entity,
        current: update.current,
        max: update.max,
        targets: update.targets,
    });

    if update.died {
        info!("Player {:?} has died", entity);
        death_events.write(PlayerDeathEvent { entity });
    }
}
