//! Combat domain: attack and contact-damage events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone)]
pub struct AttackFiredEvent {
    pub entity: Entity,
    pub origin: Vec2,
    /// Unit length
    pub direction: Vec2,
}

impl Message for AttackFiredEvent {}

/// Emitted when a damage source lands a hit and opens the invincibility window
#[derive(Debug, Clone)]
pub struct ContactDamageEvent {
    pub entity: Entity,
    pub source: Entity,
    pub amount: f32,
    pub label: String,
    pub invincibility: f32,
}

impl Message for ContactDamageEvent {}
