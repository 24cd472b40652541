//! Collectibles domain: pickup events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug, Clone)]
pub struct ItemCollectedEvent {
    pub collector: Entity,
    pub item_id: String,
    pub name: String,
    /// Inventory count after the pickup
    pub total: u32,
}

impl Message for ItemCollectedEvent {}
