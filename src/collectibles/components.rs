//! Collectibles domain: pickup components.

use bevy::prelude::*;

/// Ambient profile a pickup switches to for a while
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientRequest {
    pub profile: String,
    pub duration: f32,
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Collectible {
    /// Inventory key
    pub item_id: String,
    pub name: String,
    /// False collects on touch
    pub require_key_press: bool,
    pub heal_amount: f32,
    pub ambient_profile: Option<AmbientRequest>,
}

impl Collectible {
    pub fn new(item_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            name: name.into(),
            require_key_press: true,
            heal_amount: 0.0,
            ambient_profile: None,
        }
    }

    pub fn on_touch(mut self) -> Self {
        self.require_key_press = false;
        self
    }

    pub fn healing(mut self, amount: f32) -> Self {
        self.heal_amount = amount;
        self
    }

    pub fn with_ambient(mut self, profile: impl Into<String>, duration: f32) -> Self {
        self.ambient_profile = Some(AmbientRequest {
            profile: profile.into(),
            duration,
        });
        self
    }

    /// Whether this pickup should be taken now
    pub fn ready(&self, player_in_range: bool, collect_pressed: bool) -> bool {
        player_in_range && (!self.require_key_press || collect_pressed)
    }
}

/// Whether the player's collider currently overlaps the pickup sensor
#[derive(Component, Debug, Default)]
pub struct PickupRange {
    pub player_in_range: bool,
}
