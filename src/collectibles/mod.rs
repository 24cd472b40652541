//! Collectibles domain: pickups, the inventory, and what collecting does.

mod components;
mod events;
mod inventory;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AmbientRequest, Collectible, PickupRange};
pub use events::ItemCollectedEvent;
pub use inventory::Inventory;
pub use systems::{Collection, collect_item};

use bevy::prelude::*;

use crate::collectibles::systems::{collect_pickups, track_pickup_range};
use crate::core::GameState;
use crate::movement::MotionTickSet;
use crate::vitality::VitalityFeedbackSet;

pub struct CollectiblesPlugin;

impl Plugin for CollectiblesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Inventory>()
            .add_message::<ItemCollectedEvent>()
            .add_systems(
                FixedUpdate,
                (track_pickup_range, collect_pickups)
                    .chain()
                    .after(MotionTickSet)
                    .before(VitalityFeedbackSet)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
