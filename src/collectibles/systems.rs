//! Collectibles domain: proximity tracking and pickup resolution.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::ambient::{AmbientError, AmbientProfiles, TemporaryOutcome};
use crate::collectibles::components::{Collectible, PickupRange};
use crate::collectibles::events::ItemCollectedEvent;
use crate::collectibles::inventory::Inventory;
use crate::movement::{ActionInput, Player};
use crate::vitality::{
    HealthChangedEvent, HealthUpdate, PlayerDeathEvent, VitalityModel, publish_health_update,
};

/// What taking a pickup changed
#[derive(Debug)]
pub struct Collection {
    pub total: u32,
    pub health_update: Option<HealthUpdate>,
    pub ambient: Option<Result<TemporaryOutcome, AmbientError>>,
}

/// Apply a pickup to the inventory, the collector's health, and the ambient
/// profile. The pickup entity itself is left to the caller.
pub fn collect_item(
    collectible: &Collectible,
    inventory: &mut Inventory,
    vitality: &mut VitalityModel,
    profiles: &mut AmbientProfiles,
) -> Collection {
    let total = inventory.add(&collectible.item_id, 1);

    let health_update = if collectible.heal_amount > 0.0 {
        vitality.heal(collectible.heal_amount)
    } else {
        None
    };

    let ambient = collectible
        .ambient_profile
        .as_ref()
        .map(|request| profiles.set_temporary(&request.profile, request.duration));

    Collection {
        total,
        health_update,
        ambient,
    }
}

pub(crate) fn track_pickup_range(
    mut starts: MessageReader<CollisionStart>,
    mut ends: MessageReader<CollisionEnd>,
    players: Query<(), With<Player>>,
    mut pickups: Query<&mut PickupRange, With<Collectible>>,
) {
    let mut set_range = |a: Entity, b: Entity, in_range: bool| {
        for (pickup, other) in [(a, b), (b, a)] {
            if !players.contains(other) {
                continue;
            }
            if let Ok(mut range) = pickups.get_mut(pickup) {
                range.player_in_range = in_range;
            }
        }
    };

    for event in starts.read() {
        set_range(event.collider1, event.collider2, true);
    }
    for event in ends.read() {
        set_range(event.collider1, event.collider2, false);
    }
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn collect_pickups(
    mut commands: Commands,
    mut input: ResMut<ActionInput>,
    mut inventory: ResMut<Inventory>,
    mut profiles: ResMut<AmbientProfiles>,
    mut players: Query<(Entity, &mut VitalityModel), With<Player>>,
    pickups: Query<(Entity, &Collectible, &PickupRange)>,
    mut collected_events: MessageWriter<ItemCollectedEvent>,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut death_events: MessageWriter<PlayerDeathEvent>,
) {
    let collect_pressed = input.collect_pressed;
    input.collect_pressed = false;

    let Ok((player, mut vitality)) = players.single_mut() else {
        return;
    };

    for (entity, collectible, range) in &pickups {
        if !collectible.ready(range.player_in_range, collect_pressed) {
            continue;
        }

        let collection = collect_item(collectible, &mut inventory, &mut vitality, &mut profiles);

        if let Some(update) = &collection.health_update {
            publish_health_update(player, update, &mut health_events, &mut death_events);
        }
        if let Some(Err(err)) = &collection.ambient {
            warn!("Pickup '{}' ambient request failed: {}", collectible.name, err);
        }

        info!(
            "Collected: {} (ID: {}), now holding {}",
            collectible.name, collectible.item_id, collection.total
        );
        collected_events.write(ItemCollectedEvent {
            collector: player,
            item_id: collectible.item_id.clone(),
            name: collectible.name.clone(),
            total: collection.total,
        });
        commands.entity(entity).despawn();
    }
}
