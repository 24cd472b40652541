//! Movement domain: turning collision messages into the player's contact queue.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::collectibles::Collectible;
use crate::combat::DamageSource;
use crate::movement::bootstrap::PLAYER_SIZE;
use crate::movement::{
    ContactClass, ContactPhase, ContactQueue, ContactSignal, GameLayer, GroundCheck, Player,
};

/// How far below the feet a ground surface still counts as underfoot
pub(crate) const GROUND_CHECK_DISTANCE: f32 = 4.0;

type ClassifyQuery<'w, 's> =
    Query<'w, 's, (Has<Collectible>, Option<&'static DamageSource>)>;

// Ground is not classified here: body contacts with a platform's side or
// underside must not count as landing. `check_ground` owns ground signals.
fn classify(entity: Entity, others: &ClassifyQuery) -> Option<ContactClass> {
    let Ok((is_collectible, hazard)) = others.get(entity) else {
        return None;
    };

    if let Some(hazard) = hazard {
        Some(ContactClass::DamageSource(hazard.clone()))
    } else if is_collectible {
        Some(ContactClass::CollectibleProximity)
    } else {
        None
    }
}

/// Cast a short ray down from the player's feet and queue ground begin/end
/// signals when the surface underfoot changes.
pub(crate) fn check_ground(
    spatial_query: SpatialQuery,
    mut players: Query<(&Transform, &mut GroundCheck, &mut ContactQueue), With<Player>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut check, mut queue) in &mut players {
        let feet = transform.translation.truncate() - Vec2::new(0.0, PLAYER_SIZE.y * 0.5);
        let hit = spatial_query.cast_ray(
            feet,
            Dir2::NEG_Y,
            GROUND_CHECK_DISTANCE,
            true,
            &ground_filter,
        );

        let signals = check.update(hit.map(|hit| hit.entity));
        for signal in &signals {
            debug!("Ground check: {:?} {:?}", signal.phase, signal.source);
        }
        queue.0.extend(signals);
    }
}

/// Queue begin/end signals from this step's collision messages, then a stay
/// signal for every damage source still touching that did not just begin.
pub(crate) fn gather_contact_signals(
    mut starts: MessageReader<CollisionStart>,
    mut ends: MessageReader<CollisionEnd>,
    others: ClassifyQuery,
    mut players: Query<(Entity, &CollidingEntities, &mut ContactQueue), With<Player>>,
) {
    let Ok((player, colliding, mut queue)) = players.single_mut() else {
        starts.clear();
        ends.clear();
        return;
    };

    let mut begun = Vec::new();

    for event in starts.read() {
        let other = if event.collider1 == player {
            event.collider2
        } else if event.collider2 == player {
            event.collider1
        } else {
            continue;
        };

        if let Some(class) = classify(other, &others) {
            begun.push(other);
            queue.0.push_back(ContactSignal::new(ContactPhase::Begin, other, class));
        }
    }

    for event in ends.read() {
        let other = if event.collider1 == player {
            event.collider2
        } else if event.collider2 == player {
            event.collider1
        } else {
            continue;
        };

        // Spent sources are already despawned and drop out here
        if let Some(class) = classify(other, &others) {
            queue.0.push_back(ContactSignal::new(ContactPhase::End, other, class));
        }
    }

    for &other in colliding.iter() {
        if begun.contains(&other) {
            continue;
        }
        if let Some(class @ ContactClass::DamageSource(_)) = classify(other, &others) {
            queue.0.push_back(ContactSignal::new(ContactPhase::Stay, other, class));
        }
    }
}
