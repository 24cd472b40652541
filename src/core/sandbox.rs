//! Core domain: the small test level the player runs around in.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::collectibles::{Collectible, PickupRange};
use crate::combat::DamageSource;
use crate::content::{CollectibleDef, HazardDef, PlatformDef, SandboxDef};
use crate::movement::{GameLayer, Ground};

/// Everything spawned for the level, cleared on retry
#[derive(Component, Debug)]
pub struct SandboxEntity;

const MUSHROOM_SIZE: Vec2 = Vec2::new(22.0, 26.0);

pub(crate) fn spawn_sandbox(mut commands: Commands, sandbox: Res<SandboxDef>) {
    info!(
        "Spawning sandbox: {} platforms, {} hazards, {} collectibles",
        sandbox.platforms.len() + 1,
        sandbox.hazards.len(),
        sandbox.collectibles.len()
    );

    spawn_platform(&mut commands, &sandbox.floor, Color::srgb(0.22, 0.2, 0.26));
    for platform in &sandbox.platforms {
        spawn_platform(&mut commands, platform, Color::srgb(0.28, 0.26, 0.32));
    }

    for hazard in &sandbox.hazards {
        spawn_hazard(&mut commands, hazard);
    }

    for collectible in &sandbox.collectibles {
        spawn_collectible(&mut commands, collectible);
    }
}

fn spawn_platform(commands: &mut Commands, def: &PlatformDef, color: Color) {
    let [x, y] = def.position;
    let size = Vec2::from(def.size);

    commands.spawn((
        SandboxEntity,
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(x, y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player, GameLayer::Projectile]),
    ));
}

fn spawn_hazard(commands: &mut Commands, def: &HazardDef) {
    let [x, y] = def.position;
    let size = Vec2::from(def.size);
    let mut source = DamageSource::new(def.damage, def.label.clone());
    if def.destroy_on_contact {
        source = source.single_use();
    }

    let color = if def.destroy_on_contact {
        Color::srgb(0.75, 0.45, 0.85)
    } else {
        Color::srgb(0.7, 0.2, 0.25)
    };

    commands.spawn((
        SandboxEntity,
        source,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(x, y, 0.5),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));
}

fn spawn_collectible(commands: &mut Commands, def: &CollectibleDef) {
    let [x, y] = def.position;

    let mut collectible =
        Collectible::new(def.item_id.clone(), def.name.clone()).healing(def.heal_amount);
    if !def.require_key_press {
        collectible = collectible.on_touch();
    }
    if let Some(profile) = &def.ambient_profile {
        collectible = collectible.with_ambient(profile.clone(), def.ambient_duration);
    }

    commands.spawn((
        SandboxEntity,
        collectible,
        PickupRange::default(),
        Sprite {
            color: Color::srgb(0.95, 0.8, 0.45),
            custom_size: Some(MUSHROOM_SIZE),
            ..default()
        },
        Transform::from_xyz(x, y, 0.5),
        RigidBody::Static,
        Collider::rectangle(MUSHROOM_SIZE.x * 2.0, MUSHROOM_SIZE.y * 2.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Collectible, [GameLayer::Player]),
    ));
}
