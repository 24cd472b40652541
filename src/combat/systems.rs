//! Combat domain: projectile spawning, flight, and hit logging.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::combat::components::{Projectile, ProjectileLifetime};
use crate::combat::events::{AttackFiredEvent, ContactDamageEvent};
use crate::combat::resources::{AttackTuning, ProjectileDef};
use crate::movement::{GameLayer, Ground};

/// Launch velocity for a projectile fired along a unit `direction`
pub fn projectile_velocity(direction: Vec2, def: &ProjectileDef) -> Vec2 {
    direction.normalize_or_zero() * def.speed
}

/// Starting state of one projectile. It flies straight, unaffected by gravity.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileLaunch {
    /// At the attack origin, long axis along the aim
    pub transform: Transform,
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub lifetime: f32,
}

pub fn projectile_launch(attack: &AttackFiredEvent, def: &ProjectileDef) -> ProjectileLaunch {
    let transform = Transform::from_xyz(attack.origin.x, attack.origin.y, 2.0)
        .with_rotation(Quat::from_rotation_z(attack.direction.to_angle()));
    ProjectileLaunch {
        transform,
        velocity: projectile_velocity(attack.direction, def),
        gravity_scale: 0.0,
        lifetime: def.lifetime,
    }
}

pub(crate) fn spawn_attack_projectiles(
    mut commands: Commands,
    mut attacks: MessageReader<AttackFiredEvent>,
    tuning: Res<AttackTuning>,
) {
    for attack in attacks.read() {
        let Some(def) = tuning.projectile.as_ref() else {
            continue;
        };

        let launch = projectile_launch(attack, def);
        debug!(
            "Projectile from {:?} ({:?}) toward {:?} at {}",
            attack.entity, attack.origin, attack.direction, def.speed
        );

        commands.spawn((
            Projectile,
            ProjectileLifetime(launch.lifetime),
            Sprite {
                color: Color::srgba(1.0, 0.9, 0.5, 0.9),
                custom_size: Some(Vec2::new(def.size * 1.6, def.size * 0.8)),
                ..default()
            },
            launch.transform,
            RigidBody::Dynamic,
            GravityScale(launch.gravity_scale),
            LinearVelocity(launch.velocity),
            Collider::circle(def.size * 0.5),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Projectile, [GameLayer::Ground]),
        ));
    }
}

pub(crate) fn cleanup_expired_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ProjectileLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        if lifetime.tick(dt) {
            commands.entity(entity).despawn();
        }
    }
}

/// Projectiles stop at the first ground surface they touch
pub(crate) fn stop_projectiles_on_ground(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    projectiles: Query<(), With<Projectile>>,
    ground: Query<(), With<Ground>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (projectile, other) in pairs {
            if projectiles.contains(projectile) && ground.contains(other) {
                commands.entity(projectile).try_despawn();
            }
        }
    }
}

pub(crate) fn log_contact_damage(mut hits: MessageReader<ContactDamageEvent>) {
    for hit in hits.read() {
        info!(
            "Player took {} from '{}', invincible for {}s",
            hit.amount, hit.label, hit.invincibility
        );
    }
}
