use avian2d::prelude::CollisionStart;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::*;
use crate::movement::Ground;

// -----------------------------------------------------------------------------
// Damage sources
// -----------------------------------------------------------------------------

#[test]
fn test_damage_source_defaults() {
    let source = DamageSource::default();
    assert_eq!(source.damage_per_second, 2.0);
    assert!(!source.destroy_on_contact);
    assert_eq!(source.label, "Unknown");
}

#[test]
fn test_single_use_marks_destroy_on_contact() {
    let source = DamageSource::new(1.5, "thorn").single_use();
    assert!(source.destroy_on_contact);
    assert_eq!(source.damage_per_second, 1.5);
    assert_eq!(source.label, "thorn");
}

// -----------------------------------------------------------------------------
// Attack tuning
// -----------------------------------------------------------------------------

#[test]
fn test_attack_tuning_defaults() {
    let tuning = AttackTuning::default();
    assert_eq!(tuning.cooldown, 0.6);
    assert_eq!(tuning.freeze_duration, 0.5);
    assert_eq!(tuning.invincibility_duration, 1.0);
    assert!(tuning.projectile.is_some());
    assert_eq!(FREEZE_RECOIL_DAMAGE, 0.4);
}

// -----------------------------------------------------------------------------
// Projectiles
// -----------------------------------------------------------------------------

#[test]
fn test_projectile_velocity_follows_direction() {
    let def = ProjectileDef::default();
    let velocity = projectile_velocity(Vec2::NEG_X, &def);
    assert_eq!(velocity, Vec2::new(-def.speed, 0.0));
}

#[test]
fn test_projectile_velocity_normalizes_direction() {
    let def = ProjectileDef {
        speed: 100.0,
        ..default()
    };
    let velocity = projectile_velocity(Vec2::new(3.0, 4.0), &def);
    assert!((velocity - Vec2::new(60.0, 80.0)).length() < 1e-3);
}

#[test]
fn test_projectile_lifetime_expires() {
    let mut lifetime = ProjectileLifetime(0.1);
    assert!(!lifetime.tick(0.05));
    assert!(lifetime.tick(0.06));
}

#[test]
fn test_launch_starts_at_origin_along_aim() {
    let mut world = World::new();
    let def = ProjectileDef::default();
    let attack = AttackFiredEvent {
        entity: world.spawn_empty().id(),
        origin: Vec2::new(10.0, 20.0),
        direction: Vec2::Y,
    };

    let launch = projectile_launch(&attack, &def);
    assert_eq!(launch.transform.translation, Vec3::new(10.0, 20.0, 2.0));
    let long_axis = (launch.transform.rotation * Vec3::X).truncate();
    assert!((long_axis - Vec2::Y).length() < 1e-4);
    assert!((launch.velocity - Vec2::new(0.0, def.speed)).length() < 1e-3);
    assert_eq!(launch.gravity_scale, 0.0);
    assert_eq!(launch.lifetime, def.lifetime);
}

#[test]
fn test_attack_without_payload_spawns_nothing() {
    let mut world = World::new();
    world.init_resource::<Messages<AttackFiredEvent>>();
    world.insert_resource(AttackTuning {
        projectile: None,
        ..default()
    });
    let player = world.spawn_empty().id();
    world.resource_mut::<Messages<AttackFiredEvent>>().write(AttackFiredEvent {
        entity: player,
        origin: Vec2::ZERO,
        direction: Vec2::X,
    });

    world.run_system_once(spawn_attack_projectiles).unwrap();

    let mut projectiles = world.query::<&Projectile>();
    assert_eq!(projectiles.iter(&world).count(), 0);
}

// -----------------------------------------------------------------------------
// Ground stops
// -----------------------------------------------------------------------------

fn collide(world: &mut World, a: Entity, b: Entity) {
    world.resource_mut::<Messages<CollisionStart>>().write(CollisionStart {
        collider1: a,
        collider2: b,
        body1: Some(a),
        body2: Some(b),
    });
}

#[test]
fn test_projectile_despawns_on_ground() {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();
    let projectile = world.spawn(Projectile).id();
    let floor = world.spawn(Ground).id();

    collide(&mut world, floor, projectile);
    world.run_system_once(stop_projectiles_on_ground).unwrap();

    assert!(world.get_entity(projectile).is_err());
    assert!(world.get_entity(floor).is_ok());
}

#[test]
fn test_projectile_passes_through_non_ground() {
    let mut world = World::new();
    world.init_resource::<Messages<CollisionStart>>();
    let projectile = world.spawn(Projectile).id();
    let bramble = world.spawn(DamageSource::new(2.0, "Bramble")).id();

    collide(&mut world, projectile, bramble);
    world.run_system_once(stop_projectiles_on_ground).unwrap();

    assert!(world.get_entity(projectile).is_ok());
}
