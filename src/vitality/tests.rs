//! Vitality domain: tests for health rounding, death, targets, and smoothing.

use bevy::ecs::message::{MessageReader, MessageWriter, Messages};
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::{retarget_visual_smoothing, start_death_fade};
use super::{
    Easing, FrameTransition, HealthChangedEvent, HealthUpdate, PlayerDeathEvent,
    SmoothingTuning, Transition, VisualSmoothing, VitalityModel, VitalityTargets, VitalityTuning,
    publish_health_update, round_tenth, smoothstep,
};

const EPSILON: f32 = 1e-4;

fn is_tenth_multiple(value: f32) -> bool {
    ((value * 10.0) - (value * 10.0).round()).abs() < 1e-3
}

// -----------------------------------------------------------------------------
// Rounding and bounds
// -----------------------------------------------------------------------------

#[test]
fn test_round_tenth_half_away_from_zero() {
    assert!((round_tenth(0.25) - 0.3).abs() < EPSILON);
    assert!((round_tenth(-0.25) + 0.3).abs() < EPSILON);
    assert!((round_tenth(1.04) - 1.0).abs() < EPSILON);
    assert!((round_tenth(2.0) - 2.0).abs() < EPSILON);
}

#[test]
fn test_new_model_starts_full_and_rounded() {
    let model = VitalityModel::new(VitalityTuning {
        max_health: 9.87,
        ..Default::default()
    });
    assert!((model.max() - 9.9).abs() < EPSILON);
    assert!((model.current() - 9.9).abs() < EPSILON);
    assert!(!model.is_dead());
    assert_eq!(model.targets().health_bar_frame, 0);
}

#[test]
fn test_health_stays_in_bounds_and_on_tenths() {
    let mut model = VitalityModel::default();
    let steps = [
        (true, 0.33),
        (false, 5.0),
        (true, 1.26),
        (true, 0.04),
        (false, 0.15),
        (true, 3.33),
        (false, 0.07),
        (true, 2.49),
    ];

    for (is_damage, amount) in steps {
        if is_damage {
            model.take_damage(amount);
        } else {
            model.heal(amount);
        }
        assert!(model.current() >= 0.0);
        assert!(model.current() <= model.max());
        assert!(is_tenth_multiple(model.current()), "{}", model.current());
    }
}

#[test]
fn test_heal_clamps_to_max() {
    let mut model = VitalityModel::default();
    model.take_damage(1.0);
    let update = model.heal(50.0).unwrap();
    assert!((update.current - 10.0).abs() < EPSILON);
    assert!(!update.died);
}

#[test]
fn test_damage_amount_is_rounded_before_subtracting() {
    let mut model = VitalityModel::default();
    let update = model.take_damage(0.44).unwrap();
    assert!((update.current - 9.6).abs() < EPSILON);
}

// -----------------------------------------------------------------------------
// Death transition
// -----------------------------------------------------------------------------

#[test]
fn test_death_fires_once() {
    let mut model = VitalityModel::default();

    let first = model.take_damage(6.0).unwrap();
    assert!(!first.died);

    let lethal = model.take_damage(6.0).unwrap();
    assert!(lethal.died);
    assert_eq!(lethal.current, 0.0);
    assert!(model.is_dead());

    assert!(model.take_damage(1.0).is_none());
    assert!(model.take_damage(0.0).is_none());
}

#[test]
fn test_exact_lethal_damage_kills() {
    let mut model = VitalityModel::default();
    let update = model.take_damage(10.0).unwrap();
    assert!(update.died);
}

#[test]
fn test_dead_model_ignores_damage_and_heal() {
    let mut model = VitalityModel::default();
    model.take_damage(20.0);
    assert!(model.is_dead());

    assert!(model.heal(5.0).is_none());
    assert!(model.take_damage(5.0).is_none());
    assert_eq!(model.current(), 0.0);
    assert!(model.is_dead());
}

#[test]
fn test_rounded_damage_can_be_lethal() {
    let mut model = VitalityModel::new(VitalityTuning {
        max_health: 1.0,
        ..Default::default()
    });
    let update = model.take_damage(0.96).unwrap();
    assert!(update.died);
}

// -----------------------------------------------------------------------------
// Max health
// -----------------------------------------------------------------------------

#[test]
fn test_set_max_health_preserves_fraction() {
    let mut model = VitalityModel::default();
    model.take_damage(5.0);

    let update = model.set_max_health(20.0).unwrap();
    assert!((update.max - 20.0).abs() < EPSILON);
    assert!((update.current - 10.0).abs() < EPSILON);
    assert!((model.fraction() - 0.5).abs() < EPSILON);
}

#[test]
fn test_set_max_health_rounds_current() {
    let mut model = VitalityModel::default();
    model.take_damage(3.0);

    let update = model.set_max_health(3.0).unwrap();
    // 3.0 * 0.7 = 2.1
    assert!((update.current - 2.1).abs() < EPSILON);
    assert!(update.current <= update.max);
}

#[test]
fn test_set_max_health_ignores_non_positive() {
    let mut model = VitalityModel::default();
    assert!(model.set_max_health(0.0).is_none());
    assert!(model.set_max_health(-3.0).is_none());
    assert!((model.max() - 10.0).abs() < EPSILON);
}

#[test]
fn test_set_max_health_ignores_values_rounding_to_zero() {
    let mut model = VitalityModel::default();
    assert!(model.set_max_health(0.04).is_none());
    assert!((model.max() - 10.0).abs() < EPSILON);
    assert!((model.fraction() - 1.0).abs() < EPSILON);

    let update = model.take_damage(1.0).unwrap();
    assert!(!update.died);
    assert!(!model.is_dead());
}

// -----------------------------------------------------------------------------
// Derived targets
// -----------------------------------------------------------------------------

#[test]
fn test_health_bar_frame_mapping() {
    let tuning = VitalityTuning::default();
    assert_eq!(VitalityTargets::from_fraction(1.0, &tuning).health_bar_frame, 0);
    assert_eq!(VitalityTargets::from_fraction(0.0, &tuning).health_bar_frame, 101);
    assert_eq!(VitalityTargets::from_fraction(0.5, &tuning).health_bar_frame, 50);
}

#[test]
fn test_frames_follow_damage() {
    let mut model = VitalityModel::default();
    assert_eq!(model.take_damage(5.0).unwrap().targets.health_bar_frame, 50);
    assert_eq!(model.take_damage(5.0).unwrap().targets.health_bar_frame, 101);
}

#[test]
fn test_light_and_shadow_interpolate_inversely() {
    let tuning = VitalityTuning::default();

    let full = VitalityTargets::from_fraction(1.0, &tuning);
    assert!((full.light_intensity - 1.5).abs() < EPSILON);
    assert!((full.shadow_intensity - 0.2).abs() < EPSILON);

    let empty = VitalityTargets::from_fraction(0.0, &tuning);
    assert!((empty.light_intensity - 0.1).abs() < EPSILON);
    assert!((empty.shadow_intensity - 1.0).abs() < EPSILON);

    let half = VitalityTargets::from_fraction(0.5, &tuning);
    assert!((half.light_intensity - 0.8).abs() < EPSILON);
    assert!((half.shadow_intensity - 0.6).abs() < EPSILON);
}

#[test]
fn test_single_frame_bar_never_overflows() {
    let tuning = VitalityTuning {
        frame_count: 1,
        ..Default::default()
    };
    assert_eq!(VitalityTargets::from_fraction(0.0, &tuning).health_bar_frame, 0);
}

// -----------------------------------------------------------------------------
// Smoothing
// -----------------------------------------------------------------------------

#[test]
fn test_smoothstep_endpoints() {
    assert_eq!(smoothstep(0.0), 0.0);
    assert_eq!(smoothstep(1.0), 1.0);
    assert!((smoothstep(0.5) - 0.5).abs() < EPSILON);
    assert_eq!(smoothstep(2.0), 1.0);
}

#[test]
fn test_transition_reaches_target() {
    let mut transition = Transition::at(1.5);
    transition.retarget(0.8, 2.0, Easing::SmoothStep);

    transition.advance(1.0);
    assert!((transition.value() - 1.15).abs() < EPSILON);
    assert!(transition.is_running());

    transition.advance(1.0);
    assert_eq!(transition.value(), 0.8);
    assert!(!transition.is_running());
}

#[test]
fn test_retarget_restarts_from_current_value() {
    let mut transition = Transition::at(0.0);
    transition.retarget(1.0, 1.0, Easing::Linear);
    transition.advance(0.5);

    transition.retarget(0.0, 1.0, Easing::Linear);
    transition.advance(0.5);
    assert!((transition.value() - 0.25).abs() < EPSILON);
}

#[test]
fn test_zero_duration_snaps() {
    let mut transition = Transition::at(0.0);
    transition.retarget(3.0, 0.0, Easing::SmoothStep);
    assert_eq!(transition.value(), 3.0);
    assert!(!transition.is_running());
}

#[test]
fn test_frame_transition_steps_and_clamps() {
    let mut frames = FrameTransition::new(0, 102);
    frames.retarget(500, 1.0);

    let mut last = 0;
    for _ in 0..25 {
        if let Some(frame) = frames.advance(0.05) {
            assert!(frame >= last);
            last = frame;
        }
    }
    assert_eq!(frames.frame(), 101);
}

#[test]
fn test_frame_retarget_to_current_is_noop() {
    let mut frames = FrameTransition::new(10, 102);
    frames.retarget(10, 1.0);
    assert_eq!(frames.advance(0.5), None);
    assert_eq!(frames.frame(), 10);
}

#[test]
fn test_death_fade_overrides_light_transition() {
    let tuning = SmoothingTuning::default();
    let mut model = VitalityModel::default();
    let mut smoothing = VisualSmoothing::new(model.targets(), 102);

    let update = model.take_damage(10.0).unwrap();
    smoothing.retarget(update.targets, &tuning);
    smoothing.start_death_fade(&tuning);

    smoothing.advance(0.5);
    assert!((smoothing.light.value() - 0.75).abs() < EPSILON);
    smoothing.advance(0.5);
    assert_eq!(smoothing.light.value(), 0.0);

    smoothing.advance(1.0);
    assert!((smoothing.shadow.value() - 1.0).abs() < EPSILON);
    assert_eq!(smoothing.frame.frame(), 101);
}

// -----------------------------------------------------------------------------
// Notifications
// -----------------------------------------------------------------------------

fn notification_world() -> World {
    let mut world = World::new();
    world.init_resource::<Messages<HealthChangedEvent>>();
    world.init_resource::<Messages<PlayerDeathEvent>>();
    world.insert_resource(SmoothingTuning::default());
    world
}

fn publish(world: &mut World, entity: Entity, update: HealthUpdate) {
    world
        .run_system_once(
            move |mut health: MessageWriter<HealthChangedEvent>,
                  mut death: MessageWriter<PlayerDeathEvent>| {
                publish_health_update(entity, &update, &mut health, &mut death);
            },
        )
        .unwrap();
}

fn health_notified(world: &mut World) -> Vec<f32> {
    world
        .run_system_once(|mut reader: MessageReader<HealthChangedEvent>| {
            reader.read().map(|event| event.current).collect::<Vec<_>>()
        })
        .unwrap()
}

fn deaths_notified(world: &mut World) -> Vec<Entity> {
    world
        .run_system_once(|mut reader: MessageReader<PlayerDeathEvent>| {
            reader.read().map(|event| event.entity).collect::<Vec<_>>()
        })
        .unwrap()
}

#[test]
fn test_non_lethal_update_notifies_health_only() {
    let mut world = notification_world();
    let mut model = VitalityModel::default();
    let entity = world.spawn_empty().id();

    let update = model.take_damage(2.0).unwrap();
    publish(&mut world, entity, update);

    assert_eq!(health_notified(&mut world), vec![8.0]);
    assert!(deaths_notified(&mut world).is_empty());
}

#[test]
fn test_lethal_update_notifies_death_once_after_health() {
    let mut world = notification_world();
    let mut model = VitalityModel::default();
    let entity = world
        .spawn(VisualSmoothing::new(model.targets(), 102))
        .id();

    let update = model.take_damage(10.0).unwrap();
    publish(&mut world, entity, update);
    assert!(model.take_damage(1.0).is_none());

    assert_eq!(health_notified(&mut world), vec![0.0]);
    assert_eq!(deaths_notified(&mut world), vec![entity]);

    // Feedback consumes health first, then death: the fade has the last word
    world.run_system_once(retarget_visual_smoothing).unwrap();
    world.run_system_once(start_death_fade).unwrap();

    let mut smoothing = world.get_mut::<VisualSmoothing>(entity).unwrap();
    smoothing.advance(SmoothingTuning::default().death_fade_time);
    assert_eq!(smoothing.light.value(), 0.0);
}
