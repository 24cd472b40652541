use super::*;
use crate::ambient::{AmbientProfiles, AmbientTuning};
use crate::movement::MotionController;
use crate::vitality::VitalityModel;

// -----------------------------------------------------------------------------
// Vitality hotkeys
// -----------------------------------------------------------------------------

#[test]
fn test_damage_and_heal_step_by_one() {
    let mut vitality = VitalityModel::default();
    let update = apply_vitality_action(DebugAction::Damage, &mut vitality).unwrap();
    assert_eq!(update.current, 9.0);

    let update = apply_vitality_action(DebugAction::Heal, &mut vitality).unwrap();
    assert_eq!(update.current, 10.0);
}

#[test]
fn test_raise_max_health_keeps_fraction() {
    let mut vitality = VitalityModel::default();
    let _ = vitality.take_damage(5.0);
    let update = apply_vitality_action(DebugAction::RaiseMaxHealth, &mut vitality).unwrap();
    assert_eq!(update.max, 15.0);
    assert!((update.current - 7.5).abs() < 1e-4);
}

#[test]
fn test_non_vitality_actions_do_nothing() {
    let mut vitality = VitalityModel::default();
    assert!(apply_vitality_action(DebugAction::ToggleAmbient, &mut vitality).is_none());
    assert!(apply_vitality_action(DebugAction::ToggleInfo, &mut vitality).is_none());
}

// -----------------------------------------------------------------------------
// Ambient toggle
// -----------------------------------------------------------------------------

#[test]
fn test_toggle_ambient_round_trip() {
    let tuning = AmbientTuning::default();
    let mut profiles = AmbientProfiles::from_tuning(&tuning);

    toggle_ambient(&mut profiles, &tuning);
    assert!(profiles.is_temporary());
    assert_ne!(profiles.active(), tuning.default_profile);

    toggle_ambient(&mut profiles, &tuning);
    assert!(!profiles.is_temporary());
    assert_eq!(profiles.active(), tuning.default_profile);
}

#[test]
fn test_toggle_ambient_without_alternate() {
    let mut tuning = AmbientTuning::default();
    tuning.profiles.retain(|profile| profile.name == tuning.default_profile);
    let mut profiles = AmbientProfiles::from_tuning(&tuning);

    let msg = toggle_ambient(&mut profiles, &tuning);
    assert_eq!(msg, "No alternate ambient profile");
    assert!(!profiles.is_temporary());
}

// -----------------------------------------------------------------------------
// State
// -----------------------------------------------------------------------------

#[test]
fn test_status_message_expires() {
    let mut state = DebugState::default();
    state.set_message("hello", 1.0);
    state.tick_message(0.5);
    assert!(state.status_message.is_some());
    state.tick_message(0.6);
    assert!(state.status_message.is_none());
}

#[test]
fn test_readout_lists_active_timers() {
    let mut controller = MotionController::default();
    controller.invincibility.active = true;
    controller.invincibility.remaining = 0.5;
    let readout = controller_readout(
        &controller,
        &VitalityModel::default(),
        &AmbientProfiles::default(),
    );
    assert!(readout.contains("invincible: 0.50"));
    assert!(readout.contains("health: 10/10"));
    assert!(!readout.contains("frozen"));
}
