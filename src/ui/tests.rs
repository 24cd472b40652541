use super::*;
use crate::collectibles::Inventory;
use crate::vitality::VitalityTuning;

// -----------------------------------------------------------------------------
// Health bar
// -----------------------------------------------------------------------------

#[test]
fn test_frame_fill_spans_bar() {
    assert_eq!(frame_fill(0, 101), 0.0);
    assert_eq!(frame_fill(101, 101), 1.0);
    assert!((frame_fill(50, 101) - 50.0 / 101.0).abs() < 1e-6);
}

#[test]
fn test_frame_fill_single_frame_is_full() {
    assert_eq!(frame_fill(0, 0), 1.0);
}

#[test]
fn test_health_label_shows_tenths() {
    assert_eq!(health_label(7.6, 10.0), "7.6 / 10");
    assert_eq!(health_label(0.0, 15.0), "0 / 15");
}

#[test]
fn test_fill_color_endpoints() {
    let full = fill_color(1.0).to_srgba();
    assert!((full.red - 0.2).abs() < 1e-5);
    assert_eq!(full.blue, 0.0);
    assert_eq!(fill_color(0.0), Color::srgb(0.9, 0.2, 0.2));
}

// -----------------------------------------------------------------------------
// Glow and veil
// -----------------------------------------------------------------------------

#[test]
fn test_glow_tracks_light_intensity() {
    let tuning = VitalityTuning::default();
    assert_eq!(glow_alpha(0.0, &tuning), 0.0);
    assert!((glow_alpha(tuning.light_max, &tuning) - 0.6).abs() < 1e-6);
    assert!(glow_alpha(0.5, &tuning) < glow_alpha(1.0, &tuning));
}

#[test]
fn test_veil_clamps_shadow() {
    assert_eq!(veil_alpha(-1.0), 0.0);
    assert!((veil_alpha(2.0) - 0.75).abs() < 1e-6);
}

// -----------------------------------------------------------------------------
// Blink
// -----------------------------------------------------------------------------

#[test]
fn test_blink_alternates_each_period() {
    assert!(blink_visible(0.95 * BLINK_PERIOD));
    assert!(!blink_visible(1.5 * BLINK_PERIOD));
    assert!(blink_visible(2.5 * BLINK_PERIOD));
    assert!(blink_visible(0.0));
}

// -----------------------------------------------------------------------------
// Inventory readout
// -----------------------------------------------------------------------------

#[test]
fn test_inventory_summary_sorted() {
    let mut inventory = Inventory::default();
    assert_eq!(inventory_summary(&inventory), "-");

    inventory.add("sporecap", 1);
    inventory.add("glowcap", 2);
    assert_eq!(inventory_summary(&inventory), "glowcap x2  sporecap x1");
}
