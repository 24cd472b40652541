use super::*;
use crate::ambient::{AmbientError, AmbientProfiles, TemporaryOutcome};
use crate::vitality::VitalityModel;

// -----------------------------------------------------------------------------
// Inventory
// -----------------------------------------------------------------------------

fn held(inventory: &Inventory, item_id: &str) -> u32 {
    inventory
        .iter()
        .find(|(id, _)| *id == item_id)
        .map_or(0, |(_, count)| count)
}

#[test]
fn test_inventory_add_accumulates() {
    let mut inventory = Inventory::default();
    assert!(inventory.is_empty());
    assert_eq!(inventory.add("glowcap", 1), 1);
    assert_eq!(inventory.add("glowcap", 2), 3);
    assert_eq!(inventory.add("sporecap", 1), 1);
    assert_eq!(held(&inventory, "glowcap"), 3);
    assert_eq!(held(&inventory, "gem"), 0);
    assert!(!inventory.is_empty());
}

// -----------------------------------------------------------------------------
// Readiness
// -----------------------------------------------------------------------------

#[test]
fn test_key_press_pickup_needs_range_and_press() {
    let mushroom = Collectible::new("glowcap", "Glowcap");
    assert!(!mushroom.ready(true, false));
    assert!(!mushroom.ready(false, true));
    assert!(mushroom.ready(true, true));
}

#[test]
fn test_touch_pickup_collects_in_range() {
    let mushroom = Collectible::new("glowcap", "Glowcap").on_touch();
    assert!(mushroom.ready(true, false));
    assert!(!mushroom.ready(false, true));
}

// -----------------------------------------------------------------------------
// Collecting
// -----------------------------------------------------------------------------

#[test]
fn test_collect_heals_and_counts() {
    let mut inventory = Inventory::default();
    let mut vitality = VitalityModel::default();
    let mut profiles = AmbientProfiles::default();
    let _ = vitality.take_damage(3.0);

    let mushroom = Collectible::new("glowcap", "Glowcap").healing(2.0);
    let collection = collect_item(&mushroom, &mut inventory, &mut vitality, &mut profiles);

    assert_eq!(collection.total, 1);
    let update = collection.health_update.unwrap();
    assert!((update.current - 9.0).abs() < 1e-4);
    assert!((vitality.current() - 9.0).abs() < 1e-4);
    assert!(collection.ambient.is_none());
}

#[test]
fn test_collect_without_heal_emits_no_health_update() {
    let mut inventory = Inventory::default();
    let mut vitality = VitalityModel::default();
    let mut profiles = AmbientProfiles::default();

    let key = Collectible::new("key", "Rusty key");
    let collection = collect_item(&key, &mut inventory, &mut vitality, &mut profiles);
    assert!(collection.health_update.is_none());
    assert_eq!(held(&inventory, "key"), 1);
}

#[test]
fn test_collect_requests_and_extends_ambient_profile() {
    let mut inventory = Inventory::default();
    let mut vitality = VitalityModel::default();
    let mut profiles = AmbientProfiles::default();

    let mushroom = Collectible::new("glowcap", "Glowcap").with_ambient("bloom", 4.0);
    let first = collect_item(&mushroom, &mut inventory, &mut vitality, &mut profiles);
    assert_eq!(first.ambient, Some(Ok(TemporaryOutcome::Started)));
    assert_eq!(profiles.active(), "bloom");

    let second = collect_item(&mushroom, &mut inventory, &mut vitality, &mut profiles);
    assert_eq!(second.ambient, Some(Ok(TemporaryOutcome::Extended)));
    assert_eq!(profiles.remaining(), Some(8.0));
    assert_eq!(second.total, 2);
}

#[test]
fn test_collect_with_unknown_profile_still_collects() {
    let mut inventory = Inventory::default();
    let mut vitality = VitalityModel::default();
    let mut profiles = AmbientProfiles::default();

    let odd = Collectible::new("odd", "Odd spore").with_ambient("nowhere", 1.0);
    let collection = collect_item(&odd, &mut inventory, &mut vitality, &mut profiles);
    assert_eq!(
        collection.ambient,
        Some(Err(AmbientError::UnknownProfile("nowhere".to_string())))
    );
    assert_eq!(held(&inventory, "odd"), 1);
}

#[test]
fn test_dead_collector_is_not_healed() {
    let mut inventory = Inventory::default();
    let mut vitality = VitalityModel::default();
    let mut profiles = AmbientProfiles::default();
    let _ = vitality.take_damage(10.0);

    let mushroom = Collectible::new("glowcap", "Glowcap").healing(5.0);
    let collection = collect_item(&mushroom, &mut inventory, &mut vitality, &mut profiles);
    assert!(collection.health_update.is_none());
    assert_eq!(vitality.current(), 0.0);
}
