//! UI domain: collected item counts.

use bevy::prelude::*;

use crate::collectibles::Inventory;
use crate::ui::hud_player::{PLAYER_HEALTHBAR_HEIGHT, PLAYER_HEALTHBAR_PADDING};

/// Marker for the inventory display UI container
#[derive(Component)]
pub struct InventoryDisplayUI;

/// Marker for the item count text
#[derive(Component)]
pub struct InventoryCountText;

/// `id xN` pairs sorted by id, or a dash when empty
pub fn inventory_summary(inventory: &Inventory) -> String {
    let mut items: Vec<(&str, u32)> = inventory.iter().collect();
    if items.is_empty() {
        return "-".to_string();
    }
    items.sort_unstable_by(|a, b| a.0.cmp(b.0));
    items
        .iter()
        .map(|(id, count)| format!("{} x{}", id, count))
        .collect::<Vec<_>>()
        .join("  ")
}

pub(crate) fn spawn_inventory_display_ui(mut commands: Commands) {
    // Position below the health bar
    commands
        .spawn((
            InventoryDisplayUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(PLAYER_HEALTHBAR_PADDING),
                top: Val::Px(PLAYER_HEALTHBAR_PADDING + PLAYER_HEALTHBAR_HEIGHT + 8.0),
                flex_direction: FlexDirection::Row,
                align_items: AlignItems::Center,
                column_gap: Val::Px(8.0),
                ..default()
            },
        ))
        .with_children(|parent| {
            // Mushroom icon
            parent.spawn((
                Node {
                    width: Val::Px(14.0),
                    height: Val::Px(16.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.95, 0.8, 0.45)),
            ));

            parent.spawn((
                InventoryCountText,
                Text::new("-"),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.85, 0.6)),
            ));
        });
}

pub(crate) fn update_inventory_display(
    inventory: Res<Inventory>,
    mut query: Query<&mut Text, With<InventoryCountText>>,
) {
    if inventory.is_changed() {
        for mut text in &mut query {
            **text = inventory_summary(&inventory);
        }
    }
}
