//! Collectibles domain: item counts keyed by item id.

use std::collections::HashMap;

use bevy::prelude::*;

#[derive(Resource, Debug, Default, Clone)]
pub struct Inventory {
    items: HashMap<String, u32>,
}

impl Inventory {
    /// Returns the new total for `item_id`.
    pub fn add(&mut self, item_id: &str, count: u32) -> u32 {
        let total = self.items.entry(item_id.to_string()).or_insert(0);
        *total += count;
        info!("Added {} x {} to inventory, total {}", count, item_id, *total);
        *total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.items.iter().map(|(id, count)| (id.as_str(), *count))
    }
}
