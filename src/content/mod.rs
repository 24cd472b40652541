//! Content domain: the RON player config and the tuning resources built from it.

mod data;
mod loader;
mod validation;


pub use data::{
    CURRENT_SCHEMA_VERSION, CollectibleDef, HazardDef, PlatformDef, PlayerConfigDef, SandboxDef,
};
pub use loader::{ContentLoadError, load_player_config, parse_player_config};
pub use validation::{ValidationError, validate_player_config};

use bevy::prelude::*;
use std::path::Path;

/// Player config location, relative to the working directory
pub const PLAYER_CONFIG_PATH: &str = "assets/data/player.ron";

/// Loads the player config while the app is being built, so every later
/// plugin's `init_resource` sees the configured tuning instead of defaults.
pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        let config = match load_player_config(Path::new(PLAYER_CONFIG_PATH)) {
            Ok(config) => {
                info!("Loaded player config from {}", PLAYER_CONFIG_PATH);
                config
            }
            Err(e) => {
                warn!("{}, using built-in defaults", e);
                PlayerConfigDef::default()
            }
        };

        for error in validate_player_config(&config) {
            warn!("Player config: {}", error);
        }

        insert_config(app, config);
    }
}

fn insert_config(app: &mut App, config: PlayerConfigDef) {
    let PlayerConfigDef {
        movement,
        attack,
        vitality,
        smoothing,
        ambient,
        sandbox,
        ..
    } = config;

    app.insert_resource(movement)
        .insert_resource(attack)
        .insert_resource(vitality)
        .insert_resource(smoothing)
        .insert_resource(ambient)
        .insert_resource(sandbox);
}
