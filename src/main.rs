mod ambient;
mod collectibles;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod ui;
mod vitality;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Glowcap".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Content first: it inserts the configured tuning the other plugins read
    .add_plugins(content::ContentPlugin)
    .add_plugins((
        core::CorePlugin,
        vitality::VitalityPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        collectibles::CollectiblesPlugin,
        ambient::AmbientPlugin,
        ui::UiPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
