//! Ambient domain: backdrop profiles that pickups can switch temporarily.

mod profiles;
mod systems;


pub use profiles::{
    AmbientError, AmbientProfileDef, AmbientProfiles, AmbientTuning, DEFAULT_PROFILE_ALIAS,
    TemporaryOutcome,
};
pub use systems::AmbientBackdrop;

use bevy::prelude::*;

use crate::ambient::systems::{crossfade_backdrop, setup_ambient, tick_ambient_profiles};

pub struct AmbientPlugin;

impl Plugin for AmbientPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AmbientTuning>()
            .init_resource::<ClearColor>()
            .add_systems(Startup, setup_ambient)
            .add_systems(Update, (tick_ambient_profiles, crossfade_backdrop).chain());
    }
}
