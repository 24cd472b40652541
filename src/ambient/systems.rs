//! Ambient domain: profile countdown and backdrop crossfade.

use bevy::prelude::*;

use crate::ambient::profiles::{AmbientProfiles, AmbientTuning};
use crate::vitality::{Easing, Transition};

/// The clear colour as currently shown, easing toward the active profile.
#[derive(Resource, Debug, Clone)]
pub struct AmbientBackdrop {
    shown: String,
    channels: [Transition; 3],
}

impl AmbientBackdrop {
    pub fn new(profiles: &AmbientProfiles) -> Self {
        Self {
            shown: profiles.active().to_string(),
            channels: profiles.active_rgb().map(Transition::at),
        }
    }

    /// Which profile the backdrop is showing or blending toward
    pub fn shown(&self) -> &str {
        &self.shown
    }

    /// Start a crossfade if the active profile changed since the last sync.
    pub fn sync(&mut self, profiles: &AmbientProfiles, crossfade_time: f32) -> bool {
        if self.shown == profiles.active() {
            return false;
        }
        self.shown = profiles.active().to_string();
        let target = profiles.active_rgb();
        for (channel, value) in self.channels.iter_mut().zip(target) {
            channel.retarget(value, crossfade_time, Easing::SmoothStep);
        }
        true
    }

    pub fn advance(&mut self, dt: f32) -> Color {
        let [r, g, b] = self.channels.each_mut().map(|channel| channel.advance(dt));
        Color::srgb(r, g, b)
    }

    pub fn color(&self) -> Color {
        let [r, g, b] = self.channels.each_ref().map(Transition::value);
        Color::srgb(r, g, b)
    }
}

pub(crate) fn setup_ambient(
    mut commands: Commands,
    tuning: Res<AmbientTuning>,
    mut clear_color: ResMut<ClearColor>,
) {
    let profiles = AmbientProfiles::from_tuning(&tuning);
    let backdrop = AmbientBackdrop::new(&profiles);
    clear_color.0 = backdrop.color();
    info!(
        "Ambient ready: default profile '{}', {} profiles",
        profiles.default_profile(),
        tuning.profiles.len()
    );
    commands.insert_resource(profiles);
    commands.insert_resource(backdrop);
}

pub(crate) fn tick_ambient_profiles(time: Res<Time>, mut profiles: ResMut<AmbientProfiles>) {
    profiles.tick(time.delta_secs());
}

pub(crate) fn crossfade_backdrop(
    time: Res<Time>,
    tuning: Res<AmbientTuning>,
    profiles: Res<AmbientProfiles>,
    mut backdrop: ResMut<AmbientBackdrop>,
    mut clear_color: ResMut<ClearColor>,
) {
    if backdrop.sync(&profiles, tuning.crossfade_time) {
        debug!("Backdrop crossfading to '{}'", backdrop.shown());
    }
    clear_color.0 = backdrop.advance(time.delta_secs());
}
