//! Ambient domain: named backdrop profiles with a timed temporary override.

use std::collections::HashMap;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Reserved name that always resolves to the configured default profile
pub const DEFAULT_PROFILE_ALIAS: &str = "default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientProfileDef {
    pub name: String,
    /// Linear sRGB components in 0..=1
    pub background: [f32; 3],
}

impl AmbientProfileDef {
    pub fn new(name: impl Into<String>, background: [f32; 3]) -> Self {
        Self {
            name: name.into(),
            background,
        }
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientTuning {
    pub default_profile: String,
    pub profiles: Vec<AmbientProfileDef>,
    /// Seconds to blend the backdrop between profiles
    pub crossfade_time: f32,
}

impl Default for AmbientTuning {
    fn default() -> Self {
        Self {
            default_profile: "cave".to_string(),
            profiles: vec![
                AmbientProfileDef::new("cave", [0.04, 0.05, 0.08]),
                AmbientProfileDef::new("bloom", [0.10, 0.20, 0.14]),
                AmbientProfileDef::new("spore", [0.18, 0.09, 0.22]),
            ],
            crossfade_time: 1.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmbientError {
    EmptyName,
    UnknownProfile(String),
}

impl std::fmt::Display for AmbientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmbientError::EmptyName => write!(f, "Profile name cannot be empty"),
            AmbientError::UnknownProfile(name) => write!(f, "Unknown ambient profile '{}'", name),
        }
    }
}

impl std::error::Error for AmbientError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemporaryOutcome {
    /// Switched to the profile and started a fresh countdown
    Started,
    /// The same profile was already temporarily active, time was added
    Extended,
}

#[derive(Resource, Debug, Clone)]
pub struct AmbientProfiles {
    backgrounds: HashMap<String, [f32; 3]>,
    default_profile: String,
    active: String,
    /// Seconds left on a temporary override
    temporary: Option<f32>,
}

impl AmbientProfiles {
    pub fn from_tuning(tuning: &AmbientTuning) -> Self {
        let mut backgrounds: HashMap<String, [f32; 3]> = tuning
            .profiles
            .iter()
            .map(|profile| (profile.name.clone(), profile.background))
            .collect();

        if !backgrounds.contains_key(&tuning.default_profile) {
            warn!(
                "Default ambient profile '{}' has no definition, using black",
                tuning.default_profile
            );
            backgrounds.insert(tuning.default_profile.clone(), [0.0, 0.0, 0.0]);
        }

        Self {
            backgrounds,
            default_profile: tuning.default_profile.clone(),
            active: tuning.default_profile.clone(),
            temporary: None,
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn default_profile(&self) -> &str {
        &self.default_profile
    }

    pub fn is_temporary(&self) -> bool {
        self.temporary.is_some()
    }

    /// Seconds until a temporary override reverts
    pub fn remaining(&self) -> Option<f32> {
        self.temporary
    }

    /// Background of the active profile as sRGB channels
    pub fn active_rgb(&self) -> [f32; 3] {
        self.backgrounds
            .get(&self.active)
            .copied()
            .unwrap_or([0.0, 0.0, 0.0])
    }

    /// Switch permanently, cancelling any temporary override.
    pub fn set_profile(&mut self, name: &str) -> Result<(), AmbientError> {
        let resolved = self.resolve(name)?;
        self.temporary = None;
        if resolved != self.active {
            info!("Ambient profile switched to '{}'", resolved);
            self.active = resolved;
        }
        Ok(())
    }

    /// Switch for `duration` seconds, then fall back to the default.
    pub fn set_temporary(
        &mut self,
        name: &str,
        duration: f32,
    ) -> Result<TemporaryOutcome, AmbientError> {
        let resolved = self.resolve(name)?;

        if let Some(remaining) = self.temporary.as_mut() {
            if resolved == self.active {
                *remaining += duration;
                debug!(
                    "Ambient profile '{}' extended, {:.2}s left",
                    resolved, *remaining
                );
                return Ok(TemporaryOutcome::Extended);
            }
        }

        info!(
            "Ambient profile '{}' active for {:.2}s",
            resolved, duration
        );
        self.active = resolved;
        self.temporary = Some(duration);
        Ok(TemporaryOutcome::Started)
    }

    /// Count down a temporary override. Returns true when it reverted this step.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(remaining) = self.temporary.as_mut() else {
            return false;
        };

        *remaining -= dt;
        if *remaining > 0.0 {
            return false;
        }

        self.temporary = None;
        self.active = self.default_profile.clone();
        info!("Ambient profile restored to '{}'", self.active);
        true
    }

    fn resolve(&self, name: &str) -> Result<String, AmbientError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AmbientError::EmptyName);
        }
        if name.eq_ignore_ascii_case(DEFAULT_PROFILE_ALIAS) {
            return Ok(self.default_profile.clone());
        }
        if self.backgrounds.contains_key(name) {
            Ok(name.to_string())
        } else {
            Err(AmbientError::UnknownProfile(name.to_string()))
        }
    }
}

impl Default for AmbientProfiles {
    fn default() -> Self {
        Self::from_tuning(&AmbientTuning::default())
    }
}
