//! Combat domain: attack tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Health lost when an attack freeze runs out
pub const FREEZE_RECOIL_DAMAGE: f32 = 0.4;

/// What an attack launches. Without one the attack action does nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectileDef {
    pub speed: f32,
    pub lifetime: f32,
    pub size: f32,
}

impl Default for ProjectileDef {
    fn default() -> Self {
        Self {
            speed: 700.0,
            lifetime: 0.8,
            size: 12.0,
        }
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackTuning {
    pub cooldown: f32,
    /// Full-motion lockout after firing
    pub freeze_duration: f32,
    /// Damage immunity after a contact hit
    pub invincibility_duration: f32,
    pub projectile: Option<ProjectileDef>,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            cooldown: 0.6,
            freeze_duration: 0.5,
            invincibility_duration: 1.0,
            projectile: Some(ProjectileDef::default()),
        }
    }
}
