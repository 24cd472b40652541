//! Data definitions for the player config file.
//!
//! These structs mirror assets/data/player.ron. Every section falls back to
//! its defaults when omitted, so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::ambient::AmbientTuning;
use crate::combat::AttackTuning;
use crate::movement::MovementTuning;
use crate::vitality::{SmoothingTuning, VitalityTuning};

pub const CURRENT_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Player config (player.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerConfigDef {
    pub schema_version: u32,
    pub movement: MovementTuning,
    pub attack: AttackTuning,
    pub vitality: VitalityTuning,
    pub smoothing: SmoothingTuning,
    pub ambient: AmbientTuning,
    pub sandbox: SandboxDef,
}

impl Default for PlayerConfigDef {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            movement: MovementTuning::default(),
            attack: AttackTuning::default(),
            vitality: VitalityTuning::default(),
            smoothing: SmoothingTuning::default(),
            ambient: AmbientTuning::default(),
            sandbox: SandboxDef::default(),
        }
    }
}

// ============================================================================
// Sandbox layout
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlatformDef {
    pub position: [f32; 2],
    pub size: [f32; 2],
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HazardDef {
    pub label: String,
    pub position: [f32; 2],
    pub size: [f32; 2],
    pub damage: f32,
    #[serde(default)]
    pub destroy_on_contact: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CollectibleDef {
    pub item_id: String,
    pub name: String,
    pub position: [f32; 2],
    #[serde(default = "default_true")]
    pub require_key_press: bool,
    #[serde(default)]
    pub heal_amount: f32,
    pub ambient_profile: Option<String>,
    #[serde(default)]
    pub ambient_duration: f32,
}

fn default_true() -> bool {
    true
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SandboxDef {
    pub floor: PlatformDef,
    pub platforms: Vec<PlatformDef>,
    pub hazards: Vec<HazardDef>,
    pub collectibles: Vec<CollectibleDef>,
}

impl Default for SandboxDef {
    fn default() -> Self {
        Self {
            floor: PlatformDef {
                position: [0.0, -200.0],
                size: [1600.0, 40.0],
            },
            platforms: vec![
                PlatformDef {
                    position: [-300.0, -60.0],
                    size: [220.0, 24.0],
                },
                PlatformDef {
                    position: [260.0, 40.0],
                    size: [200.0, 24.0],
                },
            ],
            hazards: vec![
                HazardDef {
                    label: "Bramble".to_string(),
                    position: [40.0, -168.0],
                    size: [120.0, 24.0],
                    damage: 2.0,
                    destroy_on_contact: false,
                },
                HazardDef {
                    label: "Spore puff".to_string(),
                    position: [-520.0, -160.0],
                    size: [32.0, 32.0],
                    damage: 1.0,
                    destroy_on_contact: true,
                },
            ],
            collectibles: vec![
                CollectibleDef {
                    item_id: "glowcap".to_string(),
                    name: "Glowcap".to_string(),
                    position: [-300.0, -20.0],
                    require_key_press: true,
                    heal_amount: 2.0,
                    ambient_profile: Some("bloom".to_string()),
                    ambient_duration: 6.0,
                },
                CollectibleDef {
                    item_id: "sporecap".to_string(),
                    name: "Sporecap".to_string(),
                    position: [260.0, 80.0],
                    require_key_press: false,
                    heal_amount: 1.0,
                    ambient_profile: Some("spore".to_string()),
                    ambient_duration: 4.0,
                },
            ],
        }
    }
}
