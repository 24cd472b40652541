//! Combat domain: damage sources, attack tuning, and attack projectiles.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{DamageSource, Projectile, ProjectileLifetime};
pub use events::{AttackFiredEvent, ContactDamageEvent};
pub use resources::{AttackTuning, FREEZE_RECOIL_DAMAGE, ProjectileDef};
pub use systems::{ProjectileLaunch, projectile_launch, projectile_velocity};

use bevy::prelude::*;

use crate::combat::systems::{
    cleanup_expired_projectiles, log_contact_damage, spawn_attack_projectiles,
    stop_projectiles_on_ground,
};
use crate::movement::MotionTickSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackTuning>()
            .add_message::<AttackFiredEvent>()
            .add_message::<ContactDamageEvent>()
            .add_systems(
                FixedUpdate,
                (
                    (spawn_attack_projectiles, log_contact_damage).after(MotionTickSet),
                    cleanup_expired_projectiles,
                    stop_projectiles_on_ground,
                ),
            );
    }
}
