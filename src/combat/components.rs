//! Combat domain: damage sources and attack projectiles.

use bevy::prelude::*;

/// Hurts the player on contact. The amount is applied once per contact that
/// lands outside the invincibility window, not scaled by elapsed time.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct DamageSource {
    pub damage_per_second: f32,
    /// Despawn the source after it deals damage
    pub destroy_on_contact: bool,
    /// What is causing the damage, for logs
    pub label: String,
}

impl DamageSource {
    pub fn new(damage_per_second: f32, label: impl Into<String>) -> Self {
        Self {
            damage_per_second,
            destroy_on_contact: false,
            label: label.into(),
        }
    }

    pub fn single_use(mut self) -> Self {
        self.destroy_on_contact = true;
        self
    }
}

impl Default for DamageSource {
    fn default() -> Self {
        Self::new(2.0, "Unknown")
    }
}

/// Ranged attack in flight
#[derive(Component, Debug)]
pub struct Projectile;

/// Seconds until the projectile despawns
#[derive(Component, Debug)]
pub struct ProjectileLifetime(pub f32);

impl ProjectileLifetime {
    /// Returns true once the lifetime has run out
    pub fn tick(&mut self, dt: f32) -> bool {
        self.0 -= dt;
        self.0 <= 0.0
    }
}
