//! Movement domain: components and physics layers for locomotion.

use std::collections::VecDeque;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::DamageSource;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Things that hurt the player
    Hazard,
    /// Pickup proximity sensors
    Collectible,
    /// Player attacks
    Projectile,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn as_vec2(self) -> Vec2 {
        match self {
            Facing::Right => Vec2::X,
            Facing::Left => Vec2::NEG_X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroundedState {
    Grounded,
    #[default]
    Airborne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactPhase {
    Begin,
    Stay,
    End,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContactClass {
    Ground,
    CollectibleProximity,
    DamageSource(DamageSource),
}

/// One edge-triggered contact notification from the collision feed
#[derive(Debug, Clone, PartialEq)]
pub struct ContactSignal {
    pub phase: ContactPhase,
    pub source: Entity,
    pub class: ContactClass,
}

impl ContactSignal {
    pub fn new(phase: ContactPhase, source: Entity, class: ContactClass) -> Self {
        Self {
            phase,
            source,
            class,
        }
    }
}

/// Contact signals waiting for the next motion tick, in arrival order
#[derive(Component, Debug, Default)]
pub struct ContactQueue(pub VecDeque<ContactSignal>);

/// Ground surface found under the player's feet by the last ground check
#[derive(Component, Debug, Default)]
pub struct GroundCheck {
    pub surface: Option<Entity>,
}

impl GroundCheck {
    /// Record the latest surface and return the ground signals the change implies.
    pub fn update(&mut self, surface: Option<Entity>) -> Vec<ContactSignal> {
        let previous = std::mem::replace(&mut self.surface, surface);
        if previous == surface {
            return Vec::new();
        }

        let mut signals = Vec::new();
        if let Some(left) = previous {
            signals.push(ContactSignal::new(ContactPhase::End, left, ContactClass::Ground));
        }
        if let Some(landed) = surface {
            signals.push(ContactSignal::new(ContactPhase::Begin, landed, ContactClass::Ground));
        }
        signals
    }
}
