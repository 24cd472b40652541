//! Movement domain: the per-tick player state machine.
//!
//! `MotionController::tick` is the only place player velocity, the coyote
//! window, jump shaping, attack cooldown, freeze, and invincibility change.
//! It is engine-agnostic apart from `Entity` ids and `Vec2`, so the ECS
//! systems around it only copy state in and out.

use bevy::prelude::*;

use crate::combat::{AttackTuning, DamageSource, FREEZE_RECOIL_DAMAGE};
use crate::movement::components::{ContactClass, ContactPhase, ContactSignal, Facing, GroundedState};
use crate::movement::resources::{ActionInput, MovementTuning};
use crate::vitality::{HealthUpdate, VitalityModel};

/// Post-attack lockout. Gravity scale is parked here while frozen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Freeze {
    pub active: bool,
    pub remaining: f32,
    pub saved_gravity_scale: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Invincibility {
    pub active: bool,
    pub remaining: f32,
}

impl Invincibility {
    fn start(&mut self, duration: f32) {
        self.active = true;
        self.remaining = duration;
    }

    fn decay(&mut self, dt: f32) {
        if !self.active {
            return;
        }
        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.active = false;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackFired {
    pub origin: Vec2,
    pub direction: Vec2,
}

/// A damage source hit that opened the invincibility window
#[derive(Debug, Clone, PartialEq)]
pub struct ContactHit {
    pub source: Entity,
    pub amount: f32,
    pub label: String,
}

/// Everything a tick did that the outside world has to react to.
#[derive(Debug, Default)]
pub struct TickReport {
    /// Applied health mutations, in the order they happened
    pub health_updates: Vec<HealthUpdate>,
    pub contact_hits: Vec<ContactHit>,
    /// Single-use damage sources that landed a hit
    pub spent_sources: Vec<Entity>,
    pub attack: Option<AttackFired>,
    pub jumped: bool,
    pub landed: bool,
    /// The tick was spent frozen
    pub frozen: bool,
    pub freeze_ended: bool,
}

#[derive(Component, Debug, Clone)]
pub struct MotionController {
    pub velocity: Vec2,
    pub grounded: GroundedState,
    pub coyote_timer: f32,
    pub has_jumped_since_grounded: bool,
    pub attack_cooldown_timer: f32,
    pub freeze: Freeze,
    pub invincibility: Invincibility,
    pub gravity_scale: f32,
    pub facing: Facing,
    /// Damage source currently touching the player
    pub tracked_hazard: Option<Entity>,
}

impl Default for MotionController {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            grounded: GroundedState::Airborne,
            coyote_timer: 0.0,
            has_jumped_since_grounded: false,
            attack_cooldown_timer: 0.0,
            freeze: Freeze::default(),
            invincibility: Invincibility::default(),
            gravity_scale: 1.0,
            facing: Facing::Right,
            tracked_hazard: None,
        }
    }
}

impl MotionController {
    pub fn is_grounded(&self) -> bool {
        self.grounded == GroundedState::Grounded
    }

    pub fn is_frozen(&self) -> bool {
        self.freeze.active
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility.active
    }

    /// Advance one fixed step. `origin` is where an attack would be fired from.
    #[allow(clippy::too_many_arguments)]
    pub fn tick(
        &mut self,
        dt: f32,
        input: &ActionInput,
        contacts: impl IntoIterator<Item = ContactSignal>,
        origin: Vec2,
        tuning: &MovementTuning,
        attack: &AttackTuning,
        vitality: &mut VitalityModel,
    ) -> TickReport {
        let mut report = TickReport::default();

        self.invincibility.decay(dt);

        for signal in contacts {
            self.apply_contact(signal, tuning, attack, vitality, &mut report);
        }

        if self.freeze.active {
            self.advance_freeze(dt, vitality, &mut report);
            return report;
        }

        self.velocity.x = input.horizontal * tuning.move_speed;

        if self.is_grounded() {
            self.coyote_timer = tuning.coyote_time;
        } else {
            self.coyote_timer = (self.coyote_timer - dt).max(0.0);
        }

        if input.jump_pressed && self.coyote_timer > 0.0 && !self.has_jumped_since_grounded {
            self.velocity.y = tuning.jump_force;
            self.has_jumped_since_grounded = true;
            self.coyote_timer = 0.0;
            report.jumped = true;
            debug!("Jump: grounded={}", self.is_grounded());
        }

        self.shape_jump(dt, input.jump_held, tuning);
        self.update_facing(input.horizontal, tuning.facing_dead_zone);

        self.attack_cooldown_timer = (self.attack_cooldown_timer - dt).max(0.0);
        if input.attack_pressed
            && self.attack_cooldown_timer <= 0.0
            && attack.projectile.is_some()
        {
            let direction = resolve_attack_direction(input, self.facing, tuning.aim_dead_zone);
            report.attack = Some(AttackFired { origin, direction });
            self.attack_cooldown_timer = attack.cooldown;
            self.enter_freeze(attack.freeze_duration);
            debug!(
                "Attack fired toward {:?}, frozen for {}s",
                direction, attack.freeze_duration
            );
        }

        report
    }

    fn apply_contact(
        &mut self,
        signal: ContactSignal,
        tuning: &MovementTuning,
        attack: &AttackTuning,
        vitality: &mut VitalityModel,
        report: &mut TickReport,
    ) {
        match (signal.class, signal.phase) {
            (ContactClass::Ground, ContactPhase::Begin) => {
                self.grounded = GroundedState::Grounded;
                self.coyote_timer = tuning.coyote_time;
                self.has_jumped_since_grounded = false;
                report.landed = true;
            }
            (ContactClass::Ground, ContactPhase::End) => {
                self.grounded = GroundedState::Airborne;
                self.coyote_timer = tuning.coyote_time;
            }
            (ContactClass::Ground, ContactPhase::Stay) => {}
            (
                ContactClass::DamageSource(hazard),
                phase @ (ContactPhase::Begin | ContactPhase::Stay),
            ) => {
                if phase == ContactPhase::Begin {
                    self.tracked_hazard = Some(signal.source);
                }
                self.apply_contact_damage(signal.source, hazard, attack, vitality, report);
            }
            (ContactClass::DamageSource(_), ContactPhase::End) => {
                if self.tracked_hazard == Some(signal.source) {
                    self.tracked_hazard = None;
                }
            }
            (ContactClass::CollectibleProximity, _) => {}
        }
    }

    fn apply_contact_damage(
        &mut self,
        source: Entity,
        hazard: DamageSource,
        attack: &AttackTuning,
        vitality: &mut VitalityModel,
        report: &mut TickReport,
    ) {
        if self.invincibility.active || vitality.is_dead() {
            return;
        }

        if let Some(update) = vitality.take_damage(hazard.damage_per_second) {
            report.health_updates.push(update);
        }
        self.invincibility.start(attack.invincibility_duration);

        if hazard.destroy_on_contact {
            report.spent_sources.push(source);
            if self.tracked_hazard == Some(source) {
                self.tracked_hazard = None;
            }
        }

        debug!(
            "Hit by '{}' for {}, invincible for {}s",
            hazard.label, hazard.damage_per_second, attack.invincibility_duration
        );
        report.contact_hits.push(ContactHit {
            source,
            amount: hazard.damage_per_second,
            label: hazard.label,
        });
    }

    fn advance_freeze(&mut self, dt: f32, vitality: &mut VitalityModel, report: &mut TickReport) {
        self.freeze.remaining -= dt;
        if self.freeze.remaining <= 0.0 {
            self.gravity_scale = self.freeze.saved_gravity_scale;
            self.freeze = Freeze::default();
            if let Some(update) = vitality.take_damage(FREEZE_RECOIL_DAMAGE) {
                report.health_updates.push(update);
            }
            report.freeze_ended = true;
            debug!("Freeze ended, recoil {}", FREEZE_RECOIL_DAMAGE);
        }
        self.velocity = Vec2::ZERO;
        report.frozen = true;
    }

    fn enter_freeze(&mut self, duration: f32) {
        self.freeze = Freeze {
            active: true,
            remaining: duration,
            saved_gravity_scale: self.gravity_scale,
        };
        self.gravity_scale = 0.0;
        self.velocity = Vec2::ZERO;
    }

    /// Faster falls, and shorter hops when jump is released early.
    fn shape_jump(&mut self, dt: f32, jump_held: bool, tuning: &MovementTuning) {
        if self.velocity.y < 0.0 {
            self.velocity.y -= tuning.gravity * (tuning.fall_multiplier - 1.0) * dt;
        } else if self.velocity.y > 0.0 && !jump_held {
            self.velocity.y -= tuning.gravity * (tuning.low_jump_multiplier - 1.0) * dt;
        }
    }

    fn update_facing(&mut self, horizontal: f32, dead_zone: f32) {
        if horizontal > dead_zone {
            self.facing = Facing::Right;
        } else if horizontal < -dead_zone {
            self.facing = Facing::Left;
        }
    }
}

/// Aim stick first, then the arrow-key sum, then facing.
pub fn resolve_attack_direction(input: &ActionInput, facing: Facing, aim_dead_zone: f32) -> Vec2 {
    if let Some(aim) = input.aim {
        if aim.length() > aim_dead_zone {
            return aim.normalize();
        }
    }

    let mut keys = Vec2::ZERO;
    if input.left {
        keys.x -= 1.0;
    }
    if input.right {
        keys.x += 1.0;
    }
    if input.up {
        keys.y += 1.0;
    }
    if input.down {
        keys.y -= 1.0;
    }

    keys.try_normalize().unwrap_or(facing.as_vec2())
}
