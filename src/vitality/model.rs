//! Vitality domain: health model, rounding rule, and derived visual targets.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Round to the nearest 0.1, halves away from zero.
pub fn round_tenth(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

fn clamp_round(value: f32, max: f32) -> f32 {
    round_tenth(value).clamp(0.0, max)
}

pub(crate) fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Bounds the derived presentation targets are interpolated between.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalityTuning {
    pub max_health: f32,
    /// Light intensity at zero health
    pub light_min: f32,
    /// Light intensity at full health
    pub light_max: f32,
    /// Shadow intensity at zero health (darker)
    pub shadow_at_empty: f32,
    /// Shadow intensity at full health (lighter)
    pub shadow_at_full: f32,
    /// Number of health-bar frames, frame 0 is full
    pub frame_count: usize,
}

impl Default for VitalityTuning {
    fn default() -> Self {
        Self {
            max_health: 10.0,
            light_min: 0.1,
            light_max: 1.5,
            shadow_at_empty: 1.0,
            shadow_at_full: 0.2,
            frame_count: 102,
        }
    }
}

/// Presentation targets recomputed on every health mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalityTargets {
    pub light_intensity: f32,
    pub shadow_intensity: f32,
    pub health_bar_frame: usize,
}

impl VitalityTargets {
    pub fn from_fraction(fraction: f32, tuning: &VitalityTuning) -> Self {
        let last_frame = tuning.frame_count.saturating_sub(1);
        // Ties go to the even frame so a half-full bar lands on frame 50 of 0..=101
        let frame = ((1.0 - fraction) * last_frame as f32).round_ties_even();
        Self {
            light_intensity: lerp(tuning.light_min, tuning.light_max, fraction),
            shadow_intensity: lerp(tuning.shadow_at_empty, tuning.shadow_at_full, fraction),
            health_bar_frame: (frame.max(0.0) as usize).min(last_frame),
        }
    }
}

/// Result of a health mutation that was actually applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthUpdate {
    pub current: f32,
    pub max: f32,
    pub targets: VitalityTargets,
    /// This mutation moved the model into the dead state
    pub died: bool,
}

/// Player health with one-decimal precision and a one-way death transition.
#[derive(Component, Debug, Clone)]
pub struct VitalityModel {
    current: f32,
    max: f32,
    dead: bool,
    tuning: VitalityTuning,
    targets: VitalityTargets,
}

impl VitalityModel {
    pub fn new(tuning: VitalityTuning) -> Self {
        let max = round_tenth(tuning.max_health);
        let targets = VitalityTargets::from_fraction(1.0, &tuning);
        Self {
            current: max,
            max,
            dead: false,
            tuning,
            targets,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn fraction(&self) -> f32 {
        if self.max > 0.0 {
            self.current / self.max
        } else {
            0.0
        }
    }

    pub fn targets(&self) -> VitalityTargets {
        self.targets
    }

    pub fn tuning(&self) -> &VitalityTuning {
        &self.tuning
    }

    /// Returns `None` when the model is already dead.
    pub fn take_damage(&mut self, amount: f32) -> Option<HealthUpdate> {
        if self.dead {
            return None;
        }

        self.current = clamp_round(self.current - round_tenth(amount), self.max);
        let died = self.current <= 0.0;
        if died {
            self.current = 0.0;
            self.dead = true;
        }

        debug!(
            "Player took {} damage. Health: {}/{}",
            round_tenth(amount),
            self.current,
            self.max
        );
        Some(self.recompute(died))
    }

    /// Returns `None` when the model is already dead.
    pub fn heal(&mut self, amount: f32) -> Option<HealthUpdate> {
        if self.dead {
            return None;
        }

        self.current = clamp_round(self.current + round_tenth(amount), self.max);

        debug!(
            "Player healed for {}. Health: {}/{}",
            round_tenth(amount),
            self.current,
            self.max
        );
        Some(self.recompute(false))
    }

    /// Rescales current health so the health fraction is preserved.
    pub fn set_max_health(&mut self, new_max: f32) -> Option<HealthUpdate> {
        let new_max = round_tenth(new_max);
        if new_max <= 0.0 {
            return None;
        }

        let fraction = self.fraction();
        self.max = new_max;
        self.current = clamp_round(self.max * fraction, self.max);
        Some(self.recompute(false))
    }

    fn recompute(&mut self, died: bool) -> HealthUpdate {
        self.targets = VitalityTargets::from_fraction(self.fraction(), &self.tuning);
        HealthUpdate {
            current: self.current,
            max: self.max,
            targets: self.targets,
            died,
        }
    }
}

impl Default for VitalityModel {
    fn default() -> Self {
        Self::new(VitalityTuning::default())
    }
}
