//! Vitality domain: restartable timed transitions toward presentation targets.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::vitality::model::{VitalityTargets, lerp};

/// Hermite smoothstep on a clamped `t`.
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    #[default]
    SmoothStep,
    Linear,
}

impl Easing {
    fn apply(self, t: f32) -> f32 {
        match self {
            Easing::SmoothStep => smoothstep(t),
            Easing::Linear => t.clamp(0.0, 1.0),
        }
    }
}

/// A single value easing toward a target. Retargeting abandons the running
/// transition and starts a new one from wherever the value currently is.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    value: f32,
    start: f32,
    target: f32,
    elapsed: f32,
    duration: f32,
    easing: Easing,
    running: bool,
}

impl Transition {
    pub fn at(value: f32) -> Self {
        Self {
            value,
            start: value,
            target: value,
            elapsed: 0.0,
            duration: 0.0,
            easing: Easing::default(),
            running: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn retarget(&mut self, target: f32, duration: f32, easing: Easing) {
        self.start = self.value;
        self.target = target;
        self.elapsed = 0.0;
        self.duration = duration;
        self.easing = easing;
        self.running = true;
        if duration <= 0.0 {
            self.finish();
        }
    }

    pub fn advance(&mut self, dt: f32) -> f32 {
        if !self.running {
            return self.value;
        }

        self.elapsed += dt;
        if self.elapsed >= self.duration {
            self.finish();
        } else {
            let t = self.easing.apply(self.elapsed / self.duration);
            self.value = lerp(self.start, self.target, t);
        }
        self.value
    }

    fn finish(&mut self) {
        self.value = self.target;
        self.running = false;
    }
}

/// Health-bar frame index easing between sprite frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameTransition {
    frame: usize,
    last_frame: usize,
    inner: Transition,
}

impl FrameTransition {
    pub fn new(frame: usize, frame_count: usize) -> Self {
        Self {
            frame,
            last_frame: frame_count.saturating_sub(1),
            inner: Transition::at(frame as f32),
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn last_frame(&self) -> usize {
        self.last_frame
    }

    pub fn retarget(&mut self, target: usize, duration: f32) {
        let target = target.min(self.last_frame);
        self.inner = Transition::at(self.frame as f32);
        if target == self.frame {
            return;
        }
        self.inner.retarget(target as f32, duration, Easing::SmoothStep);
        if !self.inner.is_running() {
            self.frame = target;
        }
    }

    /// Returns the new frame when it changed this step.
    pub fn advance(&mut self, dt: f32) -> Option<usize> {
        if !self.inner.is_running() {
            return None;
        }
        let frame = (self.inner.advance(dt).round().max(0.0) as usize).min(self.last_frame);
        if frame == self.frame {
            return None;
        }
        self.frame = frame;
        Some(frame)
    }
}

#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingTuning {
    pub light_transition_time: f32,
    pub health_bar_transition_time: f32,
    pub death_fade_time: f32,
}

impl Default for SmoothingTuning {
    fn default() -> Self {
        Self {
            light_transition_time: 2.0,
            health_bar_transition_time: 1.0,
            death_fade_time: 1.0,
        }
    }
}

/// Smoothed presentation values for one player, advanced on the fixed clock.
#[derive(Component, Debug, Clone)]
pub struct VisualSmoothing {
    pub light: Transition,
    pub shadow: Transition,
    pub frame: FrameTransition,
}

impl VisualSmoothing {
    pub fn new(targets: VitalityTargets, frame_count: usize) -> Self {
        Self {
            light: Transition::at(targets.light_intensity),
            shadow: Transition::at(targets.shadow_intensity),
            frame: FrameTransition::new(targets.health_bar_frame, frame_count),
        }
    }

    pub fn retarget(&mut self, targets: VitalityTargets, tuning: &SmoothingTuning) {
        self.light.retarget(
            targets.light_intensity,
            tuning.light_transition_time,
            Easing::SmoothStep,
        );
        self.shadow.retarget(
            targets.shadow_intensity,
            tuning.light_transition_time,
            Easing::SmoothStep,
        );
        self.frame.retarget(targets.health_bar_frame, tuning.health_bar_transition_time);
    }

    /// Linear fade of the light to zero; replaces any running light transition.
    pub fn start_death_fade(&mut self, tuning: &SmoothingTuning) {
        self.light.retarget(0.0, tuning.death_fade_time, Easing::Linear);
    }

    pub fn advance(&mut self, dt: f32) {
        self.light.advance(dt);
        self.shadow.advance(dt);
        self.frame.advance(dt);
    }
}
