//! UI domain: player glow, darkness veil, and the invincibility blink.

use bevy::prelude::*;

use crate::movement::{MotionController, Player, PlayerGlow};
use crate::vitality::{VisualSmoothing, VitalityTuning};

/// Seconds per blink half-cycle while invincible
pub const BLINK_PERIOD: f32 = 0.1;

const GLOW_MAX_ALPHA: f32 = 0.6;
const VEIL_MAX_ALPHA: f32 = 0.75;

/// Full-screen darkness overlay
#[derive(Component)]
pub struct ShadowVeil;

/// Glow opacity for a light intensity, relative to the brightest it can get.
pub fn glow_alpha(light: f32, tuning: &VitalityTuning) -> f32 {
    if tuning.light_max <= 0.0 {
        return 0.0;
    }
    (light / tuning.light_max).clamp(0.0, 1.0) * GLOW_MAX_ALPHA
}

pub fn veil_alpha(shadow: f32) -> f32 {
    shadow.clamp(0.0, 1.0) * VEIL_MAX_ALPHA
}

/// Alternates every `BLINK_PERIOD` over the remaining invincibility time.
pub fn blink_visible(remaining: f32) -> bool {
    if remaining <= 0.0 {
        return true;
    }
    (remaining / BLINK_PERIOD).floor() as u32 % 2 == 0
}

pub(crate) fn spawn_shadow_veil(mut commands: Commands) {
    commands.spawn((
        ShadowVeil,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(0.0),
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            bottom: Val::Px(0.0),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.02, 0.0)),
        // Below the HUD
        ZIndex(-10),
    ));
}

pub(crate) fn update_player_glow(
    tuning: Res<VitalityTuning>,
    player_query: Query<&VisualSmoothing, With<Player>>,
    mut glow_query: Query<(&mut Sprite, &mut Transform), With<PlayerGlow>>,
) {
    let Ok(smoothing) = player_query.single() else {
        return;
    };

    let light = smoothing.light.value();
    for (mut sprite, mut transform) in &mut glow_query {
        sprite.color.set_alpha(glow_alpha(light, &tuning));
        transform.scale = Vec3::splat(0.6 + light * 0.4);
    }
}

pub(crate) fn update_shadow_veil(
    player_query: Query<&VisualSmoothing, With<Player>>,
    mut veil_query: Query<&mut BackgroundColor, With<ShadowVeil>>,
) {
    let Ok(smoothing) = player_query.single() else {
        return;
    };

    for mut bg_color in &mut veil_query {
        bg_color.0.set_alpha(veil_alpha(smoothing.shadow.value()));
    }
}

pub(crate) fn blink_while_invincible(
    mut query: Query<(&MotionController, &mut Sprite), With<Player>>,
) {
    for (controller, mut sprite) in &mut query {
        let visible = !controller.is_invincible()
            || blink_visible(controller.invincibility.remaining);
        sprite.color.set_alpha(if visible { 1.0 } else { 0.25 });
    }
}
