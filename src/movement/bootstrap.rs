//! Movement domain: player bootstrap from the loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{
    ContactQueue, GameLayer, GroundCheck, MotionController, MovementTuning, Player,
};
use crate::vitality::{VisualSmoothing, VitalityModel, VitalityTuning};

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);

/// Marker for the halo sprite whose brightness follows the light intensity
#[derive(Component, Debug)]
pub struct PlayerGlow;

pub(crate) fn apply_world_gravity(tuning: Res<MovementTuning>, mut gravity: ResMut<Gravity>) {
    gravity.0 = Vec2::NEG_Y * tuning.gravity;
    info!(
        "World gravity set to {}, full jump reaches {:.0}px",
        tuning.gravity,
        tuning.full_jump_height()
    );
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    vitality_tuning: Res<VitalityTuning>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let vitality = VitalityModel::new(vitality_tuning.clone());
    let smoothing = VisualSmoothing::new(vitality.targets(), vitality_tuning.frame_count);

    info!(
        "Spawning player: health={}/{}",
        vitality.current(),
        vitality.max()
    );

    commands
        .spawn((
            // Identity & state
            (
                Player,
                MotionController::default(),
                ContactQueue::default(),
                GroundCheck::default(),
                vitality,
                smoothing,
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.85, 0.9, 0.8),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, 60.0, 1.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(1.0),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollidingEntities::default(),
                CollisionLayers::new(
                    GameLayer::Player,
                    [GameLayer::Ground, GameLayer::Hazard, GameLayer::Collectible],
                ),
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                PlayerGlow,
                Sprite {
                    color: Color::srgba(1.0, 0.95, 0.7, 0.3),
                    custom_size: Some(Vec2::splat(140.0)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, -0.5),
            ));
        });
}
