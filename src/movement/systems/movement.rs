//! Movement domain: driving the motion controller from the fixed clock.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::combat::{AttackFiredEvent, AttackTuning, ContactDamageEvent};
use crate::movement::{ActionInput, ContactQueue, Facing, MotionController, MovementTuning, Player};
use crate::vitality::{HealthChangedEvent, PlayerDeathEvent, VitalityModel, publish_health_update};

#[allow(clippy::too_many_arguments)]
pub(crate) fn run_motion_tick(
    mut commands: Commands,
    time: Res<Time>,
    mut input: ResMut<ActionInput>,
    tuning: Res<MovementTuning>,
    attack_tuning: Res<AttackTuning>,
    mut query: Query<
        (
            Entity,
            &Transform,
            &mut MotionController,
            &mut VitalityModel,
            &mut ContactQueue,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
    mut health_events: MessageWriter<HealthChangedEvent>,
    mut death_events: MessageWriter<PlayerDeathEvent>,
    mut attack_events: MessageWriter<AttackFiredEvent>,
    mut hit_events: MessageWriter<ContactDamageEvent>,
) {
    let dt = time.delta_secs();

    for (entity, transform, mut controller, mut vitality, mut queue, mut velocity, mut gravity) in
        &mut query
    {
        // Physics integrated gravity since the last step
        controller.velocity = velocity.0;

        let was_grounded = controller.is_grounded();
        let report = controller.tick(
            dt,
            &input,
            queue.0.drain(..),
            transform.translation.truncate(),
            &tuning,
            &attack_tuning,
            &mut vitality,
        );

        velocity.0 = controller.velocity;
        gravity.0 = controller.gravity_scale;

        if report.landed && !was_grounded {
            debug!("Landed: coyote refreshed to {}", tuning.coyote_time);
        }

        for update in &report.health_updates {
            publish_health_update(entity, update, &mut health_events, &mut death_events);
        }

        for hit in report.contact_hits {
            hit_events.write(ContactDamageEvent {
                entity,
                source: hit.source,
                amount: hit.amount,
                label: hit.label,
                invincibility: attack_tuning.invincibility_duration,
            });
        }

        for source in report.spent_sources {
            commands.entity(source).try_despawn();
        }

        if let Some(fired) = report.attack {
            attack_events.write(AttackFiredEvent {
                entity,
                origin: fired.origin,
                direction: fired.direction,
            });
        }
    }

    input.consume_motion_edges();
}

/// Mirror facing onto the sprite. The art faces right.
pub(crate) fn sync_facing(mut query: Query<(&MotionController, &mut Sprite), With<Player>>) {
    for (controller, mut sprite) in &mut query {
        sprite.flip_x = controller.facing == Facing::Left;
    }
}
