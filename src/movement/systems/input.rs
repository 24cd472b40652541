//! Movement domain: input sampling into logical actions.

use bevy::prelude::*;

use crate::movement::ActionInput;

const STICK_DEAD_ZONE: f32 = 0.1;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    mut input: ResMut<ActionInput>,
) {
    let gamepad = gamepads.iter().next();

    // Horizontal axis
    let mut x: f32 = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }
    if let Some(pad) = gamepad {
        let stick = pad.left_stick().x;
        if stick.abs() > STICK_DEAD_ZONE {
            x = stick;
        }
    }
    input.horizontal = x.clamp(-1.0, 1.0);

    // Arrow keys double as the attack aim
    input.left = keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::ArrowRight);
    input.up = keyboard.pressed(KeyCode::ArrowUp);
    input.down = keyboard.pressed(KeyCode::ArrowDown);
    input.aim = gamepad.map(|pad| pad.right_stick());

    let pad_just = |button: GamepadButton| gamepad.is_some_and(|pad| pad.just_pressed(button));
    let pad_held = |button: GamepadButton| gamepad.is_some_and(|pad| pad.pressed(button));

    // Edges latch until the fixed tick consumes them
    input.jump_pressed |= keyboard.just_pressed(KeyCode::Space)
        || keyboard.just_pressed(KeyCode::KeyW)
        || pad_just(GamepadButton::South);
    input.jump_held = keyboard.pressed(KeyCode::Space)
        || keyboard.pressed(KeyCode::KeyW)
        || pad_held(GamepadButton::South);
    input.attack_pressed |= keyboard.just_pressed(KeyCode::KeyJ)
        || keyboard.just_pressed(KeyCode::KeyZ)
        || pad_just(GamepadButton::RightTrigger);
    input.collect_pressed |= keyboard.just_pressed(KeyCode::KeyX) || pad_just(GamepadButton::West);
}
