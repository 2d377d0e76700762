//! Movement domain: input sampling for the tandem pair.

use bevy::prelude::*;

use crate::movement::MovementInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    // Raw horizontal axis, opposite keys cancel out
    let mut x: f32 = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.axis_x = x.clamp(-1.0, 1.0);
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
}
