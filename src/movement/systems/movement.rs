//! Movement domain: velocity and impulse application.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerTuning, GroundState, MovementInput, TandemBody, TandemPair};

/// New velocity for a body driven at `axis_x`; the vertical component is kept.
pub fn horizontal_velocity(current: Vec2, axis_x: f32, speed: f32) -> Vec2 {
    Vec2::new(axis_x * speed, current.y)
}

/// Impulse pushing a body away from its own gravity.
///
/// Zero when the body feels no gravity.
pub fn jump_impulse(gravity_scale: f32, gravity: Vec2, force: f32) -> Vec2 {
    -(gravity * gravity_scale).normalize_or_zero() * force
}

/// Jump impulse for one body, or `None` if it may not jump right now.
pub fn jump_impulse_for(
    state: &GroundState,
    gravity_scale: f32,
    gravity: Vec2,
    force: f32,
) -> Option<Vec2> {
    if !state.on_ground {
        return None;
    }

    let impulse = jump_impulse(gravity_scale, gravity, force);
    (impulse != Vec2::ZERO).then_some(impulse)
}

pub(crate) fn apply_horizontal_velocity(
    input: Res<MovementInput>,
    tuning: Res<ControllerTuning>,
    pair: Res<TandemPair>,
    mut bodies: Query<&mut LinearVelocity>,
) {
    for entity in pair.iter() {
        let Ok(mut velocity) = bodies.get_mut(entity) else {
            continue;
        };

        velocity.0 = horizontal_velocity(velocity.0, input.axis_x, tuning.move_speed);
    }
}

pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<ControllerTuning>,
    pair: Res<TandemPair>,
    gravity: Res<Gravity>,
    mut bodies: Query<(&GroundState, Option<&GravityScale>, &TandemBody, Forces)>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for entity in pair.iter() {
        let Ok((state, gravity_scale, body, mut forces)) = bodies.get_mut(entity) else {
            continue;
        };

        let gravity_scale = gravity_scale.map_or(1.0, |scale| scale.0);
        let Some(impulse) = jump_impulse_for(state, gravity_scale, gravity.0, tuning.jump_force)
        else {
            continue;
        };

        forces.apply_linear_impulse(impulse);
        debug!("{:?} jumped: impulse={:?}", body, impulse);
    }
}
