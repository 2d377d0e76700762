//! Debug domain: ray-fan gizmos and runtime tweaks.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::debug::state::DebugState;
use crate::movement::{ControllerTuning, GroundState, RayFan, TandemBody, TandemLayout, TandemPair};

/// Draw each body's ground-check rays, coloured by its last grounded result.
pub(crate) fn draw_ray_fans(
    mut gizmos: Gizmos,
    tuning: Res<ControllerTuning>,
    pair: Res<TandemPair>,
    bodies: Query<(
        Option<&Collider>,
        &Position,
        &Rotation,
        Option<&GravityScale>,
        &GroundState,
    )>,
) {
    for entity in pair.iter() {
        let Ok((Some(collider), position, rotation, gravity_scale, state)) = bodies.get(entity)
        else {
            continue;
        };

        let gravity_scale = gravity_scale.map_or(1.0, |scale| scale.0);
        let Some(fan) =
            RayFan::for_collider(collider, position, rotation, gravity_scale, &tuning.probe)
        else {
            continue;
        };

        let color = if state.on_ground {
            tuning.ray_hit_color
        } else {
            tuning.ray_miss_color
        };

        for (start, end) in fan.segments() {
            gizmos.line_2d(start, end, color);
        }
    }
}

/// F3 toggles ray drawing
pub(crate) fn toggle_ray_gizmos(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.show_rays = !debug_state.show_rays;
        info!("[DEBUG] Ray gizmos {}", if debug_state.show_rays { "ON" } else { "OFF" });
    }
}

/// Ctrl+R: put both bodies back at their layout position.
/// Ctrl+G: invert both bodies' gravity.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    layout: Res<TandemLayout>,
    pair: Res<TandemPair>,
    mut bodies: Query<(
        &TandemBody,
        &mut Position,
        &mut LinearVelocity,
        &mut GravityScale,
        &mut GroundState,
    )>,
) {
    let ctrl = keyboard.pressed(KeyCode::ControlLeft) || keyboard.pressed(KeyCode::ControlRight);
    if !ctrl {
        return;
    }

    if keyboard.just_pressed(KeyCode::KeyR) {
        for entity in pair.iter() {
            let Ok((body, mut position, mut velocity, mut gravity_scale, mut state)) =
                bodies.get_mut(entity)
            else {
                continue;
            };
            let def = match body {
                TandemBody::Top => layout.top.as_ref(),
                TandemBody::Bottom => layout.bottom.as_ref(),
            };
            let Some(def) = def else {
                continue;
            };

            position.0 = Vec2::from(def.position);
            velocity.0 = Vec2::ZERO;
            gravity_scale.0 = def.gravity_scale;
            // Stale until the next fixed step otherwise
            state.on_ground = false;
        }
        info!("[DEBUG] Tandem pair reset");
    }

    if keyboard.just_pressed(KeyCode::KeyG) {
        for entity in pair.iter() {
            if let Ok((body, _, _, mut gravity_scale, _)) = bodies.get_mut(entity) {
                gravity_scale.0 = -gravity_scale.0;
                info!("[DEBUG] {:?} gravity_scale now {}", body, gravity_scale.0);
            }
        }
    }
}
