//! Movement domain: ground detection for the tandem pair.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerTuning, GroundState, RayFan, TandemBody, TandemPair, is_grounded};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    tuning: Res<ControllerTuning>,
    pair: Res<TandemPair>,
    mut bodies: Query<(
        Option<&Collider>,
        &Position,
        &Rotation,
        Option<&GravityScale>,
        &TandemBody,
        &mut GroundState,
    )>,
) {
    for entity in pair.iter() {
        let Ok((collider, position, rotation, gravity_scale, body, mut state)) =
            bodies.get_mut(entity)
        else {
            continue;
        };

        let was_on_ground = state.on_ground;

        let gravity_scale = gravity_scale.map_or(1.0, |scale| scale.0);
        let fan = collider.and_then(|collider| {
            RayFan::for_collider(collider, position, rotation, gravity_scale, &tuning.probe)
        });

        // Only the ground mask counts, and a body never supports itself
        let ground_filter =
            SpatialQueryFilter::from_mask(tuning.ground_mask).with_excluded_entities([entity]);

        state.on_ground = is_grounded(fan.as_ref(), |origin, direction, length| {
            spatial_query
                .cast_ray(origin, direction, length, true, &ground_filter)
                .is_some()
        });

        if state.on_ground && !was_on_ground {
            debug!("{:?} landed", body);
        } else if !state.on_ground && was_on_ground {
            debug!("{:?} left ground", body);
        }
    }
}
