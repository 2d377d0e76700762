//! Core domain: camera setup.

use bevy::prelude::*;

/// Screen pixels per world unit. Bodies and rays are authored in metres.
const PIXELS_PER_METER: f32 = 64.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_METER,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
