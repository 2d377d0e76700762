//! Core domain: camera and world-scale setup.

mod systems;

use bevy::prelude::*;

use crate::core::systems::setup_camera;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera);
    }
}
