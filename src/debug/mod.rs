//! Debug domain: ray-fan gizmos, hotkeys and a test level (dev-tools only).

mod level;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use state::DebugState;

use bevy::prelude::*;

use crate::debug::level::spawn_test_level;
use crate::debug::systems::{draw_ray_fans, handle_debug_hotkeys, toggle_ray_gizmos};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Startup, spawn_test_level)
            .add_systems(Update, (toggle_ray_gizmos, handle_debug_hotkeys))
            .add_systems(
                Update,
                draw_ray_fans.run_if(|state: Res<DebugState>| state.show_rays),
            );
    }
}
