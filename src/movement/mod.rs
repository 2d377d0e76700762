//! Movement domain: shared-input locomotion and ray-fan ground detection for two bodies.

mod bootstrap;
mod components;
mod probe;
mod resources;
mod systems;


pub use components::{GameLayer, GroundState, TandemBody};
pub use probe::{ProbeSettings, RayFan, is_grounded};
pub use resources::{ControllerTuning, MovementInput, TandemLayout, TandemPair};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_tandem_pair;
use crate::movement::systems::{apply_horizontal_velocity, apply_jump, detect_ground, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerTuning>()
            .init_resource::<MovementInput>()
            .init_resource::<TandemPair>()
            .init_resource::<TandemLayout>()
            .add_systems(Startup, spawn_tandem_pair)
            // Per rendered frame: sample input, then jump with the latest grounded flags
            .add_systems(Update, (read_input, apply_jump).chain())
            // Per physics step: grounded check, then velocity
            .add_systems(
                FixedUpdate,
                (detect_ground, apply_horizontal_velocity).chain(),
            );
    }
}
