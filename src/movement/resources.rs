//! Movement domain: tuning, input and pair resources.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::BodyDef;
use crate::movement::{GameLayer, ProbeSettings};

#[derive(Resource, Debug, Clone)]
pub struct ControllerTuning {
    /// Horizontal speed at full input deflection
    pub move_speed: f32,
    /// Magnitude of the jump impulse
    pub jump_force: f32,
    /// Layers the ground rays can hit
    pub ground_mask: LayerMask,
    pub probe: ProbeSettings,
    pub ray_hit_color: Color,
    pub ray_miss_color: Color,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_force: 7.0,
            ground_mask: LayerMask::from(GameLayer::Ground),
            probe: ProbeSettings::default(),
            ray_hit_color: Color::srgb(0.0, 1.0, 0.0),
            ray_miss_color: Color::srgb(1.0, 0.92, 0.016),
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1]
    pub axis_x: f32,
    pub jump_just_pressed: bool,
}

/// The two bodies driven by the shared input. Either slot may be empty.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct TandemPair {
    pub top: Option<Entity>,
    pub bottom: Option<Entity>,
}

impl TandemPair {
    /// Entities currently assigned, top first.
    pub fn iter(&self) -> impl Iterator<Item = Entity> {
        self.top.into_iter().chain(self.bottom)
    }
}

/// Spawn layout for the pair, filled from content at startup.
#[derive(Resource, Debug, Clone, Default)]
pub struct TandemLayout {
    pub top: Option<BodyDef>,
    pub bottom: Option<BodyDef>,
}
