//! Data definitions for the controller RON file.
//!
//! These structs mirror the structure in assets/data/controller.ron and are
//! used for deserialization only; systems read the derived resources.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::movement::{ControllerTuning, GameLayer, ProbeSettings, TandemLayout};

/// Schema version this build understands.
pub const CONTROLLER_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// Controller (controller.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerDef {
    pub schema_version: u32,
    pub movement: MovementDef,
    pub ground_check: GroundCheckDef,
    pub bodies: TandemLayoutDef,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MovementDef {
    pub move_speed: f32,
    pub jump_force: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GroundCheckDef {
    pub ground_layers: Vec<GameLayer>,
    /// 0.05..=2.0
    pub ray_length: f32,
    /// 2..=7
    pub ray_count: u32,
    /// 0.0..=0.3
    pub skin_width: f32,
    /// sRGB
    pub ray_hit_color: [f32; 3],
    pub ray_miss_color: [f32; 3],
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TandemLayoutDef {
    pub top: Option<BodyDef>,
    pub bottom: Option<BodyDef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BodyDef {
    pub position: [f32; 2],
    pub size: [f32; 2],
    /// Negative values flip the body onto the ceiling
    pub gravity_scale: f32,
    pub color: [f32; 3],
}

impl Default for ControllerDef {
    fn default() -> Self {
        Self {
            schema_version: CONTROLLER_SCHEMA_VERSION,
            movement: MovementDef {
                move_speed: 5.0,
                jump_force: 7.0,
            },
            ground_check: GroundCheckDef {
                ground_layers: vec![GameLayer::Ground],
                ray_length: 0.6,
                ray_count: 3,
                skin_width: 0.05,
                ray_hit_color: [0.0, 1.0, 0.0],
                ray_miss_color: [1.0, 0.92, 0.016],
            },
            bodies: TandemLayoutDef {
                top: Some(BodyDef {
                    position: [-2.0, 3.0],
                    size: [1.0, 1.0],
                    gravity_scale: -1.0,
                    color: [0.85, 0.85, 0.95],
                }),
                bottom: Some(BodyDef {
                    position: [-2.0, -3.0],
                    size: [1.0, 1.0],
                    gravity_scale: 1.0,
                    color: [0.95, 0.85, 0.85],
                }),
            },
        }
    }
}

/// Combine layers into a single collision mask.
pub fn layer_mask(layers: &[GameLayer]) -> LayerMask {
    LayerMask(
        layers
            .iter()
            .fold(LayerMask::NONE.0, |bits, layer| bits | layer.to_bits()),
    )
}

impl ControllerDef {
    pub fn tuning(&self) -> ControllerTuning {
        let [hr, hg, hb] = self.ground_check.ray_hit_color;
        let [mr, mg, mb] = self.ground_check.ray_miss_color;

        ControllerTuning {
            move_speed: self.movement.move_speed,
            jump_force: self.movement.jump_force,
            ground_mask: layer_mask(&self.ground_check.ground_layers),
            probe: ProbeSettings {
                ray_length: self.ground_check.ray_length,
                ray_count: self.ground_check.ray_count,
                skin_width: self.ground_check.skin_width,
            },
            ray_hit_color: Color::srgb(hr, hg, hb),
            ray_miss_color: Color::srgb(mr, mg, mb),
        }
    }

    pub fn layout(&self) -> TandemLayout {
        TandemLayout {
            top: self.bodies.top.clone(),
            bottom: self.bodies.bottom.clone(),
        }
    }
}
