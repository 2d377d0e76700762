//! Movement domain: components and physics layers for the tandem pair.

use avian2d::prelude::*;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, ceilings, platforms)
    Ground,
    /// Tandem bodies
    Player,
}

/// Which slot of the tandem pair a body fills.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TandemBody {
    Top,
    Bottom,
}

/// Grounded flag written once per fixed step by `detect_ground`.
#[derive(Component, Debug, Default)]
pub struct GroundState {
    pub on_ground: bool,
}
