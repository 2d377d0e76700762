//! Debug domain: state for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether ground-check ray fans are drawn
    pub show_rays: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_rays: true }
    }
}
