//! Content domain: data-driven controller configuration loaded from RON.

mod data;
mod loader;
mod validation;


pub use data::{BodyDef, ControllerDef};
pub use loader::load_controller;
pub use validation::{check_controller, clamp_controller};

use bevy::prelude::*;
use std::path::Path;

/// Directory holding the RON content files.
const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        // Resources must exist before the movement bootstrap runs in Startup
        app.add_systems(PreStartup, load_controller_content);
    }
}

/// Load controller.ron, clamp it and publish the tuning and layout resources.
/// Falls back to built-in defaults when the file is missing or malformed.
fn load_controller_content(mut commands: Commands) {
    let mut def = match load_controller(Path::new(CONTENT_DIR)) {
        Ok(def) => def,
        Err(e) => {
            error!("{}", e);
            warn!("Using default controller configuration");
            ControllerDef::default()
        }
    };

    for warning in clamp_controller(&mut def) {
        warn!("controller.ron: {}", warning);
    }
    for problem in check_controller(&def) {
        warn!("controller.ron: {}", problem);
    }

    let tuning = def.tuning();
    info!(
        "Controller loaded: move_speed={}, jump_force={}, ray_length={}, ray_count={}, skin_width={}",
        tuning.move_speed,
        tuning.jump_force,
        tuning.probe.ray_length,
        tuning.probe.ray_count,
        tuning.probe.skin_width
    );

    commands.insert_resource(tuning);
    commands.insert_resource(def.layout());
}
