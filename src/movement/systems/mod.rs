//! Movement domain: system modules for the tandem pair.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::detect_ground;
pub(crate) use input::read_input;
pub(crate) use movement::{apply_horizontal_velocity, apply_jump};
