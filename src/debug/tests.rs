//! Debug domain: tests for the reset and gravity hotkeys.

use avian2d::prelude::*;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::systems::handle_debug_hotkeys;
use crate::content::BodyDef;
use crate::movement::{GroundState, TandemBody, TandemLayout, TandemPair};

fn bottom_def() -> BodyDef {
    BodyDef {
        position: [-2.0, -3.0],
        size: [1.0, 1.0],
        gravity_scale: 1.0,
        color: [1.0, 1.0, 1.0],
    }
}

fn setup_world(keys: &[KeyCode]) -> (World, Entity) {
    let mut world = World::new();
    let bottom = world
        .spawn((
            TandemBody::Bottom,
            Position(Vec2::new(4.0, 1.0)),
            LinearVelocity(Vec2::new(3.0, -6.0)),
            GravityScale(-1.0),
            GroundState { on_ground: true },
        ))
        .id();

    let mut keyboard = ButtonInput::<KeyCode>::default();
    for key in keys {
        keyboard.press(*key);
    }

    world.insert_resource(keyboard);
    world.insert_resource(TandemLayout {
        top: None,
        bottom: Some(bottom_def()),
    });
    world.insert_resource(TandemPair {
        top: None,
        bottom: Some(bottom),
    });

    (world, bottom)
}

#[test]
fn test_reset_restores_layout_and_clears_grounded() {
    let (mut world, bottom) = setup_world(&[KeyCode::ControlLeft, KeyCode::KeyR]);

    world.run_system_once(handle_debug_hotkeys).unwrap();

    assert_eq!(world.get::<Position>(bottom).unwrap().0, Vec2::new(-2.0, -3.0));
    assert_eq!(world.get::<LinearVelocity>(bottom).unwrap().0, Vec2::ZERO);
    assert_eq!(world.get::<GravityScale>(bottom).unwrap().0, 1.0);
    assert!(!world.get::<GroundState>(bottom).unwrap().on_ground);
}

#[test]
fn test_reset_requires_ctrl() {
    let (mut world, bottom) = setup_world(&[KeyCode::KeyR]);

    world.run_system_once(handle_debug_hotkeys).unwrap();

    assert_eq!(world.get::<Position>(bottom).unwrap().0, Vec2::new(4.0, 1.0));
    assert!(world.get::<GroundState>(bottom).unwrap().on_ground);
}

#[test]
fn test_gravity_hotkey_inverts_scale() {
    let (mut world, bottom) = setup_world(&[KeyCode::ControlRight, KeyCode::KeyG]);

    world.run_system_once(handle_debug_hotkeys).unwrap();

    assert_eq!(world.get::<GravityScale>(bottom).unwrap().0, 1.0);
}
