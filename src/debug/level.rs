//! Debug domain: test level with floor, ceiling and platforms.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::GameLayer;

pub(crate) fn spawn_test_level(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // (name, center, size, colour)
    let pieces = [
        ("Floor", Vec2::new(0.0, -5.0), Vec2::new(16.0, 0.6), ground_color),
        ("Ceiling", Vec2::new(0.0, 5.0), Vec2::new(16.0, 0.6), ground_color),
        ("Left wall", Vec2::new(-8.3, 0.0), Vec2::new(0.6, 10.6), ground_color),
        ("Right wall", Vec2::new(8.3, 0.0), Vec2::new(0.6, 10.6), ground_color),
        // Step up from the floor
        ("Low platform", Vec2::new(2.5, -3.5), Vec2::new(3.0, 0.3), platform_color),
        // Step down from the ceiling
        ("High platform", Vec2::new(-1.0, 3.5), Vec2::new(3.0, 0.3), platform_color),
        // Narrow ledge to exercise the edge rays
        ("Ledge", Vec2::new(5.5, -2.0), Vec2::new(0.8, 0.3), platform_color),
    ];

    for (name, center, size, color) in pieces {
        commands.spawn((
            Name::new(name),
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_xyz(center.x, center.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
        ));
    }

    info!("Spawned test level");
}
