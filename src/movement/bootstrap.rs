//! Movement domain: tandem pair bootstrap from content data.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::BodyDef;
use crate::movement::{GameLayer, GroundState, TandemBody, TandemLayout, TandemPair};

/// Spawn the bodies described by `TandemLayout` and register them in `TandemPair`.
/// A slot without a definition stays empty; the controller then skips it.
pub(crate) fn spawn_tandem_pair(
    mut commands: Commands,
    layout: Res<TandemLayout>,
    mut pair: ResMut<TandemPair>,
) {
    if pair.iter().next().is_some() {
        info!("Tandem pair already exists, skipping spawn");
        return;
    }

    pair.top = layout
        .top
        .as_ref()
        .map(|def| spawn_body(&mut commands, TandemBody::Top, def));
    pair.bottom = layout
        .bottom
        .as_ref()
        .map(|def| spawn_body(&mut commands, TandemBody::Bottom, def));

    if pair.top.is_none() || pair.bottom.is_none() {
        warn!(
            "Tandem layout incomplete: top={}, bottom={}",
            pair.top.is_some(),
            pair.bottom.is_some()
        );
    }
}

fn spawn_body(commands: &mut Commands, body: TandemBody, def: &BodyDef) -> Entity {
    let [x, y] = def.position;
    let [width, height] = def.size;
    let [r, g, b] = def.color;

    info!(
        "Spawning {:?} body at ({}, {}), size {}x{}, gravity_scale={}",
        body, x, y, width, height, def.gravity_scale
    );

    commands
        .spawn((
            // Identity & Movement
            (Name::new(format!("{:?}", body)), body, GroundState::default()),
            // Rendering
            Sprite {
                color: Color::srgb(r, g, b),
                custom_size: Some(Vec2::new(width, height)),
                ..default()
            },
            Transform::from_xyz(x, y, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(width, height),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(def.gravity_scale),
                Friction::new(0.0),
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
            ),
        ))
        .id()
}
