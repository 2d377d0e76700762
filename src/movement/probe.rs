//! Movement domain: ray-fan geometry for ground detection.
//!
//! A body is grounded when any ray of a small fan, cast from just beyond the
//! face its gravity pulls toward, hits ground within `ray_length`. The
//! geometry here is engine-agnostic; the caller supplies the actual ray cast.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Ray fan parameters shared by detection and debug drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSettings {
    pub ray_length: f32,
    pub ray_count: u32,
    /// Inset from each side of the bounds, also the gap between the near face and the ray origins
    pub skin_width: f32,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            ray_length: 0.6,
            ray_count: 3,
            skin_width: 0.05,
        }
    }
}

/// Direction a body with the given gravity scale falls toward.
///
/// A scale of zero (or NaN/infinite) has no "down", so no fan is cast.
pub fn fan_direction(gravity_scale: f32) -> Option<Dir2> {
    if !gravity_scale.is_finite() || gravity_scale == 0.0 {
        return None;
    }

    Some(if gravity_scale > 0.0 {
        Dir2::NEG_Y
    } else {
        Dir2::Y
    })
}

/// Parallel rays spread across a body's base.
#[derive(Debug, Clone, PartialEq)]
pub struct RayFan {
    pub origins: Vec<Vec2>,
    pub direction: Dir2,
    pub length: f32,
}

impl RayFan {
    /// Build the fan for bounds given as center and half-extents.
    pub fn new(
        center: Vec2,
        half_extents: Vec2,
        gravity_scale: f32,
        settings: &ProbeSettings,
    ) -> Option<Self> {
        let direction = fan_direction(gravity_scale)?;
        let count = settings.ray_count;
        if count == 0 {
            return None;
        }

        let width = (half_extents.x - settings.skin_width).max(0.0) * 2.0;
        let step = if count <= 1 {
            0.0
        } else {
            width / (count - 1) as f32
        };
        let start = center + direction * (half_extents.y + settings.skin_width);

        let origins = (0..count)
            .map(|i| {
                let offset = if count <= 1 {
                    0.0
                } else {
                    i as f32 * step - width * 0.5
                };
                start + Vec2::new(offset, 0.0)
            })
            .collect();

        Some(Self {
            origins,
            direction,
            length: settings.ray_length,
        })
    }

    /// Build the fan from a collider's world-space bounds.
    pub fn for_collider(
        collider: &Collider,
        position: &Position,
        rotation: &Rotation,
        gravity_scale: f32,
        settings: &ProbeSettings,
    ) -> Option<Self> {
        let aabb = collider.aabb(position.0, *rotation);
        let center = (aabb.min + aabb.max) * 0.5;
        let half_extents = (aabb.max - aabb.min) * 0.5;
        Self::new(center, half_extents, gravity_scale, settings)
    }

    /// True as soon as `cast` reports a hit for one of the rays.
    pub fn any_hit(&self, mut cast: impl FnMut(Vec2, Dir2, f32) -> bool) -> bool {
        self.origins
            .iter()
            .any(|&origin| cast(origin, self.direction, self.length))
    }

    /// Start and end point of every ray, for drawing.
    pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        self.origins
            .iter()
            .map(|&origin| (origin, origin + self.direction * self.length))
    }
}

/// Grounded check: no fan (missing collider, zero gravity) is never grounded.
pub fn is_grounded(fan: Option<&RayFan>, cast: impl FnMut(Vec2, Dir2, f32) -> bool) -> bool {
    fan.is_some_and(|fan| fan.any_hit(cast))
}
