//! Range clamps for the controller definition.

use super::data::*;

/// A value that was out of range and has been clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct ClampWarning {
    pub field: &'static str,
    pub value: f32,
    pub clamped: f32,
}

impl std::fmt::Display for ClampWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' = {} is out of range, clamped to {}",
            self.field, self.value, self.clamped
        )
    }
}

pub const RAY_LENGTH_RANGE: (f32, f32) = (0.05, 2.0);
pub const RAY_COUNT_RANGE: (u32, u32) = (2, 7);
pub const SKIN_WIDTH_RANGE: (f32, f32) = (0.0, 0.3);

/// Helper macro for clamping a field in place and recording the change
macro_rules! clamp_field {
    ($warnings:expr, $field:expr, $name:expr, $range:expr) => {
        let value = $field;
        let clamped = value.clamp($range.0, $range.1);
        if clamped != value {
            $warnings.push(ClampWarning {
                field: $name,
                value: value as f32,
                clamped: clamped as f32,
            });
            $field = clamped;
        }
    };
}

/// Like `clamp_field!`, but NaN and infinities are replaced by `$fallback` first
macro_rules! clamp_float_field {
    ($warnings:expr, $field:expr, $name:expr, $range:expr, $fallback:expr) => {
        if !$field.is_finite() {
            $warnings.push(ClampWarning {
                field: $name,
                value: $field,
                clamped: $fallback,
            });
            $field = $fallback;
        }
        clamp_field!($warnings, $field, $name, $range);
    };
}

/// Clamp every ranged field of the definition.
/// Returns one warning per field that changed, empty if all were in range.
pub fn clamp_controller(def: &mut ControllerDef) -> Vec<ClampWarning> {
    let mut warnings = Vec::new();
    let defaults = ControllerDef::default().ground_check;
    let ground = &mut def.ground_check;

    clamp_float_field!(
        warnings,
        ground.ray_length,
        "ray_length",
        RAY_LENGTH_RANGE,
        defaults.ray_length
    );
    clamp_field!(warnings, ground.ray_count, "ray_count", RAY_COUNT_RANGE);
    clamp_float_field!(
        warnings,
        ground.skin_width,
        "skin_width",
        SKIN_WIDTH_RANGE,
        defaults.skin_width
    );

    for channel in ground
        .ray_hit_color
        .iter_mut()
        .chain(ground.ray_miss_color.iter_mut())
    {
        clamp_float_field!(warnings, *channel, "ray_color", (0.0, 1.0), 0.0);
    }

    warnings
}

/// Non-fatal problems that clamping cannot fix.
pub fn check_controller(def: &ControllerDef) -> Vec<String> {
    let mut problems = Vec::new();

    if def.schema_version != CONTROLLER_SCHEMA_VERSION {
        problems.push(format!(
            "schema_version {} does not match expected {}",
            def.schema_version, CONTROLLER_SCHEMA_VERSION
        ));
    }
    if def.ground_check.ground_layers.is_empty() {
        problems.push("ground_layers is empty, no body will ever be grounded".to_string());
    }
    if !def.movement.move_speed.is_finite() || !def.movement.jump_force.is_finite() {
        problems.push("move_speed and jump_force must be finite".to_string());
    }
    for (slot, body) in [("top", &def.bodies.top), ("bottom", &def.bodies.bottom)] {
        match body {
            None => problems.push(format!("bodies.{} is missing, that slot stays empty", slot)),
            Some(body) if body.size[0] <= 0.0 || body.size[1] <= 0.0 => {
                problems.push(format!("bodies.{} has non-positive size {:?}", slot, body.size))
            }
            Some(body) if !body.gravity_scale.is_finite() => problems.push(format!(
                "bodies.{} has non-finite gravity_scale and will never be grounded",
                slot
            )),
            Some(body) if body.gravity_scale == 0.0 => problems.push(format!(
                "bodies.{} has gravity_scale 0 and will never be grounded",
                slot
            )),
            Some(_) => {}
        }
    }

    problems
}
