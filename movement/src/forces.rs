//! Per-mode force, drag and velocity-clamp policy.
//!
//! These are pure helpers; the controller composes them once per tick.

use bevy::prelude::*;

use crate::intent::OrientationFrame;
use crate::mode::MoveMode;
use crate::settings::PlayerSettings;

/// Linear damping for the resolved mode. Sliding only substitutes drag while
/// grounded; sliding in the air must not re-enable ground drag.
pub fn select_drag(mode: MoveMode, sliding: bool, settings: &PlayerSettings) -> f32 {
    match (mode, sliding) {
        (MoveMode::Grounded, false) => settings.ground_drag,
        (MoveMode::Grounded, true) => settings.slide_drag,
        _ => settings.air_drag,
    }
}

/// Flat-speed ceiling for the resolved mode. Sliding overrides the ground
/// ceiling selection even while grounded.
pub fn clamp_ceiling(mode: MoveMode, sliding: bool, settings: &PlayerSettings) -> f32 {
    if mode == MoveMode::Grounded && !sliding {
        settings.max_ground_velocity
    } else {
        settings.max_air_velocity
    }
}

/// Wish direction from the movement axis and the yaw frame. Zero when there is
/// no input (skips normalization rather than dividing by zero).
pub fn wish_direction(axis: Vec2, frame: &OrientationFrame) -> Vec3 {
    (frame.forward() * axis.y + frame.right() * axis.x).normalize_or_zero()
}

/// Wall tangent along which wall-run acceleration is applied: the horizontal
/// tangent of the wall plane, signed to best align with current forward.
///
/// Degenerate for a horizontal "wall" normal; a valid wall never produces one,
/// but the guard keeps us from normalizing a zero vector if the probe does.
pub fn wall_tangent(normal: Vec3, forward: Vec3) -> Option<Vec3> {
    let tangent = normal.cross(Vec3::Y).try_normalize()?;
    if tangent.dot(forward) >= 0.0 {
        Some(tangent)
    } else {
        Some(-tangent)
    }
}

/// Soft speed cap: when flat speed exceeds the ceiling, blend the flat
/// velocity halfway toward its ceiling-scaled value. The vertical component is
/// untouched. Deliberately not a hard clamp: overshoot decays over a few ticks
/// instead of snapping. Invoked once per tick, after the jump check.
pub fn soft_clamp_flat(linvel: Vec3, ceiling: f32) -> Vec3 {
    let flat = Vec3::new(linvel.x, 0.0, linvel.z);
    let speed = flat.length();
    if speed <= ceiling {
        return linvel;
    }
    let blended = flat.lerp(flat * (ceiling / speed), 0.5);
    Vec3::new(blended.x, linvel.y, blended.z)
}

/// Flat-plane speed of a velocity (vertical component excluded). Exposed for
/// UI consumers like the speed readout.
pub fn flat_speed(linvel: Vec3) -> f32 {
    Vec3::new(linvel.x, 0.0, linvel.z).length()
}
