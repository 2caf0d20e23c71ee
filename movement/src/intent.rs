//! Decoded input intent and the yaw-only orientation frame.
//!
//! The input adapter (client crate) writes these; the movement core only ever
//! reads the latest snapshot at the start of its tick. Device events never
//! reach the core: press edges are latched here and held state is re-derived
//! every frame by the adapter.

use bevy::prelude::*;

/// Latest decoded movement intent for one controlled body.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct IntentSnapshot {
    /// (strafe, forward) in [-1, 1]²; zero when no movement key is held.
    pub axis: Vec2,
    /// Slide requested while held.
    pub slide: bool,
    /// Set on the jump press edge; consumed by the core's next tick.
    pub jump_pressed: bool,
}

/// Forward/right basis derived from the camera heading (yaw only). Pitch never
/// leaks into the movement basis.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct OrientationFrame {
    pub yaw: f32,
}

impl OrientationFrame {
    /// Horizontal forward unit vector. In Bevy: +X right, +Y up, -Z forward.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(-self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Horizontal right unit vector.
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, -self.yaw.sin())
    }
}
