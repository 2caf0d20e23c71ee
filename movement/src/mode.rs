//! Locomotion mode and wall contact types.

use bevy::prelude::*;

/// Exactly one mode at a time; the sliding flag lives next to it on the
/// controller and may combine with `Grounded` or `Airborne`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MoveMode {
    #[default]
    Grounded,
    Airborne,
    Wallrunning,
}

/// Which side of the body the wall probe hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

/// Side-probe hit captured for the current tick only. Never persisted across
/// a tick boundary once wall-run exits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallContact {
    /// Surface normal, pointing away from the wall.
    pub normal: Vec3,
    pub side: WallSide,
}
