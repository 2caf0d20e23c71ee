//! First-person movement core shared by the demo client and the tests.
//!
//! The controller is a small per-tick state machine (grounded / airborne /
//! wall-running plus an orthogonal sliding flag) layered on a rapier rigid
//! body. All tick logic lives in [`MovementController::step`], a pure function
//! over a sampled [`StepInput`], so the whole machine is unit testable without
//! a physics world. The Bevy system in [`systems`] samples the probes and is
//! the only writer of the body's velocity, damping and gravity scale per tick.

pub mod controller;
pub mod forces;
pub mod intent;
pub mod mode;
pub mod probes;
pub mod settings;
pub mod systems;
pub mod timers;

pub use controller::{JumpKind, MovementController, StepInput, StepOutput};
pub use forces::flat_speed;
pub use intent::{IntentSnapshot, OrientationFrame};
pub use mode::{MoveMode, WallContact, WallSide};
pub use settings::PlayerSettings;
pub use systems::MovementPlugin;
pub use timers::TimerBank;

use bevy_rapier3d::prelude::Group;

/// Player capsule total height in meters.
pub const PLAYER_HEIGHT: f32 = 1.8;
/// Player capsule radius in meters.
pub const PLAYER_RADIUS: f32 = 0.4;

/// Collision group for walkable / wall-runnable level geometry.
pub const GROUND_GROUP: Group = Group::GROUP_1;
/// Collision group for the player body.
pub const PLAYER_GROUP: Group = Group::GROUP_2;
/// Collision group for dynamic props (grabbable crates etc).
pub const PROP_GROUP: Group = Group::GROUP_3;
