//! Movement tuning, loaded from `assets/player_settings.ron` by the client.

use bevy::prelude::*;
use serde::Deserialize;

/// Tunables for the movement core. Inserted as a resource at startup and
/// read-only from then on.
#[derive(Resource, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PlayerSettings {
    /// Flat-speed ceiling while grounded and not sliding (m/s).
    pub max_ground_velocity: f32,
    /// Flat-speed ceiling while airborne, sliding or wall-running (m/s).
    pub max_air_velocity: f32,
    /// Wish-direction acceleration, mass independent (m/s²).
    pub max_acceleration: f32,
    /// Linear damping while airborne or wall-running.
    pub air_drag: f32,
    /// Linear damping while walking.
    pub ground_drag: f32,
    /// Linear damping while sliding on the ground.
    pub slide_drag: f32,
    /// Fraction of `max_acceleration` available while airborne.
    pub air_control_authority: f32,
    /// Jump acceleration impulse magnitude (applied over one tick).
    pub jump_force: f32,
    /// How long an early jump press is remembered (s).
    pub jump_buffer_time: f32,
    /// Grace window for jumping after leaving support (s).
    pub coyote_time: f32,
    /// Per-tick multiplier on vertical velocity while wall-running.
    pub wallrun_vertical_damping: f32,
    /// Acceleration impulse magnitude of a wall jump.
    pub wallrun_jump_repel_force: f32,
    /// Max reach of the side wall probe (m).
    pub max_wall_distance: f32,
    /// Radians of look per mouse count.
    pub camera_sensitivity: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            max_ground_velocity: 10.0,
            max_air_velocity: 14.0,
            max_acceleration: 60.0,
            air_drag: 0.1,
            ground_drag: 5.0,
            slide_drag: 0.8,
            air_control_authority: 0.35,
            jump_force: 480.0,
            jump_buffer_time: 0.15,
            coyote_time: 0.12,
            wallrun_vertical_damping: 0.9,
            wallrun_jump_repel_force: 640.0,
            max_wall_distance: 1.0,
            camera_sensitivity: 0.0025,
        }
    }
}

impl PlayerSettings {
    /// Parse settings from RON, e.g. the contents of `player_settings.ron`.
    pub fn from_ron(source: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(source)
    }
}
