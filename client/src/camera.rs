//! First-person mouse look and camera follow.
//!
//! Yaw feeds the player's orientation frame (the movement basis); yaw plus
//! pitch drive the camera. Pitch never leaks into movement.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use movement::{MovementController, OrientationFrame, PlayerSettings};
use std::f32::consts::FRAC_PI_2;

/// Marker for the player's eye camera, carrying the look elevation.
#[derive(Component, Default)]
pub struct PlayerCamera {
    pub pitch: f32,
}

/// Eye offset above the body's reference point.
const EYE_HEIGHT: f32 = 1.0;

pub fn update_look(
    mut mouse_motion: MessageReader<MouseMotion>,
    settings: Res<PlayerSettings>,
    mut frames: Query<&mut OrientationFrame>,
    mut cameras: Query<&mut PlayerCamera>,
) {
    let mut delta = Vec2::ZERO;
    for motion in mouse_motion.read() {
        delta += motion.delta;
    }
    if delta == Vec2::ZERO {
        return;
    }

    for mut frame in frames.iter_mut() {
        frame.yaw -= delta.x * settings.camera_sensitivity;
    }
    for mut camera in cameras.iter_mut() {
        camera.pitch = (camera.pitch - delta.y * settings.camera_sensitivity)
            .clamp(-FRAC_PI_2 + 0.01, FRAC_PI_2 - 0.01);
    }
}

/// Keep the camera at the player's eye point with the current look rotation.
pub fn follow_player(
    players: Query<
        (&Transform, &OrientationFrame),
        (With<MovementController>, Without<PlayerCamera>),
    >,
    mut cameras: Query<(&mut Transform, &PlayerCamera)>,
) {
    let Ok((player_transform, frame)) = players.single() else {
        return;
    };
    let Ok((mut camera_transform, camera)) = cameras.single_mut() else {
        return;
    };
    camera_transform.translation = player_transform.translation + Vec3::Y * EYE_HEIGHT;
    camera_transform.rotation = Quat::from_euler(EulerRot::YXZ, frame.yaw, camera.pitch, 0.0);
}
