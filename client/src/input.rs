//! Keyboard decoding into the core's intent snapshot.
//!
//! The movement core never sees device events; it reads the latest decoded
//! snapshot at the start of its tick. Held state (axis, slide) is re-derived
//! every frame; the jump press edge is latched until the core consumes it.

use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow};
use movement::IntentSnapshot;

/// Lock and hide the cursor for mouse look.
pub fn lock_cursor(mut windows: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    let Ok(mut cursor) = windows.single_mut() else {
        return;
    };
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
}

/// Refresh the intent snapshot from the keyboard.
pub fn update_intent(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut intents: Query<&mut IntentSnapshot>,
) {
    for mut intent in intents.iter_mut() {
        let mut axis = Vec2::ZERO;
        if keyboard.pressed(KeyCode::KeyW) {
            axis.y += 1.0;
        }
        if keyboard.pressed(KeyCode::KeyS) {
            axis.y -= 1.0;
        }
        if keyboard.pressed(KeyCode::KeyD) {
            axis.x += 1.0;
        }
        if keyboard.pressed(KeyCode::KeyA) {
            axis.x -= 1.0;
        }
        intent.axis = axis;
        intent.slide =
            keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
        if keyboard.just_pressed(KeyCode::Space) {
            intent.jump_pressed = true;
        }
    }
}
