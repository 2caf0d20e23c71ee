//! Demo client: windowed first-person sandbox exercising the movement core.
//!
//! Keys: WASD move, mouse look, Space jump, Shift slide, right mouse grab.

mod camera;
mod grab;
mod hud;
mod input;
mod scene;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_rapier3d::prelude::*;
use movement::{MovementPlugin, PlayerSettings};

/// Tuning file, relative to the working directory.
const SETTINGS_PATH: &str = "assets/player_settings.ron";

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Movement Sandbox".to_string(),
                resolution: WindowResolution::new(1280, 720),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RapierPhysicsPlugin::<NoUserData>::default())
        .add_plugins(MovementPlugin)
        .insert_resource(load_settings())
        .init_resource::<grab::Grabbed>()
        .add_systems(
            Startup,
            (
                scene::setup_level,
                scene::spawn_player,
                hud::spawn_hud,
                input::lock_cursor,
            ),
        )
        .add_systems(
            Update,
            (
                input::update_intent,
                camera::update_look,
                camera::follow_player,
            )
                .chain(),
        )
        .add_systems(Update, (grab::handle_grab_input, hud::update_speed_readout))
        .add_systems(FixedUpdate, grab::hold_grabbed)
        .run();
}

/// Load tuning from disk, falling back to defaults if missing or malformed.
fn load_settings() -> PlayerSettings {
    match std::fs::read_to_string(SETTINGS_PATH) {
        Ok(text) => match PlayerSettings::from_ron(&text) {
            Ok(settings) => {
                info!("Loaded player settings from {SETTINGS_PATH}");
                settings
            }
            Err(err) => {
                warn!("Failed to parse {SETTINGS_PATH}: {err}; using defaults");
                PlayerSettings::default()
            }
        },
        Err(err) => {
            warn!("Could not read {SETTINGS_PATH}: {err}; using defaults");
            PlayerSettings::default()
        }
    }
}
