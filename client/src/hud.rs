//! Speed readout and crosshair dot.

use bevy::prelude::*;
use bevy_rapier3d::prelude::Velocity;
use movement::{flat_speed, MovementController};

/// Marker for the speed readout text.
#[derive(Component)]
pub struct SpeedReadout;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        SpeedReadout,
        Text::new("0"),
        TextFont {
            font_size: 28.0,
            ..default()
        },
        TextColor(Color::srgba(1.0, 1.0, 1.0, 0.9)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(24.0),
            left: Val::Px(24.0),
            ..default()
        },
    ));

    // Center crosshair dot.
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            Pickable::IGNORE,
        ))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.8)),
            ));
        });
}

/// Show the player's flat-plane speed, truncated to two decimals.
pub fn update_speed_readout(
    players: Query<&Velocity, With<MovementController>>,
    mut readouts: Query<&mut Text, With<SpeedReadout>>,
) {
    let Ok(velocity) = players.single() else {
        return;
    };
    let Ok(mut text) = readouts.single_mut() else {
        return;
    };
    let speed = (flat_speed(velocity.linvel) * 100.0).floor() / 100.0;
    **text = format!("{speed}");
}
