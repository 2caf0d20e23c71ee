//! Demo level: flat ground, a wall-run corridor, grabbable crates, and the
//! player capsule.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use movement::{
    IntentSnapshot, MovementController, OrientationFrame, GROUND_GROUP, PLAYER_GROUP,
    PLAYER_HEIGHT, PLAYER_RADIUS, PROP_GROUP,
};

use crate::camera::PlayerCamera;
use crate::grab::Grabbable;

pub fn setup_level(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.9, 0.4, 0.0)),
    ));

    let ground_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.35, 0.4, 0.35),
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.45, 0.45, 0.55),
        ..default()
    });
    let crate_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.7, 0.5, 0.25),
        ..default()
    });

    // Ground slab.
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(120.0, 1.0, 120.0))),
        MeshMaterial3d(ground_material),
        Transform::from_xyz(0.0, -0.5, 0.0),
        RigidBody::Fixed,
        Collider::cuboid(60.0, 0.5, 60.0),
        CollisionGroups::new(GROUND_GROUP, Group::ALL),
    ));

    // A corridor of tall walls for wall-running, plus a back wall.
    let walls = [
        (Vec3::new(-6.0, 4.0, -20.0), Vec3::new(1.0, 8.0, 24.0)),
        (Vec3::new(6.0, 4.0, -20.0), Vec3::new(1.0, 8.0, 24.0)),
        (Vec3::new(0.0, 4.0, -36.0), Vec3::new(13.0, 8.0, 1.0)),
    ];
    for (pos, size) in walls {
        commands.spawn((
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(pos),
            RigidBody::Fixed,
            Collider::cuboid(size.x * 0.5, size.y * 0.5, size.z * 0.5),
            CollisionGroups::new(GROUND_GROUP, Group::ALL),
        ));
    }

    // Grabbable crates near the spawn.
    for i in 0..3 {
        commands.spawn((
            Grabbable,
            Mesh3d(meshes.add(Cuboid::new(0.6, 0.6, 0.6))),
            MeshMaterial3d(crate_material.clone()),
            Transform::from_xyz(-2.0 + i as f32 * 2.0, 2.0, -6.0),
            RigidBody::Dynamic,
            Collider::cuboid(0.3, 0.3, 0.3),
            CollisionGroups::new(PROP_GROUP, Group::ALL),
            Velocity::default(),
            GravityScale(1.0),
        ));
    }
}

pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        MovementController::default(),
        IntentSnapshot::default(),
        OrientationFrame::default(),
        Transform::from_xyz(0.0, PLAYER_HEIGHT, 4.0),
        RigidBody::Dynamic,
        Collider::capsule_y(PLAYER_HEIGHT * 0.5 - PLAYER_RADIUS, PLAYER_RADIUS),
        CollisionGroups::new(PLAYER_GROUP, Group::ALL),
        LockedAxes::ROTATION_LOCKED,
        Velocity::default(),
        Damping::default(),
        GravityScale(1.0),
        // Horizontal deceleration belongs to the drag model, not friction.
        Friction::coefficient(0.0),
        Ccd::enabled(),
    ));

    commands.spawn((
        Camera3d::default(),
        PlayerCamera::default(),
        Transform::from_xyz(0.0, PLAYER_HEIGHT + 1.0, 4.0),
    ));
}
