//! Single-target grab-and-carry: spring-follow toward a hover point in front
//! of the camera. No state machine; hold to carry, release to drop.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use movement::{GROUND_GROUP, PROP_GROUP};

use crate::camera::PlayerCamera;

/// Marker for props the player may pick up.
#[derive(Component)]
pub struct Grabbable;

/// The currently held body, if any.
#[derive(Resource, Default)]
pub struct Grabbed(pub Option<Entity>);

/// Max reach of the grab ray.
const GRAB_RANGE: f32 = 10.0;
/// How far ahead of the camera a held body hovers.
const HOVER_DISTANCE: f32 = 2.5;
/// Spring gain: velocity = offset * gain.
const FOLLOW_GAIN: f32 = 6.5;
/// Close enough: park the body instead of oscillating around the target.
const SETTLE_RADIUS: f32 = 0.025;

/// Right mouse press grabs the first grabbable body under the crosshair and
/// turns its gravity off; release restores gravity and drops it.
pub fn handle_grab_input(
    mouse: Res<ButtonInput<MouseButton>>,
    rapier: ReadRapierContext,
    cameras: Query<&Transform, With<PlayerCamera>>,
    grabbables: Query<(), With<Grabbable>>,
    mut gravity: Query<&mut GravityScale>,
    mut grabbed: ResMut<Grabbed>,
) {
    if mouse.just_pressed(MouseButton::Right) && grabbed.0.is_none() {
        let Ok(ctx) = rapier.single() else {
            return;
        };
        let Ok(camera) = cameras.single() else {
            return;
        };
        // Level geometry blocks the ray, so props behind walls stay put.
        let filter = QueryFilter::new()
            .groups(CollisionGroups::new(Group::ALL, GROUND_GROUP | PROP_GROUP));
        let origin = camera.translation;
        let dir = camera.forward().as_vec3();
        if let Some((entity, _)) = ctx.cast_ray(origin, dir, GRAB_RANGE, true, filter) {
            if grabbables.get(entity).is_ok() {
                if let Ok(mut scale) = gravity.get_mut(entity) {
                    scale.0 = 0.0;
                }
                grabbed.0 = Some(entity);
                debug!("grabbed {entity:?}");
            }
        }
    }

    if mouse.just_released(MouseButton::Right) {
        if let Some(entity) = grabbed.0.take() {
            if let Ok(mut scale) = gravity.get_mut(entity) {
                scale.0 = 1.0;
            }
        }
    }
}

/// Spring-follow the held body toward the hover point each physics tick.
pub fn hold_grabbed(
    grabbed: Res<Grabbed>,
    cameras: Query<&Transform, With<PlayerCamera>>,
    mut bodies: Query<(&Transform, &mut Velocity), Without<PlayerCamera>>,
) {
    let Some(entity) = grabbed.0 else {
        return;
    };
    let Ok(camera) = cameras.single() else {
        return;
    };
    let Ok((transform, mut velocity)) = bodies.get_mut(entity) else {
        return;
    };

    let target = camera.translation + camera.forward().as_vec3() * HOVER_DISTANCE;
    let offset = target - transform.translation;
    velocity.linvel = if offset.length() < SETTLE_RADIUS {
        Vec3::ZERO
    } else {
        offset * FOLLOW_GAIN
    };
}
