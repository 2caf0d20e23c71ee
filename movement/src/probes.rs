//! Ray-cast probes against the physics world.
//!
//! Both probes are stateless queries, sampled once per tick by the movement
//! system. They return an absence value on miss; there is no failure path.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::mode::{WallContact, WallSide};

/// How close the downward hit must be for the body to count as supported.
/// Slightly over the capsule half-height so shallow steps still register; a
/// distant floor further down the ray is not ground.
pub const GROUND_PROXIMITY: f32 = 1.01;

/// Downward probe from the body's reference point against level geometry.
pub fn ground_probe(
    ctx: &RapierContext,
    origin: Vec3,
    body: Entity,
    ground_groups: CollisionGroups,
) -> bool {
    let filter = QueryFilter::new()
        .exclude_rigid_body(body)
        .groups(ground_groups);
    match ctx.cast_ray(origin, -Vec3::Y, f32::MAX, true, filter) {
        Some((_, distance)) => distance <= GROUND_PROXIMITY,
        None => false,
    }
}

/// Side probe on the side matching the lateral intent sign. Zero strafe means
/// no probe is cast, and therefore no wall-run this tick.
pub fn wall_probe(
    ctx: &RapierContext,
    origin: Vec3,
    right: Vec3,
    strafe: f32,
    max_distance: f32,
    body: Entity,
    ground_groups: CollisionGroups,
) -> Option<WallContact> {
    let side = probe_side(strafe)?;
    let dir = match side {
        WallSide::Right => right,
        WallSide::Left => -right,
    };
    let filter = QueryFilter::new()
        .exclude_rigid_body(body)
        .groups(ground_groups);
    let (_, hit) = ctx.cast_ray_and_get_normal(origin, dir, max_distance, true, filter)?;
    Some(WallContact {
        normal: hit.normal,
        side,
    })
}

/// Positive strafe probes the right side, negative the left, zero nothing.
pub fn probe_side(strafe: f32) -> Option<WallSide> {
    if strafe > 0.0 {
        Some(WallSide::Right)
    } else if strafe < 0.0 {
        Some(WallSide::Left)
    } else {
        None
    }
}
