//! Bevy wiring: the fixed-tick update that samples the probes, steps the
//! controller, and writes the result back to the rapier body.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::controller::{MovementController, StepInput};
use crate::intent::{IntentSnapshot, OrientationFrame};
use crate::probes;
use crate::settings::PlayerSettings;
use crate::GROUND_GROUP;

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, tick_movement);
    }
}

/// One whole simulation tick for every controlled body.
///
/// This system is the only writer of the body's velocity, damping and gravity
/// scale during the tick; everything else (input adapter, camera) only writes
/// the intent snapshot and the orientation frame.
pub fn tick_movement(
    rapier: ReadRapierContext,
    settings: Res<PlayerSettings>,
    time: Res<Time>,
    mut bodies: Query<(
        Entity,
        &Transform,
        &mut IntentSnapshot,
        &OrientationFrame,
        &mut MovementController,
        &mut Velocity,
        &mut Damping,
        &mut GravityScale,
    )>,
) {
    let Ok(ctx) = rapier.single() else {
        return;
    };
    let dt = time.delta_secs();
    if dt <= 0.0 {
        return;
    }

    // Rays may hit level geometry only; props and other bodies are not ground.
    let ground_groups = CollisionGroups::new(Group::ALL, GROUND_GROUP);

    for (entity, transform, mut intent, frame, mut controller, mut velocity, mut damping, mut gravity) in
        bodies.iter_mut()
    {
        let origin = transform.translation;
        let input = StepInput {
            intent: *intent,
            frame: *frame,
            grounded: probes::ground_probe(&ctx, origin, entity, ground_groups),
            wall: probes::wall_probe(
                &ctx,
                origin,
                frame.right(),
                intent.axis.x,
                settings.max_wall_distance,
                entity,
                ground_groups,
            ),
            linvel: velocity.linvel,
            dt,
        };
        // The press edge is consumed by this tick's buffer refresh.
        intent.jump_pressed = false;

        let previous_mode = controller.mode;
        let out = controller.step(&input, &settings);
        if controller.mode != previous_mode {
            debug!("movement mode {:?} -> {:?}", previous_mode, controller.mode);
        }
        if let Some(kind) = out.jumped {
            debug!("jump fired: {:?}", kind);
        }

        velocity.linvel = out.linvel;
        damping.linear_damping = out.linear_damping;
        gravity.0 = out.gravity_scale;
    }
}
