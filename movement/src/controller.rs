//! The per-tick movement state machine.
//!
//! [`MovementController::step`] is the single entry point for one simulation
//! tick. It owns the jump timers, the locomotion mode and the wall contact,
//! and produces everything the physics body needs written back (velocity,
//! damping, gravity scale). Keeping it a pure function over a sampled
//! [`StepInput`] keeps the body single-writer per tick and makes the whole
//! machine testable without a rapier world.

use bevy::prelude::*;

use crate::forces;
use crate::intent::{IntentSnapshot, OrientationFrame};
use crate::mode::{MoveMode, WallContact};
use crate::settings::PlayerSettings;
use crate::timers::TimerBank;

/// Everything the controller samples before stepping: the latest intent
/// snapshot, the orientation frame, both probe results and the body's current
/// velocity. Probes are sampled once; level geometry is static within a tick
/// (integration happens after the tick), so the sample stays valid through the
/// wall-run re-check.
#[derive(Clone, Copy, Debug)]
pub struct StepInput {
    pub intent: IntentSnapshot,
    pub frame: OrientationFrame,
    /// Ground probe result for this tick.
    pub grounded: bool,
    /// Side probe result for this tick, already side-matched to the lateral
    /// intent sign by the caller (zero strafe means no probe was cast).
    pub wall: Option<WallContact>,
    pub linvel: Vec3,
    pub dt: f32,
}

/// What gets written back to the body after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepOutput {
    pub linvel: Vec3,
    pub linear_damping: f32,
    /// 0.0 while wall-running, 1.0 otherwise.
    pub gravity_scale: f32,
    pub jumped: Option<JumpKind>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpKind {
    Normal,
    WallJump,
}

/// First-person locomotion state: mode, sliding flag, jump timers and the
/// wall contact for the current tick.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct MovementController {
    pub mode: MoveMode,
    pub sliding: bool,
    pub timers: TimerBank,
    /// Valid only for the tick it was captured on.
    pub wall: Option<WallContact>,
}

impl MovementController {
    pub fn is_grounded(&self) -> bool {
        self.mode == MoveMode::Grounded
    }

    pub fn is_wallrunning(&self) -> bool {
        self.mode == MoveMode::Wallrunning
    }

    pub fn is_sliding(&self) -> bool {
        self.sliding
    }

    /// Advance one simulation tick.
    ///
    /// The pipeline order is a contract (see the module tests): timers →
    /// mode resolve → force/drag → wall-run re-check → jump arbitration →
    /// flat clamp. The clamp runs exactly once per tick.
    pub fn step(&mut self, input: &StepInput, settings: &PlayerSettings) -> StepOutput {
        let mut linvel = input.linvel;
        let mut jumped = None;

        // Timers first, so refreshes later this tick win over the decrement.
        self.timers.decrement(input.dt);
        if input.intent.jump_pressed {
            self.timers.refresh_jump_buffer(settings.jump_buffer_time);
        }

        self.sliding = input.intent.slide;
        self.resolve_mode(input, settings);

        // Drag + directional acceleration for the resolved mode.
        let drag = forces::select_drag(self.mode, self.sliding, settings);
        match self.mode {
            MoveMode::Wallrunning => {
                if let Some(wall) = self.wall {
                    linvel.y *= settings.wallrun_vertical_damping;
                    if let Some(tangent) = forces::wall_tangent(wall.normal, input.frame.forward()) {
                        // Forward input only; no lateral control on the wall.
                        let accel = tangent * settings.max_acceleration * input.intent.axis.y;
                        linvel += accel * input.dt;
                    }
                }
            }
            MoveMode::Grounded | MoveMode::Airborne => {
                let authority = if self.mode == MoveMode::Grounded {
                    1.0
                } else {
                    settings.air_control_authority
                };
                let wish = forces::wish_direction(input.intent.axis, &input.frame);
                linvel += wish * settings.max_acceleration * authority * input.dt;
            }
        }

        // Wall-run entry/exit re-checked now that the force pass has settled
        // the velocity for this tick.
        self.resolve_wallrun(input);

        // Jump arbitration: both windows must be open; firing closes both.
        if self.timers.both_active() {
            let (kind, impulse) = self.jump_impulse(input, settings);
            linvel += impulse * input.dt;
            self.timers.consume_both();
            jumped = Some(kind);
        }

        // Soft flat-speed cap, ceiling picked by the current mode.
        let ceiling = forces::clamp_ceiling(self.mode, self.sliding, settings);
        linvel = forces::soft_clamp_flat(linvel, ceiling);

        StepOutput {
            linvel,
            linear_damping: drag,
            gravity_scale: if self.mode == MoveMode::Wallrunning { 0.0 } else { 1.0 },
            jumped,
        }
    }

    /// Fixed-order mode transitions. Ground support overrides everything;
    /// both ground and wall count as support for the coyote refresh.
    fn resolve_mode(&mut self, input: &StepInput, settings: &PlayerSettings) {
        if input.grounded {
            self.mode = MoveMode::Grounded;
            self.wall = None;
        } else {
            self.resolve_wallrun(input);
            if self.mode != MoveMode::Wallrunning {
                self.mode = MoveMode::Airborne;
                self.wall = None;
            }
        }

        if matches!(self.mode, MoveMode::Grounded | MoveMode::Wallrunning) {
            self.timers.refresh_coyote(settings.coyote_time);
        }
    }

    /// Wall-run entry and exit. Entry needs: airborne, not sliding, lateral
    /// input, and a matching-side wall hit in range. The condition is
    /// re-evaluated every tick, so exit is immediate rather than latched.
    fn resolve_wallrun(&mut self, input: &StepInput) {
        let entry = !input.grounded
            && !self.sliding
            && input.intent.axis.x != 0.0
            && input.wall.is_some();

        if entry {
            self.wall = input.wall;
            self.mode = MoveMode::Wallrunning;
        } else if self.mode == MoveMode::Wallrunning {
            self.mode = if input.grounded {
                MoveMode::Grounded
            } else {
                MoveMode::Airborne
            };
            self.wall = None;
        }
    }

    /// Acceleration impulse for the firing jump, per mode. The wall jump
    /// pushes off the wall, up and through the current forward at once.
    fn jump_impulse(&self, input: &StepInput, settings: &PlayerSettings) -> (JumpKind, Vec3) {
        match (self.mode, self.wall) {
            (MoveMode::Wallrunning, Some(wall)) => {
                let dir = (wall.normal + Vec3::Y + input.frame.forward()).normalize_or_zero();
                (JumpKind::WallJump, dir * settings.wallrun_jump_repel_force)
            }
            _ => (JumpKind::Normal, Vec3::Y * settings.jump_force),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::WallSide;

    const DT: f32 = 1.0 / 64.0;

    fn settings() -> PlayerSettings {
        PlayerSettings::default()
    }

    fn input(grounded: bool) -> StepInput {
        StepInput {
            intent: IntentSnapshot::default(),
            frame: OrientationFrame::default(),
            grounded,
            wall: None,
            linvel: Vec3::ZERO,
            dt: DT,
        }
    }

    fn right_wall() -> WallContact {
        // Wall on the right of a body facing -Z; normal points back at it.
        WallContact {
            normal: Vec3::NEG_X,
            side: WallSide::Right,
        }
    }

    #[test]
    fn test_never_grounded_without_probe_hit() {
        let s = settings();
        let mut controller = MovementController::default();
        for _ in 0..20 {
            controller.step(&input(false), &s);
            assert_ne!(controller.mode, MoveMode::Grounded);
        }
    }

    #[test]
    fn test_coyote_refreshes_on_support_and_decays_otherwise() {
        let s = settings();
        let mut controller = MovementController::default();

        controller.step(&input(true), &s);
        assert_eq!(controller.timers.coyote, s.coyote_time);

        let before = controller.timers.coyote;
        controller.step(&input(false), &s);
        assert!(controller.timers.coyote < before);

        // Wall-running counts as support too.
        let mut on_wall = input(false);
        on_wall.intent.axis.x = 1.0;
        on_wall.wall = Some(right_wall());
        controller.step(&on_wall, &s);
        assert_eq!(controller.mode, MoveMode::Wallrunning);
        assert_eq!(controller.timers.coyote, s.coyote_time);
    }

    #[test]
    fn test_jump_fires_only_with_both_timers_and_zeroes_them() {
        let s = settings();

        // Only the buffer active: no fire.
        let mut controller = MovementController {
            mode: MoveMode::Airborne,
            timers: TimerBank {
                coyote: -0.2,
                jump_buffer: 0.2,
            },
            ..Default::default()
        };
        let out = controller.step(&input(false), &s);
        assert_eq!(out.jumped, None);

        // Only coyote active: no fire either.
        controller.timers = TimerBank {
            coyote: 0.1,
            jump_buffer: 0.0,
        };
        let out = controller.step(&input(false), &s);
        assert_eq!(out.jumped, None);

        // Both active: fires once and consumes both.
        controller.timers = TimerBank {
            coyote: 0.1,
            jump_buffer: 0.1,
        };
        let out = controller.step(&input(false), &s);
        assert_eq!(out.jumped, Some(JumpKind::Normal));
        assert_eq!(controller.timers.coyote, 0.0);
        assert_eq!(controller.timers.jump_buffer, 0.0);

        // And does not re-fire on the next tick.
        let out = controller.step(&input(false), &s);
        assert_eq!(out.jumped, None);
    }

    #[test]
    fn test_wall_entry_refused_without_lateral_intent() {
        let s = settings();
        let mut controller = MovementController {
            mode: MoveMode::Airborne,
            ..Default::default()
        };
        // A valid wall in range, but strafe is exactly zero.
        let mut step = input(false);
        step.wall = Some(right_wall());
        step.intent.axis = Vec2::new(0.0, 1.0);
        controller.step(&step, &s);
        assert_eq!(controller.mode, MoveMode::Airborne);
        assert_eq!(controller.wall, None);
    }

    #[test]
    fn test_wall_entry_refused_while_sliding() {
        let s = settings();
        let mut controller = MovementController {
            mode: MoveMode::Airborne,
            ..Default::default()
        };
        let mut step = input(false);
        step.wall = Some(right_wall());
        step.intent.axis = Vec2::new(1.0, 0.0);
        step.intent.slide = true;
        controller.step(&step, &s);
        assert_eq!(controller.mode, MoveMode::Airborne);
    }

    #[test]
    fn test_clamp_applied_exactly_once_per_tick() {
        let s = settings();
        let mut controller = MovementController::default();
        // Flat speed 20 against the ground ceiling of 10: a single 50% blend
        // leaves 15, a second application would leave 12.5.
        let mut step = input(true);
        step.linvel = Vec3::new(20.0, 0.0, 0.0);
        let out = controller.step(&step, &s);
        assert!((out.linvel.x - 15.0).abs() < 1e-4);
    }

    #[test]
    fn test_scenario_grounded_forward_acceleration() {
        let s = settings();
        let mut controller = MovementController::default();
        let mut step = input(true);
        step.intent.axis = Vec2::new(0.0, 1.0);

        let out = controller.step(&step, &s);
        assert_eq!(controller.mode, MoveMode::Grounded);
        assert_eq!(out.linear_damping, s.ground_drag);
        // Full authority along forward (-Z at zero yaw), below the ceiling so
        // the clamp leaves it alone.
        let expected = -s.max_acceleration * DT;
        assert!((out.linvel.z - expected).abs() < 1e-4);
        assert_eq!(out.linvel.x, 0.0);
    }

    #[test]
    fn test_scenario_buffered_jump_in_coyote_window() {
        let s = settings();
        let mut controller = MovementController {
            mode: MoveMode::Airborne,
            timers: TimerBank {
                coyote: 0.05,
                jump_buffer: 0.2,
            },
            ..Default::default()
        };
        let out = controller.step(&input(false), &s);
        assert_eq!(out.jumped, Some(JumpKind::Normal));
        assert!((out.linvel.y - s.jump_force * DT).abs() < 1e-4);
        assert_eq!(controller.timers.coyote, 0.0);
        assert_eq!(controller.timers.jump_buffer, 0.0);
    }

    #[test]
    fn test_scenario_wall_run_entry() {
        let s = settings();
        let mut controller = MovementController {
            mode: MoveMode::Airborne,
            ..Default::default()
        };
        let mut step = input(false);
        step.intent.axis = Vec2::new(1.0, 1.0);
        step.wall = Some(right_wall());
        step.linvel = Vec3::new(0.0, -4.0, 0.0);

        let out = controller.step(&step, &s);
        assert_eq!(controller.mode, MoveMode::Wallrunning);
        assert_eq!(controller.wall, Some(right_wall()));
        assert_eq!(out.gravity_scale, 0.0);
        assert_eq!(out.linear_damping, s.air_drag);
        // Vertical velocity damped by the configured factor.
        assert!((out.linvel.y - (-4.0 * s.wallrun_vertical_damping)).abs() < 1e-4);
        // Accelerated along the wall tangent (-Z for a right wall, facing -Z).
        assert!(out.linvel.z < 0.0);
        assert_eq!(out.linvel.x, 0.0);
    }

    #[test]
    fn test_scenario_wall_run_exit_restores_gravity() {
        let s = settings();
        let mut controller = MovementController {
            mode: MoveMode::Airborne,
            ..Default::default()
        };
        let mut on_wall = input(false);
        on_wall.intent.axis = Vec2::new(1.0, 1.0);
        on_wall.wall = Some(right_wall());
        controller.step(&on_wall, &s);
        assert_eq!(controller.mode, MoveMode::Wallrunning);

        // Lateral intent drops to zero next tick: exit, gravity back on, and
        // the wall contact is gone.
        let mut off_wall = input(false);
        off_wall.intent.axis = Vec2::new(0.0, 1.0);
        off_wall.wall = Some(right_wall());
        let out = controller.step(&off_wall, &s);
        assert_eq!(controller.mode, MoveMode::Airborne);
        assert_eq!(out.gravity_scale, 1.0);
        assert_eq!(controller.wall, None);

        // The prior wall-run tick refreshed coyote, so a buffered press still
        // gets an ordinary (not wall) jump.
        assert!(controller.timers.coyote > 0.0);
        let mut pressed = input(false);
        pressed.intent.jump_pressed = true;
        let out = controller.step(&pressed, &s);
        assert_eq!(out.jumped, Some(JumpKind::Normal));
    }

    #[test]
    fn test_scenario_sliding_uses_air_ceiling_and_slide_drag() {
        let s = settings();
        let mut controller = MovementController::default();
        // Grounded and sliding, over the air ceiling (14) but checked against
        // it rather than the ground ceiling: 20 blends halfway to 14 -> 17.
        let mut step = input(true);
        step.intent.slide = true;
        step.linvel = Vec3::new(20.0, 0.0, 0.0);

        let out = controller.step(&step, &s);
        assert_eq!(controller.mode, MoveMode::Grounded);
        assert!(controller.sliding);
        assert_eq!(out.linear_damping, s.slide_drag);
        assert!((out.linvel.x - 17.0).abs() < 1e-4);
    }

    #[test]
    fn test_wall_jump_pushes_off_wall_up_and_forward() {
        let s = settings();
        let mut controller = MovementController {
            mode: MoveMode::Airborne,
            ..Default::default()
        };
        let mut step = input(false);
        step.intent.axis = Vec2::new(1.0, 0.0);
        step.intent.jump_pressed = true;
        step.wall = Some(right_wall());

        let out = controller.step(&step, &s);
        assert_eq!(out.jumped, Some(JumpKind::WallJump));
        let dir = (Vec3::NEG_X + Vec3::Y + Vec3::NEG_Z).normalize();
        let expected = dir * s.wallrun_jump_repel_force * DT;
        assert!((out.linvel - expected).length() < 1e-3);
    }

    #[test]
    fn test_ground_probe_overrides_wall_run() {
        let s = settings();
        let mut controller = MovementController {
            mode: MoveMode::Airborne,
            ..Default::default()
        };
        let mut on_wall = input(false);
        on_wall.intent.axis = Vec2::new(1.0, 1.0);
        on_wall.wall = Some(right_wall());
        controller.step(&on_wall, &s);
        assert_eq!(controller.mode, MoveMode::Wallrunning);

        // Ground support wins over the still-valid wall.
        let mut landed = on_wall;
        landed.grounded = true;
        let out = controller.step(&landed, &s);
        assert_eq!(controller.mode, MoveMode::Grounded);
        assert_eq!(out.gravity_scale, 1.0);
        assert_eq!(controller.wall, None);
    }

    #[test]
    fn test_press_edge_refreshes_buffer_non_additively() {
        let s = settings();
        let mut controller = MovementController {
            mode: MoveMode::Airborne,
            timers: TimerBank {
                coyote: -1.0,
                jump_buffer: 0.09,
            },
            ..Default::default()
        };
        let mut pressed = input(false);
        pressed.intent.jump_pressed = true;
        controller.step(&pressed, &s);
        // Reset to the configured window, not 0.09 + window.
        assert_eq!(controller.timers.jump_buffer, s.jump_buffer_time);
    }
}
