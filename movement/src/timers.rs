//! Jump permissiveness timers: coyote grace + jump input buffer.

/// Two independent countdowns. "Active" means strictly positive; decrement has
/// no floor, so a stale timer just drifts negative until refreshed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TimerBank {
    pub coyote: f32,
    pub jump_buffer: f32,
}

impl TimerBank {
    /// Subtract elapsed tick time from both timers. Called exactly once per
    /// simulation tick by the owning controller, never from an ambient
    /// per-frame callback.
    pub fn decrement(&mut self, dt: f32) {
        self.coyote -= dt;
        self.jump_buffer -= dt;
    }

    /// Overwrite, never extend: a late re-trigger resets the window instead of
    /// stacking on top of the remaining time.
    pub fn refresh_coyote(&mut self, value: f32) {
        self.coyote = value;
    }

    pub fn refresh_jump_buffer(&mut self, value: f32) {
        self.jump_buffer = value;
    }

    /// A jump consumed both windows; no double-fire within one buffer window.
    pub fn consume_both(&mut self) {
        self.coyote = 0.0;
        self.jump_buffer = 0.0;
    }

    pub fn both_active(&self) -> bool {
        self.coyote > 0.0 && self.jump_buffer > 0.0
    }
}
