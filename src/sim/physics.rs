//! Jump integration for the runner
//!
//! Vertical offsets are screen-space: 0 is the ground line and negative values
//! are above it. One `advance` is one physics tick; there is no dt scaling.

use serde::{Deserialize, Serialize};

/// Vertical state of the runner
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PhysicsState {
    /// Height above the ground line (always <= 0)
    pub offset: f32,
    /// Vertical velocity in points per tick (negative = rising)
    pub velocity: f32,
    pub airborne: bool,
}

impl PhysicsState {
    /// Resting on the ground
    pub fn grounded() -> Self {
        Self::default()
    }

    /// Begin a jump with the given (negative) impulse
    ///
    /// Returns false and leaves the state untouched if already airborne.
    pub fn start_jump(&mut self, jump_velocity: f32) -> bool {
        if self.airborne {
            return false;
        }
        self.airborne = true;
        self.velocity = jump_velocity;
        true
    }

    /// Integrate one tick (explicit Euler)
    ///
    /// Returns true on the tick the runner lands.
    pub fn advance(&mut self, gravity: f32) -> bool {
        if !self.airborne {
            return false;
        }
        self.offset += self.velocity;
        self.velocity += gravity;
        if self.offset >= 0.0 {
            *self = Self::grounded();
            return true;
        }
        false
    }
}

/// Offset after `ticks` airborne ticks of the discrete integrator
///
/// Sum of `v + k*g` for `k` in `0..ticks`, clamped to the ground.
pub fn jump_offset_at(jump_velocity: f32, gravity: f32, ticks: u32) -> f32 {
    let t = ticks as f32;
    (jump_velocity * t + gravity * t * (t - 1.0) / 2.0).min(0.0)
}

/// Number of physics ticks a jump stays in the air
pub fn airtime_ticks(jump_velocity: f32, gravity: f32) -> u32 {
    let mut state = PhysicsState::grounded();
    state.start_jump(jump_velocity);
    let mut ticks = 0;
    while state.airborne {
        state.advance(gravity);
        ticks += 1;
    }
    ticks
}
