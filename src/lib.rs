//! Dino Runner - A single-screen endless runner
//!
//! Core modules:
//! - `sim`: Game-loop state machine (jump physics, obstacles, collisions, scoring)
//! - `schedule`: Named fixed-cadence schedules that drive the simulation
//! - `runner`: Glue between the session, schedules, storage and feedback
//! - `persistence`: Key/value storage backends for the best score
//! - `tuning`: Data-driven game balance

pub mod feedback;
pub mod highscores;
pub mod input;
pub mod persistence;
pub mod runner;
pub mod schedule;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::BestScore;
pub use runner::Runner;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Downward acceleration added to the vertical velocity every physics tick
    pub const GRAVITY: f32 = 0.8;
    /// Upward impulse applied when a jump starts (negative = up)
    pub const JUMP_VELOCITY: f32 = -10.0;

    /// Runner hitbox
    pub const RUNNER_WIDTH: f32 = 20.0;
    pub const RUNNER_HEIGHT: f32 = 20.0;

    /// Obstacle hitbox (cacti and pterodactyls share it)
    pub const OBSTACLE_WIDTH: f32 = 20.0;
    pub const OBSTACLE_HEIGHT: f32 = 20.0;

    /// Obstacle speed at session start (points per obstacle tick)
    pub const INITIAL_SPEED: f32 = 5.0;
    /// Speed gained every time the obstacle wraps
    pub const SPEED_INCREMENT: f32 = 0.05;

    /// Pterodactyls only spawn once the score is above this
    pub const AERIAL_UNLOCK_SCORE: u32 = 10;
    /// A high pterodactyl hits the runner once it rises above this offset
    pub const HIGH_BAND_JUMP_THRESHOLD: f32 = -30.0;
    /// Render altitude of a high pterodactyl
    pub const HIGH_BAND_ALTITUDE: f32 = -40.0;

    /// Visible field (watch screen points)
    pub const FIELD_WIDTH: f32 = 184.0;
    pub const FIELD_HEIGHT: f32 = 224.0;
    /// Ground strip height at the bottom of the field
    pub const GROUND_HEIGHT: f32 = 50.0;

    /// Physics/input tick period (seconds)
    pub const PHYSICS_PERIOD: f64 = 0.02;
    /// Obstacle/score tick period (seconds)
    pub const OBSTACLE_PERIOD: f64 = 0.02;
    /// Grace period before the first obstacle tick (seconds)
    pub const OBSTACLE_DELAY: f64 = 2.0;
    /// Runner leg animation period (seconds)
    pub const RUNNER_ANIM_PERIOD: f64 = 0.1;
    /// Pterodactyl wing animation period (seconds)
    pub const FLYER_ANIM_PERIOD: f64 = 0.25;

    /// Maximum ticks per schedule per frame to prevent spiral of death
    pub const MAX_CATCHUP_TICKS: u32 = 8;
}
