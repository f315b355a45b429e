//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads comes from a [`Tuning`]. The
//! defaults reproduce the classic watch game; a JSON override may replace any
//! subset of fields.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Physics ===
    pub gravity: f32,
    pub jump_velocity: f32,

    // === Hitboxes ===
    pub runner_width: f32,
    pub runner_height: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,

    // === Difficulty ===
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub aerial_unlock_score: u32,
    pub high_band_jump_threshold: f32,
    pub high_band_altitude: f32,

    // === Field ===
    pub field_width: f32,
    pub field_height: f32,
    pub ground_height: f32,

    // === Schedules (seconds) ===
    pub physics_period: f64,
    pub obstacle_period: f64,
    pub obstacle_delay: f64,
    pub runner_anim_period: f64,
    pub flyer_anim_period: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,

            runner_width: RUNNER_WIDTH,
            runner_height: RUNNER_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,

            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            aerial_unlock_score: AERIAL_UNLOCK_SCORE,
            high_band_jump_threshold: HIGH_BAND_JUMP_THRESHOLD,
            high_band_altitude: HIGH_BAND_ALTITUDE,

            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ground_height: GROUND_HEIGHT,

            physics_period: PHYSICS_PERIOD,
            obstacle_period: OBSTACLE_PERIOD,
            obstacle_delay: OBSTACLE_DELAY,
            runner_anim_period: RUNNER_ANIM_PERIOD,
            flyer_anim_period: FLYER_ANIM_PERIOD,
        }
    }
}

impl Tuning {
    /// Obstacles (and scenery) respawn here
    #[inline]
    pub fn spawn_x(&self) -> f32 {
        self.field_width
    }

    /// Anything left of this wraps back to [`Self::spawn_x`]
    #[inline]
    pub fn wrap_x(&self) -> f32 {
        -self.field_width / 2.0
    }

    /// Distance between the runner's lane and the obstacle coordinate origin
    #[inline]
    pub fn lane_offset(&self) -> f32 {
        self.field_width / 4.0
    }

    /// Horizontal gap below which the runner and the obstacle touch
    /// (sum of half widths, same for every obstacle kind)
    #[inline]
    pub fn collision_threshold(&self) -> f32 {
        (self.runner_width + self.obstacle_width) / 2.0
    }

    /// Check that the values describe a playable game
    pub fn validate(&self) -> Result<(), String> {
        if self.gravity <= 0.0 {
            return Err(format!("gravity must be positive, got {}", self.gravity));
        }
        if self.jump_velocity >= 0.0 {
            return Err(format!(
                "jump_velocity must be negative (upward), got {}",
                self.jump_velocity
            ));
        }
        let sizes = [
            ("runner_width", self.runner_width),
            ("runner_height", self.runner_height),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("initial_speed", self.initial_speed),
            ("speed_increment", self.speed_increment),
        ];
        for (name, value) in sizes {
            if value <= 0.0 {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        let periods = [
            ("physics_period", self.physics_period),
            ("obstacle_period", self.obstacle_period),
            ("runner_anim_period", self.runner_anim_period),
            ("flyer_anim_period", self.flyer_anim_period),
        ];
        for (name, value) in periods {
            if value <= 0.0 {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        if self.obstacle_delay < 0.0 {
            return Err(format!(
                "obstacle_delay must not be negative, got {}",
                self.obstacle_delay
            ));
        }
        Ok(())
    }
}
