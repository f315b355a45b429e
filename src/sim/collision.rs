//! Runner vs. obstacle collision test
//!
//! Horizontal test: the gap between the runner's lane and the obstacle must be
//! below the sum of their half widths. The same threshold is used for cacti and
//! pterodactyls.
//!
//! Vertical test depends on the obstacle:
//! - cactus and low pterodactyl: hit unless the runner has cleared its own height
//! - high pterodactyl: hit only once the runner rises past the jump threshold

use super::obstacle::{Band, ObstacleKind, ObstacleState};
use super::physics::PhysicsState;
use crate::tuning::Tuning;

/// Result of a collision check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the runner was hit
    pub hit: bool,
    /// Horizontal distance between runner lane and obstacle
    pub gap: f32,
    /// Whether the vertical bands overlap
    pub overlap: bool,
}

impl CollisionResult {
    pub fn miss(gap: f32) -> Self {
        Self {
            hit: false,
            gap,
            overlap: false,
        }
    }
}

/// Distance between the runner's lane and the obstacle
#[inline]
pub fn horizontal_gap(obstacle_x: f32, tuning: &Tuning) -> f32 {
    (obstacle_x + tuning.lane_offset()).abs()
}

/// Whether a runner at `offset` shares height with the obstacle
pub fn bands_overlap(kind: ObstacleKind, offset: f32, tuning: &Tuning) -> bool {
    match kind {
        ObstacleKind::Ground(_) | ObstacleKind::Aerial(Band::Low) => offset >= -tuning.runner_height,
        ObstacleKind::Aerial(Band::High) => offset < tuning.high_band_jump_threshold,
    }
}

/// Check the runner against the active obstacle
pub fn check_collision(
    obstacle: &ObstacleState,
    runner: &PhysicsState,
    tuning: &Tuning,
) -> CollisionResult {
    let gap = horizontal_gap(obstacle.x, tuning);
    if gap >= tuning.collision_threshold() {
        return CollisionResult::miss(gap);
    }
    let overlap = bands_overlap(obstacle.kind, runner.offset, tuning);
    CollisionResult {
        hit: overlap,
        gap,
        overlap,
    }
}
