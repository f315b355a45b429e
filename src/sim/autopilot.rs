//! Idle/demo mode - the computer plays the game
//!
//! Jumps over cacti and low pterodactyls, stays down for high ones.

use super::obstacle::{Band, ObstacleKind};
use super::session::Snapshot;
use crate::tuning::Tuning;

/// Obstacle ticks of warning the autopilot wants before the hit window
const LEAD_TICKS: f32 = 4.0;

/// Whether the demo player should jump right now
pub fn should_jump(snapshot: &Snapshot, tuning: &Tuning) -> bool {
    if !snapshot.running || snapshot.runner_airborne {
        return false;
    }
    if snapshot.obstacle_kind == ObstacleKind::Aerial(Band::High) {
        return false;
    }

    // Only obstacles still approaching the runner's lane matter
    let ahead = snapshot.obstacle_x + tuning.lane_offset();
    if ahead <= 0.0 {
        return false;
    }
    ahead < tuning.collision_threshold() + snapshot.speed * LEAD_TICKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameSession;
    use crate::sim::rng::ScriptedRandom;

    #[test]
    fn test_waits_for_far_obstacle() {
        let tuning = Tuning::default();
        let mut session = GameSession::new(tuning.clone(), 0, ScriptedRandom::always(false));
        session.start();
        assert!(!should_jump(&session.snapshot(), &tuning));
    }

    #[test]
    fn test_never_jumps_when_idle() {
        let tuning = Tuning::default();
        let session = GameSession::new(tuning.clone(), 0, ScriptedRandom::always(false));
        assert!(!should_jump(&session.snapshot(), &tuning));
    }

    #[test]
    fn test_demo_survives_long_seeded_run() {
        let tuning = Tuning::default();
        let mut session = GameSession::seeded(tuning.clone(), 0, 2024);
        session.start();
        for _ in 0..20_000 {
            if should_jump(&session.snapshot(), &tuning) {
                session.jump();
            }
            session.physics_tick();
            session.tick();
            if !session.is_running() {
                break;
            }
        }
        assert!(session.score() >= 50, "demo died at {}", session.score());
    }
}
