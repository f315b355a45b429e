//! Game session: lifecycle, scoring and collision rules
//!
//! A session moves Idle -> Running -> Over, and back to Running on `reset`.
//! Every operation may be called in any phase; calls that are invalid for the
//! current phase are ignored. The shell drives the session from the schedules
//! and reads it back through [`Snapshot`].

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::check_collision;
use super::obstacle::{ObstacleKind, ObstacleState};
use super::physics::PhysicsState;
use super::rng::{RandomSource, SeededRandom};
use super::scroll::ScrollState;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first start
    #[default]
    Idle,
    /// Active gameplay
    Running,
    /// Runner hit an obstacle
    Over,
}

/// Runner sprite state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunnerPose {
    /// Leg animation frame (1 or 2)
    Running { frame: u8 },
    Jumping,
}

/// Things that happened since the shell last drained events
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Session entered Running (first start or restart)
    Started,
    /// Runner left the ground
    Jumped,
    /// Runner touched down
    Landed,
    /// Obstacle wrapped; new score and speed
    Scored { score: u32, speed: f32 },
    /// A new obstacle appeared at the right edge
    ObstacleSpawned(ObstacleKind),
    /// Session ended
    GameOver { score: u32, best: u32, new_best: bool },
}

/// Read-only view of the session for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub running: bool,
    pub score: u32,
    pub best_score: u32,
    pub speed: f32,
    pub runner_offset: f32,
    pub runner_airborne: bool,
    pub runner_pose: RunnerPose,
    /// Runner position relative to field center and ground line
    pub runner_pos: Vec2,
    pub obstacle_x: f32,
    pub obstacle_kind: ObstacleKind,
    /// Obstacle position relative to field center and ground line
    pub obstacle_pos: Vec2,
    pub wing_frame: u8,
    pub scroll: ScrollState,
}

/// One player's run, plus the best score carried across runs
#[derive(Debug, Clone)]
pub struct GameSession<R: RandomSource = SeededRandom> {
    tuning: Tuning,
    rng: R,
    phase: GamePhase,
    score: u32,
    best_score: u32,
    physics: PhysicsState,
    obstacle: ObstacleState,
    scroll: ScrollState,
    /// Leg animation frame (1 or 2)
    runner_frame: u8,
    events: Vec<GameEvent>,
}

impl GameSession<SeededRandom> {
    /// Session with a seeded random source
    pub fn seeded(tuning: Tuning, best_score: u32, seed: u64) -> Self {
        Self::new(tuning, best_score, SeededRandom::new(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Create an idle session
    ///
    /// `best_score` is whatever the persistence layer loaded (0 on first run).
    pub fn new(tuning: Tuning, best_score: u32, mut rng: R) -> Self {
        let obstacle = ObstacleState::new(&tuning, &mut rng);
        let scroll = ScrollState::new(&tuning);
        Self {
            tuning,
            rng,
            phase: GamePhase::Idle,
            score: 0,
            best_score,
            physics: PhysicsState::grounded(),
            obstacle,
            scroll,
            runner_frame: 1,
            events: Vec::new(),
        }
    }

    /// Idle -> Running
    pub fn start(&mut self) -> bool {
        if self.phase != GamePhase::Idle {
            return false;
        }
        self.begin_run();
        true
    }

    /// Over -> Running, keeping the best score
    pub fn reset(&mut self) -> bool {
        if self.phase != GamePhase::Over {
            return false;
        }
        self.begin_run();
        true
    }

    fn begin_run(&mut self) {
        self.physics = PhysicsState::grounded();
        self.obstacle = ObstacleState::new(&self.tuning, &mut self.rng);
        self.scroll = ScrollState::new(&self.tuning);
        self.score = 0;
        self.runner_frame = 1;
        self.phase = GamePhase::Running;
        self.events.push(GameEvent::Started);
        log::info!(
            "Run started (best {}, speed {})",
            self.best_score,
            self.obstacle.speed
        );
    }

    /// Obstacle/score tick: move the obstacle, then test for a hit
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        if let Some(wrap) = self.obstacle.advance(self.score, &self.tuning, &mut self.rng) {
            self.score += 1;
            log::debug!(
                "Score {} speed {:.2} next {:?}",
                self.score,
                wrap.speed,
                wrap.kind
            );
            self.events.push(GameEvent::Scored {
                score: self.score,
                speed: wrap.speed,
            });
            self.events.push(GameEvent::ObstacleSpawned(wrap.kind));
        }

        let collision = check_collision(&self.obstacle, &self.physics, &self.tuning);
        if collision.hit {
            log::debug!(
                "Hit {:?} at gap {:.1}, runner offset {:.1}",
                self.obstacle.kind,
                collision.gap,
                self.physics.offset
            );
            self.end();
        }
    }

    /// Physics/input tick: integrate the jump and scroll the scenery
    pub fn physics_tick(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        if self.physics.advance(self.tuning.gravity) {
            self.runner_frame = 1;
            self.events.push(GameEvent::Landed);
        }
        self.scroll.advance(self.obstacle.speed, &self.tuning);
    }

    /// Alternate the runner's legs (grounded only)
    pub fn animate_runner(&mut self) {
        if self.phase != GamePhase::Running || self.physics.airborne {
            return;
        }
        self.runner_frame = if self.runner_frame == 1 { 2 } else { 1 };
    }

    /// Alternate the pterodactyl's wings (only while one is on screen)
    pub fn animate_flyer(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.obstacle.flap();
    }

    /// Jump if running and grounded; ignored otherwise
    pub fn jump(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        if !self.physics.start_jump(self.tuning.jump_velocity) {
            return false;
        }
        self.events.push(GameEvent::Jumped);
        true
    }

    /// Running -> Over, folding the score into the best score
    pub fn end(&mut self) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }
        self.phase = GamePhase::Over;
        let new_best = self.score > self.best_score;
        if new_best {
            self.best_score = self.score;
        }
        self.events.push(GameEvent::GameOver {
            score: self.score,
            best: self.best_score,
            new_best,
        });
        log::info!(
            "Game over: score {} (best {}{})",
            self.score,
            self.best_score,
            if new_best { ", new best" } else { "" }
        );
        true
    }

    /// Take all events recorded since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        let runner_pose = if self.physics.airborne {
            RunnerPose::Jumping
        } else {
            RunnerPose::Running {
                frame: self.runner_frame,
            }
        };
        Snapshot {
            phase: self.phase,
            running: self.is_running(),
            score: self.score,
            best_score: self.best_score,
            speed: self.obstacle.speed,
            runner_offset: self.physics.offset,
            runner_airborne: self.physics.airborne,
            runner_pose,
            runner_pos: Vec2::new(-self.tuning.lane_offset(), self.physics.offset),
            obstacle_x: self.obstacle.x,
            obstacle_kind: self.obstacle.kind,
            obstacle_pos: Vec2::new(self.obstacle.x, self.obstacle.kind.altitude(&self.tuning)),
            wing_frame: self.obstacle.wing_frame,
            scroll: self.scroll,
        }
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.obstacle.speed
    }

    pub fn physics(&self) -> &PhysicsState {
        &self.physics
    }

    pub fn obstacle(&self) -> &ObstacleState {
        &self.obstacle
    }

    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
