//! Game-loop simulation
//!
//! All gameplay logic lives here. This module must stay platform-free:
//! - One call = one tick, no wall-clock time
//! - Randomness only through an injected [`RandomSource`]
//! - No rendering, storage or audio dependencies

pub mod autopilot;
pub mod collision;
pub mod obstacle;
pub mod physics;
pub mod rng;
pub mod scroll;
pub mod session;

pub use collision::{CollisionResult, check_collision};
pub use obstacle::{Band, CactusVariant, ObstacleKind, ObstacleState};
pub use physics::PhysicsState;
pub use rng::{RandomSource, ScriptedRandom, SeededRandom};
pub use scroll::ScrollState;
pub use session::{GameEvent, GamePhase, GameSession, RunnerPose, Snapshot};
