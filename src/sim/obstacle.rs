//! The single active obstacle: movement, wrap-around and variant selection
//!
//! Horizontal positions are offsets from the field center. The obstacle moves
//! left by `speed` every obstacle tick; once it passes the wrap line it
//! reappears at the right edge as a freshly rolled variant.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::tuning::Tuning;

/// Cactus sprite (no gameplay difference)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CactusVariant {
    #[default]
    Small,
    Medium,
    Large,
}

impl CactusVariant {
    pub const ALL: [CactusVariant; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn sprite(&self) -> &'static str {
        match self {
            CactusVariant::Small => "cactus1",
            CactusVariant::Medium => "cactus2",
            CactusVariant::Large => "cactus3",
        }
    }
}

/// Flight altitude of a pterodactyl
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    /// Level with the runner - must be jumped
    Low,
    /// Above the runner - punishes jumping too high
    High,
}

/// What the runner is facing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    Ground(CactusVariant),
    Aerial(Band),
}

impl Default for ObstacleKind {
    fn default() -> Self {
        ObstacleKind::Ground(CactusVariant::default())
    }
}

impl ObstacleKind {
    pub fn is_aerial(&self) -> bool {
        matches!(self, ObstacleKind::Aerial(_))
    }

    /// Render altitude relative to the ground line
    pub fn altitude(&self, tuning: &Tuning) -> f32 {
        match self {
            ObstacleKind::Ground(_) | ObstacleKind::Aerial(Band::Low) => 0.0,
            ObstacleKind::Aerial(Band::High) => tuning.high_band_altitude,
        }
    }
}

/// Result of an obstacle tick that crossed the wrap line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wrap {
    pub kind: ObstacleKind,
    pub speed: f32,
}

/// The active obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleState {
    /// Horizontal offset from field center
    pub x: f32,
    pub kind: ObstacleKind,
    /// Points moved per obstacle tick
    pub speed: f32,
    /// Pterodactyl wing frame (1 or 2)
    pub wing_frame: u8,
}

impl ObstacleState {
    /// Fresh cactus at the right edge, moving at the initial speed
    pub fn new(tuning: &Tuning, rng: &mut impl RandomSource) -> Self {
        Self {
            x: tuning.spawn_x(),
            kind: ObstacleKind::Ground(random_cactus(rng)),
            speed: tuning.initial_speed,
            wing_frame: 1,
        }
    }

    /// Move one obstacle tick
    ///
    /// `score` is the score before this tick; the caller adds the point for a
    /// wrap. Returns the new variant when the obstacle wrapped.
    pub fn advance(
        &mut self,
        score: u32,
        tuning: &Tuning,
        rng: &mut impl RandomSource,
    ) -> Option<Wrap> {
        self.x -= self.speed;
        if self.x >= tuning.wrap_x() {
            return None;
        }

        self.x = tuning.spawn_x();
        self.kind = roll_kind(score, self.kind.is_aerial(), tuning, rng);
        if self.kind.is_aerial() {
            self.wing_frame = rng.pick(2) as u8 + 1;
        }
        self.speed += tuning.speed_increment;

        Some(Wrap {
            kind: self.kind,
            speed: self.speed,
        })
    }

    /// Flap the wings (only while a pterodactyl is on screen)
    pub fn flap(&mut self) -> bool {
        if !self.kind.is_aerial() {
            return false;
        }
        self.wing_frame = if self.wing_frame == 1 { 2 } else { 1 };
        true
    }
}

/// Pick the next obstacle variant
///
/// Pterodactyls unlock once `score` exceeds the threshold, never follow another
/// pterodactyl, and otherwise appear on a coin flip. Band is a second flip.
pub fn roll_kind(
    score: u32,
    aerial_pending: bool,
    tuning: &Tuning,
    rng: &mut impl RandomSource,
) -> ObstacleKind {
    if score > tuning.aerial_unlock_score && !aerial_pending && rng.coin_flip() {
        let band = if rng.coin_flip() { Band::Low } else { Band::High };
        ObstacleKind::Aerial(band)
    } else {
        ObstacleKind::Ground(random_cactus(rng))
    }
}

fn random_cactus(rng: &mut impl RandomSource) -> CactusVariant {
    CactusVariant::ALL[rng.pick(CactusVariant::ALL.len())]
}
