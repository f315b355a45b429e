//! Injectable randomness for obstacle selection
//!
//! The session never touches a global RNG. Production code uses a seeded
//! PCG stream; tests script the exact sequence of decisions.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of the random decisions the simulation makes
pub trait RandomSource {
    /// Fair coin flip
    fn coin_flip(&mut self) -> bool;

    /// Uniform pick in `0..n` (`n` > 0)
    fn pick(&mut self, n: usize) -> usize;
}

/// Seeded PCG32 stream
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn coin_flip(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }

    fn pick(&mut self, n: usize) -> usize {
        if n <= 1 {
            return 0;
        }
        self.rng.random_range(0..n)
    }
}

/// Replays a fixed script of decisions, then falls back to a default
///
/// Coin flips and picks are scripted independently so a test can force
/// "no pterodactyl" without caring which cactus sprite is drawn.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    flips: VecDeque<bool>,
    picks: VecDeque<usize>,
    /// Coin flip result once the script runs out
    pub default_flip: bool,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source that always answers the same flip and picks index 0
    pub fn always(flip: bool) -> Self {
        Self {
            default_flip: flip,
            ..Self::default()
        }
    }

    pub fn with_flips(mut self, flips: impl IntoIterator<Item = bool>) -> Self {
        self.flips.extend(flips);
        self
    }

    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn coin_flip(&mut self) -> bool {
        self.flips.pop_front().unwrap_or(self.default_flip)
    }

    fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.picks.pop_front().unwrap_or(0) % n
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn coin_flip(&mut self) -> bool {
        (**self).coin_flip()
    }

    fn pick(&mut self, n: usize) -> usize {
        (**self).pick(n)
    }
}
