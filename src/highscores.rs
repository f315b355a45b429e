//! Best score persistence
//!
//! The only value that survives between runs. Stored as a small JSON record
//! under a single key; a bare integer is accepted too.

use serde::{Deserialize, Serialize};

use crate::persistence::{KeyValueStore, StoreError};

/// Best score ever reached on this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BestScore {
    pub score: u32,
}

/// Accepted on-disk shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBest {
    Record(BestScore),
    Bare(u32),
}

impl BestScore {
    /// Storage key
    const STORAGE_KEY: &'static str = "best_score";

    pub fn new(score: u32) -> Self {
        Self { score }
    }

    /// Raise the best score; returns true if `score` beat it
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.score {
            self.score = score;
            true
        } else {
            false
        }
    }

    /// Read the stored value, propagating failures
    pub fn try_load(store: &impl KeyValueStore) -> Result<Self, StoreError> {
        let Some(json) = store.get(Self::STORAGE_KEY)? else {
            return Ok(Self::default());
        };
        let best = match serde_json::from_str::<StoredBest>(json.trim())? {
            StoredBest::Record(best) => best,
            StoredBest::Bare(score) => Self::new(score),
        };
        Ok(best)
    }

    /// Read the stored value; first run or unreadable storage yields 0
    pub fn load(store: &impl KeyValueStore) -> Self {
        match Self::try_load(store) {
            Ok(best) => {
                log::info!("Loaded best score {}", best.score);
                best
            }
            Err(e) => {
                log::warn!("Could not read best score, starting from 0: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self, store: &mut impl KeyValueStore) -> Result<(), StoreError> {
        let json = serde_json::to_string(self)?;
        store.set(Self::STORAGE_KEY, &json)?;
        log::info!("Best score saved ({})", self.score);
        Ok(())
    }
}
