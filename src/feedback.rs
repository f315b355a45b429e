//! Audio/haptic feedback cues
//!
//! Fire-and-forget: the game never waits on a sink and plays identically with
//! no sink at all.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Feedback cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackCue {
    /// Run (re)started
    Start,
    /// Jump started
    Click,
    /// Game over
    Failure,
}

impl FeedbackCue {
    /// Cue for a session event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Started => Some(FeedbackCue::Start),
            GameEvent::Jumped => Some(FeedbackCue::Click),
            GameEvent::GameOver { .. } => Some(FeedbackCue::Failure),
            _ => None,
        }
    }

    /// Vibration length for haptic hosts
    pub fn haptic_ms(&self) -> u32 {
        match self {
            FeedbackCue::Start => 40,
            FeedbackCue::Click => 15,
            FeedbackCue::Failure => 200,
        }
    }
}

/// Receives feedback cues
pub trait FeedbackSink {
    fn cue(&mut self, cue: FeedbackCue);
}

/// Drops every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn cue(&mut self, _cue: FeedbackCue) {}
}

/// Logs cues (headless hosts)
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn cue(&mut self, cue: FeedbackCue) {
        log::debug!("Feedback cue: {:?}", cue);
    }
}

/// Keeps every cue (tests, replays)
#[derive(Debug, Clone, Default)]
pub struct RecordingFeedback {
    pub cues: Vec<FeedbackCue>,
}

impl FeedbackSink for RecordingFeedback {
    fn cue(&mut self, cue: FeedbackCue) {
        self.cues.push(cue);
    }
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for Box<S> {
    fn cue(&mut self, cue: FeedbackCue) {
        (**self).cue(cue)
    }
}
