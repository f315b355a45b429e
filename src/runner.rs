//! Host-facing game driver
//!
//! Owns the session and its schedules, turns wall-clock time into ticks,
//! routes input, persists new best scores and fires feedback cues. Hosts
//! (native demo, browser bindings) only feed time and gestures in and read
//! snapshots out.

use crate::feedback::{FeedbackCue, FeedbackSink};
use crate::highscores::BestScore;
use crate::input::{Gesture, Intent, intent_for};
use crate::persistence::KeyValueStore;
use crate::schedule::{ScheduleKind, Scheduler};
use crate::settings::Settings;
use crate::sim::{
    GameEvent, GamePhase, GameSession, RandomSource, SeededRandom, Snapshot, autopilot,
};

/// Game driver
pub struct Runner<
    R: RandomSource = SeededRandom,
    S: KeyValueStore = Box<dyn KeyValueStore>,
    F: FeedbackSink = Box<dyn FeedbackSink>,
> {
    session: GameSession<R>,
    scheduler: Scheduler,
    store: S,
    feedback: F,
    feedback_enabled: bool,
    autopilot: bool,
    best: BestScore,
    /// Events not yet taken by the host
    events: Vec<GameEvent>,
}

impl<R: RandomSource, S: KeyValueStore, F: FeedbackSink> Runner<R, S, F> {
    /// Build an idle runner; the best score is read from `store`
    pub fn new(settings: &Settings, rng: R, store: S, feedback: F) -> Self {
        let best = BestScore::load(&store);
        let session = GameSession::new(settings.tuning.clone(), best.score, rng);
        Self {
            scheduler: Scheduler::new(&settings.tuning),
            session,
            store,
            feedback,
            feedback_enabled: settings.feedback.enabled(),
            autopilot: settings.autopilot,
            best,
            events: Vec::new(),
        }
    }

    /// First start at time `now` (seconds)
    pub fn start(&mut self, now: f64) -> bool {
        self.scheduler.settle(now);
        if !self.session.start() {
            return false;
        }
        self.scheduler.arm_all();
        self.process_events();
        true
    }

    /// Restart after game over at time `now` (seconds)
    pub fn restart(&mut self, now: f64) -> bool {
        self.scheduler.settle(now);
        if !self.session.reset() {
            return false;
        }
        self.scheduler.arm_all();
        self.process_events();
        true
    }

    /// Apply a device gesture received at time `now` (seconds)
    pub fn handle(&mut self, gesture: Gesture, now: f64) {
        if let Some(intent) = intent_for(gesture) {
            self.apply(intent, now);
        }
    }

    /// Apply a player intent; invalid intents for the phase are ignored
    ///
    /// A restart arms the schedules from `now`, so the obstacle grace period
    /// counts from the moment the player asked for it.
    pub fn apply(&mut self, intent: Intent, now: f64) {
        match intent {
            Intent::Jump => {
                self.session.jump();
                self.process_events();
            }
            Intent::Restart => match self.session.phase() {
                GamePhase::Idle => {
                    self.start(now);
                }
                GamePhase::Over => {
                    self.restart(now);
                }
                GamePhase::Running => {}
            },
        }
    }

    /// Run every tick due up to `now` (seconds)
    pub fn update(&mut self, now: f64) {
        while let Some(kind) = self.scheduler.pop_due(now) {
            self.dispatch(kind);
            self.process_events();
        }
        self.scheduler.settle(now);
    }

    fn dispatch(&mut self, kind: ScheduleKind) {
        match kind {
            ScheduleKind::Physics => {
                if self.autopilot
                    && autopilot::should_jump(&self.session.snapshot(), self.session.tuning())
                {
                    self.session.jump();
                }
                self.session.physics_tick();
            }
            ScheduleKind::Obstacle => self.session.tick(),
            ScheduleKind::RunnerAnimation => self.session.animate_runner(),
            ScheduleKind::FlyerAnimation => self.session.animate_flyer(),
        }
    }

    /// Route new session events to feedback, storage and the schedules
    fn process_events(&mut self) {
        for event in self.session.drain_events() {
            if self.feedback_enabled {
                if let Some(cue) = FeedbackCue::for_event(&event) {
                    self.feedback.cue(cue);
                }
            }
            if let GameEvent::GameOver { score, .. } = event {
                self.scheduler.cancel_all();
                if self.best.record(score) {
                    if let Err(e) = self.best.save(&mut self.store) {
                        log::warn!("Failed to save best score {}: {e}", score);
                    }
                }
            }
            self.events.push(event);
        }
    }

    /// Take all events since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.session.snapshot()
    }

    pub fn session(&self) -> &GameSession<R> {
        &self.session
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn feedback(&self) -> &F {
        &self.feedback
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
    }

    pub fn autopilot(&self) -> bool {
        self.autopilot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::RecordingFeedback;
    use crate::input::Key;
    use crate::persistence::{MemoryStore, StoreError};
    use crate::sim::ScriptedRandom;

    type TestRunner = Runner<ScriptedRandom, MemoryStore, RecordingFeedback>;

    fn runner_with(settings: Settings, store: MemoryStore) -> TestRunner {
        Runner::new(
            &settings,
            ScriptedRandom::always(false),
            store,
            RecordingFeedback::default(),
        )
    }

    /// Feed 60 fps frames from `from` to `to`
    fn run_frames<S: KeyValueStore>(
        runner: &mut Runner<ScriptedRandom, S, RecordingFeedback>,
        from: f64,
        to: f64,
    ) -> f64 {
        let mut t = from;
        while t < to {
            t += 1.0 / 60.0;
            runner.update(t);
        }
        t
    }

    #[test]
    fn test_loads_best_score_on_creation() {
        let mut store = MemoryStore::new();
        BestScore::new(31).save(&mut store).unwrap();
        let runner = runner_with(Settings::default(), store);
        assert_eq!(runner.snapshot().best_score, 31);
        assert_eq!(runner.snapshot().phase, GamePhase::Idle);
    }

    #[test]
    fn test_grace_period_before_first_obstacle_tick() {
        let mut runner = runner_with(Settings::default(), MemoryStore::new());
        assert!(runner.start(0.0));
        assert_eq!(runner.feedback().cues, vec![FeedbackCue::Start]);

        run_frames(&mut runner, 0.0, 1.9);
        let snapshot = runner.snapshot();
        assert_eq!(snapshot.obstacle_x, 184.0);
        // Scenery moves from the start
        assert!(snapshot.scroll.cloud < 184.0);

        run_frames(&mut runner, 1.9, 2.1);
        assert!(runner.snapshot().obstacle_x < 184.0);
    }

    #[test]
    fn test_crash_cancels_schedules_and_saves_best() {
        let mut runner = runner_with(Settings::default(), MemoryStore::new());
        runner.start(0.0);

        // Never jump: the first cactus ends the run with score 0
        let t = run_frames(&mut runner, 0.0, 5.0);
        assert_eq!(runner.snapshot().phase, GamePhase::Over);
        assert!(!runner.scheduler().any_armed());
        assert_eq!(runner.feedback().cues.last(), Some(&FeedbackCue::Failure));
        // Score 0 never beats the stored 0
        assert_eq!(runner.store().get("best_score").unwrap(), None);

        let frozen = runner.snapshot();
        run_frames(&mut runner, t, t + 1.0);
        assert_eq!(runner.snapshot(), frozen);
    }

    #[test]
    fn test_autopilot_scores_and_persists() {
        let settings = Settings {
            autopilot: true,
            ..Default::default()
        };
        let mut runner = runner_with(settings, MemoryStore::new());
        runner.start(0.0);
        let t = run_frames(&mut runner, 0.0, 12.0);
        assert!(runner.snapshot().running);
        let score = runner.snapshot().score;
        assert!(score >= 3, "score {score}");
        assert!(runner.feedback().cues.contains(&FeedbackCue::Click));

        // Hand control back and let the next cactus hit
        runner.set_autopilot(false);
        run_frames(&mut runner, t, t + 10.0);
        assert_eq!(runner.snapshot().phase, GamePhase::Over);
        let final_score = runner.snapshot().score;
        assert_eq!(BestScore::load(runner.store()).score, final_score);

        let events = runner.drain_events();
        assert!(events.iter().any(|e| matches!(
            e,
            GameEvent::GameOver { new_best: true, .. }
        )));
    }

    #[test]
    fn test_restart_rearms_and_keeps_best() {
        let mut store = MemoryStore::new();
        BestScore::new(9).save(&mut store).unwrap();
        let mut runner = runner_with(Settings::default(), store);

        // Restart from Idle starts the first run
        runner.handle(Gesture::DismissGameOver, 0.0);
        assert!(runner.snapshot().running);

        let t = run_frames(&mut runner, 0.0, 5.0);
        assert_eq!(runner.snapshot().phase, GamePhase::Over);

        // Jump is ignored while over
        runner.handle(Gesture::Tap, t);
        assert_eq!(runner.snapshot().phase, GamePhase::Over);

        runner.handle(Gesture::Key(Key::Enter), t);
        assert!(runner.snapshot().running);
        assert_eq!(runner.snapshot().score, 0);
        assert_eq!(runner.snapshot().best_score, 9);
        assert!(runner.scheduler().is_armed(ScheduleKind::Obstacle));

        // New grace period counts from the restart
        run_frames(&mut runner, t, t + 1.5);
        assert_eq!(runner.snapshot().obstacle_x, 184.0);
    }

    #[test]
    fn test_restart_after_long_pause_keeps_grace_period() {
        let mut runner = runner_with(Settings::default(), MemoryStore::new());
        runner.start(0.0);
        let t = run_frames(&mut runner, 0.0, 5.0);
        assert_eq!(runner.snapshot().phase, GamePhase::Over);

        // Host stops feeding frames while the game-over prompt is up
        let resume = t + 30.0;
        runner.apply(Intent::Restart, resume);
        assert!(runner.snapshot().running);

        runner.update(resume + 1.0 / 60.0);
        assert_eq!(runner.snapshot().obstacle_x, 184.0);

        let t = run_frames(&mut runner, resume, resume + 1.9);
        assert_eq!(runner.snapshot().obstacle_x, 184.0);
        run_frames(&mut runner, t, resume + 2.1);
        assert!(runner.snapshot().obstacle_x < 184.0);
    }

    #[test]
    fn test_first_start_from_restart_gesture_uses_its_time() {
        let mut runner = runner_with(Settings::default(), MemoryStore::new());

        // No frames at all before the player presses play
        runner.handle(Gesture::DismissGameOver, 5.0);
        assert!(runner.snapshot().running);
        assert!(runner.scheduler().now() >= 5.0);

        run_frames(&mut runner, 5.0, 6.9);
        assert_eq!(runner.snapshot().obstacle_x, 184.0);
    }

    /// Store whose writes always fail
    #[derive(Default)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("read-only".to_string()))
        }
    }

    #[test]
    fn test_failed_save_keeps_playing() {
        let settings = Settings {
            autopilot: true,
            ..Default::default()
        };
        let mut runner = Runner::new(
            &settings,
            ScriptedRandom::always(false),
            ReadOnlyStore,
            RecordingFeedback::default(),
        );
        runner.start(0.0);
        let t = run_frames(&mut runner, 0.0, 12.0);
        runner.set_autopilot(false);
        let t = run_frames(&mut runner, t, t + 10.0);
        assert_eq!(runner.snapshot().phase, GamePhase::Over);

        let score = runner.snapshot().score;
        assert!(score >= 3, "score {score}");
        assert_eq!(runner.snapshot().best_score, score);
        assert!(runner.drain_events().iter().any(|e| matches!(
            e,
            GameEvent::GameOver { new_best: true, .. }
        )));

        assert!(runner.restart(t));
        assert!(runner.snapshot().running);
        assert_eq!(runner.snapshot().best_score, score);
    }

    #[test]
    fn test_jump_gesture_takes_effect_next_physics_tick() {
        let mut runner = runner_with(Settings::default(), MemoryStore::new());
        runner.start(0.0);
        runner.update(0.03);

        runner.handle(Gesture::Drag { dy: -5.0 }, 0.03);
        assert!(runner.snapshot().runner_airborne);
        assert_eq!(runner.snapshot().runner_offset, 0.0);

        runner.update(0.041);
        assert_eq!(runner.snapshot().runner_offset, -10.0);
        assert_eq!(
            runner.feedback().cues,
            vec![FeedbackCue::Start, FeedbackCue::Click]
        );
    }

    #[test]
    fn test_feedback_can_be_disabled() {
        let mut settings = Settings::default();
        settings.feedback.sound = false;
        settings.feedback.haptics = false;
        let mut runner = runner_with(settings, MemoryStore::new());
        runner.start(0.0);
        runner.handle(Gesture::Tap, 0.0);
        assert!(runner.feedback().cues.is_empty());
        // Gameplay is unaffected
        assert!(runner.snapshot().runner_airborne);
    }
}
