//! Named fixed-cadence schedules
//!
//! Replaces ad hoc timers with four independent schedules that share one
//! clock. The host feeds wall-clock time in; the scheduler hands back due
//! ticks one at a time in chronological order, so the caller can cancel
//! schedules between two ticks of the same frame.

use crate::consts::MAX_CATCHUP_TICKS;
use crate::tuning::Tuning;

/// Schedule identifiers, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScheduleKind {
    /// Jump integration and scenery
    Physics,
    /// Obstacle movement, scoring and collisions
    Obstacle,
    /// Runner leg animation
    RunnerAnimation,
    /// Pterodactyl wing animation
    FlyerAnimation,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 4] = [
        Self::Physics,
        Self::Obstacle,
        Self::RunnerAnimation,
        Self::FlyerAnimation,
    ];

    #[inline]
    fn index(self) -> usize {
        self as usize
    }
}

/// One periodic schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Schedule {
    /// Seconds between ticks
    pub period: f64,
    /// Extra wait before the first tick after arming
    pub delay: f64,
    /// Absolute time of the next tick (None = cancelled)
    next_due: Option<f64>,
    /// Ticks handed out for the current frame
    fired_this_frame: u32,
}

impl Schedule {
    pub fn new(period: f64, delay: f64) -> Self {
        Self {
            period,
            delay,
            next_due: None,
            fired_this_frame: 0,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn next_due(&self) -> Option<f64> {
        self.next_due
    }
}

/// Owner of all schedules and the shared clock
#[derive(Debug, Clone)]
pub struct Scheduler {
    /// Time of the last tick handed out (or last frame, whichever is later)
    now: f64,
    /// Time the current frame is catching up to
    frame_target: f64,
    schedules: [Schedule; 4],
}

impl Scheduler {
    /// All schedules start cancelled at time 0
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            now: 0.0,
            frame_target: 0.0,
            schedules: [
                Schedule::new(tuning.physics_period, 0.0),
                Schedule::new(tuning.obstacle_period, tuning.obstacle_delay),
                Schedule::new(tuning.runner_anim_period, 0.0),
                Schedule::new(tuning.flyer_anim_period, 0.0),
            ],
        }
    }

    #[inline]
    pub fn now(&self) -> f64 {
        self.now
    }

    pub fn schedule(&self, kind: ScheduleKind) -> &Schedule {
        &self.schedules[kind.index()]
    }

    /// Start a schedule from the current time (first tick after delay + period)
    pub fn arm(&mut self, kind: ScheduleKind) {
        let now = self.now;
        let schedule = &mut self.schedules[kind.index()];
        schedule.next_due = Some(now + schedule.delay + schedule.period);
        schedule.fired_this_frame = 0;
    }

    pub fn arm_all(&mut self) {
        for kind in ScheduleKind::ALL {
            self.arm(kind);
        }
    }

    pub fn cancel(&mut self, kind: ScheduleKind) {
        self.schedules[kind.index()].next_due = None;
    }

    pub fn cancel_all(&mut self) {
        for kind in ScheduleKind::ALL {
            self.cancel(kind);
        }
    }

    pub fn is_armed(&self, kind: ScheduleKind) -> bool {
        self.schedules[kind.index()].is_armed()
    }

    pub fn any_armed(&self) -> bool {
        self.schedules.iter().any(Schedule::is_armed)
    }

    /// Next tick due at or before `target`, earliest first
    ///
    /// Call repeatedly with the same `target` until it returns `None`. A
    /// schedule that falls more than [`MAX_CATCHUP_TICKS`] behind within one
    /// frame drops its backlog instead of spiralling.
    pub fn pop_due(&mut self, target: f64) -> Option<ScheduleKind> {
        if target > self.frame_target {
            self.frame_target = target;
            for schedule in &mut self.schedules {
                schedule.fired_this_frame = 0;
            }
        }
        let target = self.frame_target;

        let (index, due) = self
            .schedules
            .iter()
            .enumerate()
            .filter_map(|(i, s)| s.next_due.filter(|&due| due <= target).map(|due| (i, due)))
            .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)))?;

        let kind = ScheduleKind::ALL[index];
        let schedule = &mut self.schedules[index];
        schedule.fired_this_frame += 1;
        if schedule.fired_this_frame >= MAX_CATCHUP_TICKS {
            let skipped = ((target - due) / schedule.period).floor() as u64;
            if skipped > 0 {
                log::debug!("{:?} schedule skipped {} late ticks", kind, skipped);
            }
            schedule.next_due = Some(target + schedule.period);
        } else {
            schedule.next_due = Some(due + schedule.period);
        }
        self.now = self.now.max(due);
        Some(kind)
    }

    /// Move the clock to `target` without firing anything still pending
    pub fn settle(&mut self, target: f64) {
        self.now = self.now.max(target);
    }
}
