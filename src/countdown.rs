//! Speaker countdown state machine.
//!
//! The countdown itself owns no timer. Whoever hosts it calls [`Countdown::tick`]
//! once per second while [`Countdown::is_running`] holds and stops calling as
//! soon as it does not. Reaching zero moves the countdown into
//! [`TimerStatus::Finished`]; that transition is reported by exactly one tick
//! per run and is the only completion event.

use log::debug;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Finished,
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimerStatus::Idle => "Ready",
            TimerStatus::Running => "Running",
            TimerStatus::Paused => "Paused",
            TimerStatus::Finished => "Time's up",
        };
        f.write_str(label)
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown was not running.
    Ignored,
    /// One second was taken off the remaining time.
    Counted,
    /// The remaining time hit zero and the countdown finished.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    time_left: u32,
    status: TimerStatus,
}

impl Countdown {
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            time_left: duration,
            status: TimerStatus::Idle,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn elapsed(&self) -> u32 {
        self.duration.saturating_sub(self.time_left)
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// `time_left / duration`, or 0 for a zero-length countdown.
    ///
    /// Shrinking the duration mid-run can push this above 1 until the next
    /// reset.
    pub fn progress(&self) -> f64 {
        if self.duration == 0 {
            0.0
        } else {
            self.time_left as f64 / self.duration as f64
        }
    }

    /// Start or resume. Running and finished countdowns are left alone; a
    /// finished countdown has to be reset first.
    pub fn start(&mut self) -> bool {
        match self.status {
            TimerStatus::Idle | TimerStatus::Paused => {
                debug!("Countdown {:?} -> Running ({}s left)", self.status, self.time_left);
                self.status = TimerStatus::Running;
                true
            }
            TimerStatus::Running | TimerStatus::Finished => false,
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.status != TimerStatus::Running {
            return false;
        }
        debug!("Countdown paused with {}s left", self.time_left);
        self.status = TimerStatus::Paused;
        true
    }

    pub fn reset(&mut self) {
        debug!("Countdown reset to {}s", self.duration);
        self.status = TimerStatus::Idle;
        self.time_left = self.duration;
    }

    /// Change the configured length. Only an idle countdown picks it up
    /// immediately; otherwise it applies from the next reset.
    pub fn set_duration(&mut self, duration: u32) {
        self.duration = duration;
        if self.status == TimerStatus::Idle {
            self.time_left = duration;
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.status != TimerStatus::Running {
            return TickOutcome::Ignored;
        }
        if self.time_left <= 1 {
            self.time_left = 0;
            self.status = TimerStatus::Finished;
            return TickOutcome::Finished;
        }
        self.time_left -= 1;
        TickOutcome::Counted
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::new(crate::defaults::TIMER_DURATION_SECS)
    }
}
