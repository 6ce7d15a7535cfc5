//! Once-per-second countdown timer
//!
//! Tick-counter based so the flow stays deterministic: the host loop calls
//! `tick()` at a fixed rate and the timer turns that into whole-second
//! decrements. Cancellation is a plain state change, safe to repeat.

use serde::{Deserialize, Serialize};

use crate::consts::{COUNTDOWN_START, TICKS_PER_SECOND};

/// Outcome of advancing the timer by one simulation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// Timer is not running
    Idle,
    /// Running, less than a full second accumulated
    Running,
    /// A full second elapsed and the counter decremented
    Second,
    /// Counter reached zero; fired exactly once, the timer has stopped itself
    Exhausted,
}

/// Seconds-granularity countdown, 10 down to 0
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownTimer {
    /// Seconds remaining, read by the view to render the numeral
    pub remaining: u8,
    /// Sim ticks until the next decrement
    ticks_to_next: u32,
    running: bool,
}

impl Default for CountdownTimer {
    fn default() -> Self {
        Self {
            remaining: COUNTDOWN_START,
            ticks_to_next: TICKS_PER_SECOND,
            running: false,
        }
    }
}

impl CountdownTimer {
    /// Restore the full count and begin ticking.
    ///
    /// Restarting while already running restarts from 10; a second cadence
    /// can never stack on top of the first.
    pub fn start(&mut self) {
        self.remaining = COUNTDOWN_START;
        self.ticks_to_next = TICKS_PER_SECOND;
        self.running = true;
    }

    /// Stop ticking. Safe to call when not running.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and restore the full count.
    pub fn reset(&mut self) {
        self.running = false;
        self.remaining = COUNTDOWN_START;
        self.ticks_to_next = TICKS_PER_SECOND;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Jump to the final second (debug/testing)
    pub fn skip_to_last_second(&mut self) {
        if self.running {
            self.remaining = 1;
            self.ticks_to_next = 1;
        }
    }

    /// Advance by one simulation tick
    pub fn tick(&mut self) -> TimerEvent {
        if !self.running {
            return TimerEvent::Idle;
        }

        self.ticks_to_next -= 1;
        if self.ticks_to_next > 0 {
            return TimerEvent::Running;
        }

        self.ticks_to_next = TICKS_PER_SECOND;
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.running = false;
            return TimerEvent::Exhausted;
        }
        TimerEvent::Second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_once_per_second() {
        let mut timer = CountdownTimer::default();
        timer.start();
        assert_eq!(timer.remaining, COUNTDOWN_START);

        // One tick short of a second: no decrement yet
        for _ in 0..TICKS_PER_SECOND - 1 {
            assert_eq!(timer.tick(), TimerEvent::Running);
        }
        assert_eq!(timer.remaining, COUNTDOWN_START);

        assert_eq!(timer.tick(), TimerEvent::Second);
        assert_eq!(timer.remaining, COUNTDOWN_START - 1);
    }

    #[test]
    fn test_exhaustion_fires_exactly_once() {
        let mut timer = CountdownTimer::default();
        timer.start();

        // Run well past the full count
        let total = (COUNTDOWN_START as u32 + 2) * TICKS_PER_SECOND;
        let mut exhausted = 0;
        for _ in 0..total {
            if timer.tick() == TimerEvent::Exhausted {
                exhausted += 1;
            }
        }

        assert_eq!(exhausted, 1);
        assert_eq!(timer.remaining, 0);
        assert!(!timer.is_running());
        // Completed timer stays idle
        assert_eq!(timer.tick(), TimerEvent::Idle);
    }

    #[test]
    fn test_exhausts_after_exactly_ten_seconds() {
        let mut timer = CountdownTimer::default();
        timer.start();

        let mut ticks = 0u32;
        loop {
            ticks += 1;
            if timer.tick() == TimerEvent::Exhausted {
                break;
            }
            assert!(ticks < 20 * TICKS_PER_SECOND, "timer never exhausted");
        }
        assert_eq!(ticks, COUNTDOWN_START as u32 * TICKS_PER_SECOND);
    }

    #[test]
    fn test_never_negative() {
        let mut timer = CountdownTimer::default();
        timer.start();

        let mut last = timer.remaining;
        for _ in 0..20 * TICKS_PER_SECOND {
            timer.tick();
            assert!(timer.remaining <= last);
            last = timer.remaining;
        }
        assert_eq!(timer.remaining, 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut timer = CountdownTimer::default();
        // Stopping a timer that never ran is fine
        timer.stop();
        timer.stop();
        assert_eq!(timer.tick(), TimerEvent::Idle);

        timer.start();
        timer.tick();
        timer.stop();
        timer.stop();
        assert_eq!(timer.tick(), TimerEvent::Idle);
    }

    #[test]
    fn test_restart_restores_full_count() {
        let mut timer = CountdownTimer::default();
        timer.start();
        for _ in 0..3 * TICKS_PER_SECOND {
            timer.tick();
        }
        assert_eq!(timer.remaining, COUNTDOWN_START - 3);

        timer.start();
        assert_eq!(timer.remaining, COUNTDOWN_START);
        assert!(timer.is_running());
    }

    #[test]
    fn test_skip_to_last_second() {
        let mut timer = CountdownTimer::default();
        timer.start();
        timer.skip_to_last_second();
        assert_eq!(timer.tick(), TimerEvent::Exhausted);

        // No effect while stopped
        let mut idle = CountdownTimer::default();
        idle.skip_to_last_second();
        assert_eq!(idle.remaining, COUNTDOWN_START);
    }
}
