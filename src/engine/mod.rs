//! Timed activities: the alarm and the Pomodoro cycle.
//!
//! Both engines are driven by the same two building blocks, so neither
//! ever sleeps:
//!
//! - [`Countdown`]: whole-second counter advanced by the caller's clock.
//! - [`Chime`]: buzzer on/off pattern advanced by the caller's clock.
//!
//! Time is always passed in as a millisecond timestamp, which lets the
//! host tests run a 25 minute study phase in microseconds.

pub mod alarm;
pub mod pomodoro;

use crate::config::{TICK_MS, TONE_HALF_PERIOD_MS};
use crate::hal::Buzzer;

/// One-second countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    next_tick_ms: u64,
}

impl Countdown {
    pub fn start(seconds: u32, now_ms: u64) -> Self {
        Self {
            remaining: seconds,
            next_tick_ms: now_ms + TICK_MS,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }

    /// Advance to `now_ms` and return how many ticks elapsed.
    ///
    /// Late polls catch up tick by tick, so the total never drifts.
    pub fn poll(&mut self, now_ms: u64) -> u32 {
        let mut ticks = 0;
        while self.remaining > 0 && now_ms >= self.next_tick_ms {
            self.remaining -= 1;
            self.next_tick_ms += TICK_MS;
            ticks += 1;
        }
        ticks
    }
}

/// Repeating tone: on for half a period, off for half a period.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Chime {
    sounding: bool,
    toggle_at_ms: u64,
}

impl Chime {
    /// Start with the tone on.
    pub fn start<B: Buzzer>(now_ms: u64, buzzer: &mut B) -> Self {
        buzzer.start_tone();
        Self {
            sounding: true,
            toggle_at_ms: now_ms + TONE_HALF_PERIOD_MS,
        }
    }

    pub fn is_sounding(&self) -> bool {
        self.sounding
    }

    pub fn poll<B: Buzzer>(&mut self, now_ms: u64, buzzer: &mut B) {
        if now_ms < self.toggle_at_ms {
            return;
        }
        // Skip whole periods missed by a late poll, keeping the phase.
        let behind = (now_ms - self.toggle_at_ms) / TONE_HALF_PERIOD_MS;
        self.toggle_at_ms += (behind + 1) * TONE_HALF_PERIOD_MS;
        if behind % 2 == 1 {
            return;
        }

        self.sounding = !self.sounding;
        if self.sounding {
            buzzer.start_tone();
        } else {
            buzzer.stop_tone();
        }
    }

    /// Silence the buzzer for good.
    pub fn stop<B: Buzzer>(self, buzzer: &mut B) {
        buzzer.stop_tone();
    }
}
