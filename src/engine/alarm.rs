//! Alarm engine: count down to a target time, then ring until
//! acknowledged.
//!
//! ```text
//!   Counting ──0 s──▶ Ringing ──A──▶ Acknowledged
//!      │
//!      └──B──▶ Aborted
//! ```

use crate::error::Error;
use crate::hal::{Led, Surface};
use crate::time::Time;
use crate::ui::{screens, InputEvent};

use super::{Chime, Countdown};

/// Title kept on screen while counting down.
const COUNTDOWN_TITLE: &str = "Alarme";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmPhase {
    Counting,
    Ringing,
}

/// Result of feeding the engine time or input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AlarmOutcome {
    Running,
    /// Cancelled with B before the alarm went off.
    Aborted,
    /// Rang and was silenced with A.
    Acknowledged,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlarmEngine {
    phase: AlarmPhase,
    countdown: Countdown,
    chime: Option<Chime>,
}

impl AlarmEngine {
    /// Schedule the alarm and draw the countdown screen.
    pub fn start<S: Surface>(
        current: Time,
        target: Time,
        now_ms: u64,
        surface: &mut S,
    ) -> Result<Self, Error> {
        let minutes = current.minutes_until(target);
        info!("Alarm: {} min until it rings", minutes);

        let countdown = Countdown::start(u32::from(minutes) * 60, now_ms);
        let text = screens::format_hms(countdown.remaining())?;
        screens::show_countdown(surface, COUNTDOWN_TITLE, &text)?;

        Ok(Self {
            phase: AlarmPhase::Counting,
            countdown,
            chime: None,
        })
    }

    pub fn phase(&self) -> AlarmPhase {
        self.phase
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Advance timers to `now_ms`.
    pub fn tick<S: Surface>(&mut self, now_ms: u64, surface: &mut S) -> Result<(), Error> {
        match self.phase {
            AlarmPhase::Counting => {
                if self.countdown.poll(now_ms) == 0 {
                    return Ok(());
                }
                if self.countdown.is_finished() {
                    self.ring(now_ms, surface)
                } else {
                    let text = screens::format_hms(self.countdown.remaining())?;
                    screens::update_value(surface, &text)
                }
            }
            AlarmPhase::Ringing => {
                if let Some(chime) = self.chime.as_mut() {
                    chime.poll(now_ms, surface);
                }
                Ok(())
            }
        }
    }

    pub fn handle<S: Surface>(&mut self, event: InputEvent, surface: &mut S) -> AlarmOutcome {
        match (self.phase, event) {
            (AlarmPhase::Counting, InputEvent::ButtonB) => {
                info!("Alarm: aborted with {} s left", self.countdown.remaining());
                AlarmOutcome::Aborted
            }
            (AlarmPhase::Ringing, InputEvent::ButtonA) => {
                if let Some(chime) = self.chime.take() {
                    chime.stop(surface);
                }
                surface.set_brightness(Led::Red, 0.0);
                info!("Alarm: acknowledged");
                AlarmOutcome::Acknowledged
            }
            _ => AlarmOutcome::Running,
        }
    }

    fn ring<S: Surface>(&mut self, now_ms: u64, surface: &mut S) -> Result<(), Error> {
        info!("Alarm: ringing");
        self.phase = AlarmPhase::Ringing;
        surface.set_brightness(Led::Red, 1.0);
        self.chime = Some(Chime::start(now_ms, surface));
        screens::show_alarm_ringing(surface)
    }
}
