//! Pomodoro engine: study, wait for A, break, wait for A, repeat.
//!
//! ```text
//!   ┌─▶ Study ──0 s──▶ BreakGate ──A──▶ Break ──0 s──▶ RearmGate ─┐
//!   └────────────────────────────── A ────────────────────────────┘
//! ```
//! B leaves the cycle from every phase. There is no other way out.
//!
//! LED colour tracks the phase: green while studying, red while waiting
//! at a gate (with the buzzer chiming), blue during the break.

use crate::error::Error;
use crate::hal::{Led, Surface};
use crate::ui::{screens, InputEvent};

use super::{Chime, Countdown};

/// Study/break lengths in minutes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Preset {
    pub study_minutes: u8,
    pub break_minutes: u8,
    pub label: &'static str,
}

/// Presets offered by the Pomodoro menu, in display order.
pub const PRESETS: [Preset; 4] = [
    Preset { study_minutes: 25, break_minutes: 5, label: "25/5" },
    Preset { study_minutes: 30, break_minutes: 15, label: "30/15" },
    Preset { study_minutes: 40, break_minutes: 20, label: "40/20" },
    Preset { study_minutes: 60, break_minutes: 30, label: "60/30" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PomodoroPhase {
    /// Counting down the study period.
    Study,
    /// Study over; chiming until A starts the break.
    BreakGate,
    /// Counting down the break.
    Break,
    /// Break over; chiming until A starts the next study period.
    RearmGate,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PomodoroOutcome {
    Running,
    Exited,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PomodoroEngine {
    preset: Preset,
    phase: PomodoroPhase,
    countdown: Countdown,
    chime: Option<Chime>,
    completed_cycles: u32,
}

impl PomodoroEngine {
    /// Enter the first study period.
    pub fn start<S: Surface>(preset: Preset, now_ms: u64, surface: &mut S) -> Result<Self, Error> {
        info!(
            "Pomodoro: start {}/{} min",
            preset.study_minutes, preset.break_minutes
        );
        let mut engine = Self {
            preset,
            phase: PomodoroPhase::Study,
            countdown: Countdown::start(0, now_ms),
            chime: None,
            completed_cycles: 0,
        };
        if let Err(e) = engine.enter_study(now_ms, surface) {
            // The engine is discarded, so its LED must not stay lit.
            surface.set_brightness(Led::Green, 0.0);
            return Err(e);
        }
        Ok(engine)
    }

    pub fn phase(&self) -> PomodoroPhase {
        self.phase
    }

    pub fn preset(&self) -> Preset {
        self.preset
    }

    /// Seconds left in the current study or break period.
    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining()
    }

    /// Study/break cycles finished since the engine started.
    pub fn completed_cycles(&self) -> u32 {
        self.completed_cycles
    }

    /// Advance timers to `now_ms`.
    pub fn tick<S: Surface>(&mut self, now_ms: u64, surface: &mut S) -> Result<(), Error> {
        match self.phase {
            PomodoroPhase::Study | PomodoroPhase::Break => {
                if self.countdown.poll(now_ms) == 0 {
                    return Ok(());
                }
                if !self.countdown.is_finished() {
                    let text = screens::format_ms(self.countdown.remaining())?;
                    return screens::update_value(surface, &text);
                }
                if self.phase == PomodoroPhase::Study {
                    surface.set_brightness(Led::Green, 0.0);
                    self.enter_gate(PomodoroPhase::BreakGate, "Pausa", now_ms, surface)
                } else {
                    surface.set_brightness(Led::Blue, 0.0);
                    self.enter_gate(PomodoroPhase::RearmGate, "Estudos", now_ms, surface)
                }
            }
            PomodoroPhase::BreakGate | PomodoroPhase::RearmGate => {
                if let Some(chime) = self.chime.as_mut() {
                    chime.poll(now_ms, surface);
                }
                Ok(())
            }
        }
    }

    pub fn handle<S: Surface>(
        &mut self,
        event: InputEvent,
        now_ms: u64,
        surface: &mut S,
    ) -> Result<PomodoroOutcome, Error> {
        match (self.phase, event) {
            (_, InputEvent::ButtonB) => {
                self.leave_gate(surface);
                surface.set_brightness(Led::Green, 0.0);
                surface.set_brightness(Led::Blue, 0.0);
                info!(
                    "Pomodoro: stopped after {} cycles in {}",
                    self.completed_cycles, self.phase
                );
                return Ok(PomodoroOutcome::Exited);
            }
            (PomodoroPhase::BreakGate, InputEvent::ButtonA) => {
                self.leave_gate(surface);
                self.enter_break(now_ms, surface)?;
            }
            (PomodoroPhase::RearmGate, InputEvent::ButtonA) => {
                self.leave_gate(surface);
                self.completed_cycles += 1;
                self.enter_study(now_ms, surface)?;
            }
            _ => {}
        }
        Ok(PomodoroOutcome::Running)
    }

    fn enter_study<S: Surface>(&mut self, now_ms: u64, surface: &mut S) -> Result<(), Error> {
        debug!("Pomodoro: study");
        self.phase = PomodoroPhase::Study;
        self.countdown = Countdown::start(u32::from(self.preset.study_minutes) * 60, now_ms);
        surface.set_brightness(Led::Green, 1.0);
        let text = screens::format_ms(self.countdown.remaining())?;
        screens::show_countdown(surface, "Estudos", &text)
    }

    fn enter_break<S: Surface>(&mut self, now_ms: u64, surface: &mut S) -> Result<(), Error> {
        debug!("Pomodoro: break");
        self.phase = PomodoroPhase::Break;
        self.countdown = Countdown::start(u32::from(self.preset.break_minutes) * 60, now_ms);
        surface.set_brightness(Led::Blue, 1.0);
        let text = screens::format_ms(self.countdown.remaining())?;
        screens::show_countdown(surface, "Pausa", &text)
    }

    fn enter_gate<S: Surface>(
        &mut self,
        gate: PomodoroPhase,
        title: &str,
        now_ms: u64,
        surface: &mut S,
    ) -> Result<(), Error> {
        debug!("Pomodoro: waiting at {}", gate);
        self.phase = gate;
        surface.set_brightness(Led::Red, 1.0);
        self.chime = Some(Chime::start(now_ms, surface));
        screens::show_title(surface, title)
    }

    /// Silence the chime and the red LED if a gate is active.
    fn leave_gate<S: Surface>(&mut self, surface: &mut S) {
        if let Some(chime) = self.chime.take() {
            chime.stop(surface);
            surface.set_brightness(Led::Red, 0.0);
        }
    }
}
