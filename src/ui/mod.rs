//! User interface subsystem - OLED display, buttons and joystick.
//!
//! Raw input arrives in two shapes: button edges latched by
//! [`debounce`], and a joystick position sampled every poll. Each poll is
//! folded into a [`Sample`], which the state machine consumes as an
//! ordered list of [`InputEvent`]s.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: A (confirm), B (cancel), joystick switch (bootloader)
//! - **Joystick**: two 12-bit ADC axes

pub mod debounce;
pub mod input_logic;
pub mod screens;

#[cfg(feature = "embedded")]
pub mod buttons;
#[cfg(feature = "embedded")]
pub mod display;
#[cfg(feature = "embedded")]
pub mod joystick;

use heapless::Vec;

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    /// Splash - waits for A.
    Welcome,
    /// Alarm / Pomodoro chooser.
    MainMenu,
    /// Editor for the current wall-clock time.
    EditCurrentTime,
    /// Editor for the alarm target.
    EditAlarm,
    /// Preset chooser.
    PomodoroMenu,
    /// Alarm engine running (countdown or ringing).
    Alarm,
    /// Pomodoro engine running.
    Pomodoro,
}

/// Joystick position after thresholding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    #[default]
    None,
    Up,
    Down,
    Left,
    Right,
}

/// Button presses consumed by one poll.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons {
    pub a: bool,
    pub b: bool,
    pub joystick: bool,
}

/// A single debounced input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    ButtonA,
    ButtonB,
    ButtonJoystick,
    Up,
    Down,
    Left,
    Right,
    None,
}

impl From<Direction> for InputEvent {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::None => InputEvent::None,
            Direction::Up => InputEvent::Up,
            Direction::Down => InputEvent::Down,
            Direction::Left => InputEvent::Left,
            Direction::Right => InputEvent::Right,
        }
    }
}

impl InputEvent {
    pub fn is_direction(self) -> bool {
        matches!(
            self,
            InputEvent::Up | InputEvent::Down | InputEvent::Left | InputEvent::Right
        )
    }
}

/// Everything read in one pass of the main loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sample {
    pub buttons: Buttons,
    pub direction: Direction,
}

impl Sample {
    /// Events in handling order: the bootloader switch first, then the
    /// stick, then A, then B. Empty when nothing happened.
    pub fn events(&self) -> Vec<InputEvent, 4> {
        let mut events = Vec::new();
        if self.buttons.joystick {
            let _ = events.push(InputEvent::ButtonJoystick);
        }
        if self.direction != Direction::None {
            let _ = events.push(self.direction.into());
        }
        if self.buttons.a {
            let _ = events.push(InputEvent::ButtonA);
        }
        if self.buttons.b {
            let _ = events.push(InputEvent::ButtonB);
        }
        events
    }
}
