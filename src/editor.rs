//! Digit-wheel time editor.
//!
//! Up/Down move the cursor between the four digits, Left/Right step the
//! selected digit through [`Time::adjust`], A confirms, B cancels. The
//! value and cursor are repainted after every accepted direction.

use crate::error::Error;
use crate::hal::Display;
use crate::time::{Digit, Step, Time};
use crate::ui::input_logic::NavGate;
use crate::ui::{screens, InputEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EditOutcome {
    Editing,
    Confirmed(Time),
    Cancelled,
}

#[derive(Clone, Copy, Debug)]
pub struct TimeEditor {
    title: &'static str,
    value: Time,
    cursor: Digit,
    nav: NavGate,
}

impl TimeEditor {
    /// Start at `00:00` on hour-tens and draw the editor screen.
    pub fn open<D: Display>(title: &'static str, display: &mut D) -> Result<Self, Error> {
        let editor = Self {
            title,
            value: Time::MIDNIGHT,
            cursor: Digit::HourTens,
            nav: NavGate::new(),
        };
        screens::show_editor(display, title, editor.value, editor.cursor)?;
        Ok(editor)
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn value(&self) -> Time {
        self.value
    }

    pub fn cursor(&self) -> Digit {
        self.cursor
    }

    pub fn handle<D: Display>(
        &mut self,
        event: InputEvent,
        now_ms: u64,
        display: &mut D,
    ) -> Result<EditOutcome, Error> {
        match event {
            InputEvent::ButtonA => return Ok(EditOutcome::Confirmed(self.value)),
            InputEvent::ButtonB => return Ok(EditOutcome::Cancelled),
            e if e.is_direction() => {
                if !self.nav.accept(now_ms) {
                    return Ok(EditOutcome::Editing);
                }
                match e {
                    InputEvent::Up => self.cursor = self.cursor.prev(),
                    InputEvent::Down => self.cursor = self.cursor.next(),
                    InputEvent::Left => self.value = self.value.adjust(self.cursor, Step::Decrement),
                    _ => self.value = self.value.adjust(self.cursor, Step::Increment),
                }
                debug!("Editor: {} digit {}", self.value, self.cursor);
                screens::update_editor(display, self.value, self.cursor)?;
            }
            _ => {}
        }
        Ok(EditOutcome::Editing)
    }
}
