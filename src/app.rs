//! Application state machine.
//!
//! ```text
//!   Welcome ─A─▶ MainMenu ─A(alarm)─▶ EditCurrentTime ─A─▶ EditAlarm ─A─▶ Alarm ─┐
//!                   ▲  │                     │B                 │B              │
//!                   │  └─A(pomodoro)─▶ PomodoroMenu ─A─▶ Pomodoro ─B───────────┤
//!                   └──────────────────────────────────────────────────────────┘
//! ```
//!
//! [`App::update`] is called once per main-loop pass with the current
//! time and the inputs gathered since the previous pass. Timers advance
//! first, then the inputs are handled in order. The one exception is B
//! on a counting alarm, which is handled before the tick so it cannot
//! lose a race against the final second. Inputs left over after a
//! screen change are dropped so one press never acts on two screens.
//!
//! The joystick switch is checked before anything else on every screen and
//! reboots into the USB bootloader.

use crate::editor::{EditOutcome, TimeEditor};
use crate::engine::alarm::{AlarmEngine, AlarmOutcome, AlarmPhase};
use crate::engine::pomodoro::{PomodoroEngine, PomodoroOutcome, PRESETS};
use crate::error::Error;
use crate::hal::Surface;
use crate::time::Time;
use crate::ui::input_logic::{select_next, select_prev, NavGate};
use crate::ui::{screens, InputEvent, Sample, Screen};

/// Entries of the main menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuChoice {
    Alarm = 0,
    Pomodoro = 1,
}

impl MenuChoice {
    fn toggled(self) -> Self {
        match self {
            MenuChoice::Alarm => MenuChoice::Pomodoro,
            MenuChoice::Pomodoro => MenuChoice::Alarm,
        }
    }
}

const CURRENT_TIME_TITLE: &str = "Hora Atual";
const ALARM_TITLE: &str = "Alarme";

#[derive(Clone, Copy, Debug)]
enum State {
    Welcome,
    MainMenu,
    EditCurrentTime(TimeEditor),
    EditAlarm(TimeEditor),
    PomodoroMenu,
    Alarm(AlarmEngine),
    Pomodoro(PomodoroEngine),
}

impl State {
    fn screen(&self) -> Screen {
        match self {
            State::Welcome => Screen::Welcome,
            State::MainMenu => Screen::MainMenu,
            State::EditCurrentTime(_) => Screen::EditCurrentTime,
            State::EditAlarm(_) => Screen::EditAlarm,
            State::PomodoroMenu => Screen::PomodoroMenu,
            State::Alarm(_) => Screen::Alarm,
            State::Pomodoro(_) => Screen::Pomodoro,
        }
    }
}

pub struct App {
    state: State,
    current_time: Time,
    alarm_time: Time,
    menu_choice: MenuChoice,
    preset_index: usize,
    nav: NavGate,
    maintenance: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub const fn new() -> Self {
        Self {
            state: State::Welcome,
            current_time: Time::MIDNIGHT,
            alarm_time: Time::MIDNIGHT,
            menu_choice: MenuChoice::Alarm,
            preset_index: 0,
            nav: NavGate::new(),
            maintenance: false,
        }
    }

    /// Draw the welcome screen. Call once after the surface is ready.
    pub fn start<S: Surface>(&mut self, surface: &mut S) -> Result<(), Error> {
        info!("App: welcome");
        self.state = State::Welcome;
        screens::show_welcome(surface)
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    pub fn current_time(&self) -> Time {
        self.current_time
    }

    pub fn alarm_time(&self) -> Time {
        self.alarm_time
    }

    pub fn menu_choice(&self) -> MenuChoice {
        self.menu_choice
    }

    pub fn preset_index(&self) -> usize {
        self.preset_index
    }

    /// Set once the bootloader escape hatch has fired.
    pub fn in_maintenance(&self) -> bool {
        self.maintenance
    }

    pub fn editor(&self) -> Option<&TimeEditor> {
        match &self.state {
            State::EditCurrentTime(editor) | State::EditAlarm(editor) => Some(editor),
            _ => None,
        }
    }

    pub fn alarm(&self) -> Option<&AlarmEngine> {
        match &self.state {
            State::Alarm(engine) => Some(engine),
            _ => None,
        }
    }

    pub fn pomodoro(&self) -> Option<&PomodoroEngine> {
        match &self.state {
            State::Pomodoro(engine) => Some(engine),
            _ => None,
        }
    }

    /// One pass of the control loop.
    pub fn update<S: Surface>(
        &mut self,
        now_ms: u64,
        sample: &Sample,
        surface: &mut S,
    ) -> Result<(), Error> {
        if self.maintenance {
            return Ok(());
        }

        if sample.buttons.joystick {
            return self.enter_maintenance(surface);
        }

        // B pressed during the last counted second still cancels the alarm.
        if sample.buttons.b {
            if let State::Alarm(engine) = &self.state {
                if engine.phase() == AlarmPhase::Counting {
                    return self.handle(InputEvent::ButtonB, now_ms, surface);
                }
            }
        }

        match &mut self.state {
            State::Alarm(engine) => engine.tick(now_ms, surface)?,
            State::Pomodoro(engine) => engine.tick(now_ms, surface)?,
            _ => {}
        }

        let entered = self.state.screen();
        for event in sample.events() {
            self.handle(event, now_ms, surface)?;
            if self.state.screen() != entered {
                break;
            }
        }
        Ok(())
    }

    fn handle<S: Surface>(
        &mut self,
        event: InputEvent,
        now_ms: u64,
        surface: &mut S,
    ) -> Result<(), Error> {
        match &mut self.state {
            State::Welcome => {
                if event == InputEvent::ButtonA {
                    self.enter_main_menu(surface)?;
                }
            }
            State::MainMenu => match event {
                InputEvent::ButtonA => match self.menu_choice {
                    MenuChoice::Alarm => {
                        info!("App: edit current time");
                        let editor = TimeEditor::open(CURRENT_TIME_TITLE, surface)?;
                        self.state = State::EditCurrentTime(editor);
                    }
                    MenuChoice::Pomodoro => {
                        info!("App: pomodoro menu");
                        self.state = State::PomodoroMenu;
                        screens::show_pomodoro_menu(surface, self.preset_index)?;
                    }
                },
                // B is deliberately ignored on the main menu.
                e if e.is_direction() && self.nav.accept(now_ms) => {
                    self.menu_choice = self.menu_choice.toggled();
                    screens::update_main_selector(surface, self.menu_choice as usize)?;
                }
                _ => {}
            },
            State::EditCurrentTime(editor) => match editor.handle(event, now_ms, surface)? {
                EditOutcome::Editing => {}
                EditOutcome::Cancelled => self.enter_main_menu(surface)?,
                EditOutcome::Confirmed(time) => {
                    info!("App: current time {}", time);
                    self.current_time = time;
                    let editor = TimeEditor::open(ALARM_TITLE, surface)?;
                    self.state = State::EditAlarm(editor);
                }
            },
            State::EditAlarm(editor) => match editor.handle(event, now_ms, surface)? {
                EditOutcome::Editing => {}
                EditOutcome::Cancelled => self.enter_main_menu(surface)?,
                EditOutcome::Confirmed(time) => {
                    info!("App: alarm at {}", time);
                    self.alarm_time = time;
                    let engine = AlarmEngine::start(self.current_time, time, now_ms, surface)?;
                    self.state = State::Alarm(engine);
                }
            },
            State::PomodoroMenu => match event {
                InputEvent::ButtonA => {
                    let preset = PRESETS[self.preset_index];
                    let engine = PomodoroEngine::start(preset, now_ms, surface)?;
                    self.state = State::Pomodoro(engine);
                }
                InputEvent::ButtonB => self.enter_main_menu(surface)?,
                InputEvent::Up | InputEvent::Left if self.nav.accept(now_ms) => {
                    self.preset_index = select_prev(self.preset_index, PRESETS.len());
                    screens::update_preset_selector(surface, self.preset_index)?;
                }
                InputEvent::Down | InputEvent::Right if self.nav.accept(now_ms) => {
                    self.preset_index = select_next(self.preset_index, PRESETS.len());
                    screens::update_preset_selector(surface, self.preset_index)?;
                }
                _ => {}
            },
            State::Alarm(engine) => match engine.handle(event, surface) {
                AlarmOutcome::Running => {}
                AlarmOutcome::Aborted | AlarmOutcome::Acknowledged => {
                    self.enter_main_menu(surface)?
                }
            },
            State::Pomodoro(engine) => match engine.handle(event, now_ms, surface)? {
                PomodoroOutcome::Running => {}
                PomodoroOutcome::Exited => self.enter_main_menu(surface)?,
            },
        }
        Ok(())
    }

    fn enter_main_menu<S: Surface>(&mut self, surface: &mut S) -> Result<(), Error> {
        info!("App: main menu");
        self.state = State::MainMenu;
        screens::show_main_menu(surface, self.menu_choice as usize)
    }

    fn enter_maintenance<S: Surface>(&mut self, surface: &mut S) -> Result<(), Error> {
        warn!("App: joystick pressed, rebooting to USB bootloader");
        self.maintenance = true;
        surface.stop_tone();
        screens::show_blank(surface)?;
        surface.enter_maintenance_mode();
        Ok(())
    }
}
