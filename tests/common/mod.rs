//! Host-side surface and input helpers shared by the integration tests.

#![allow(dead_code)]

use study_buddy::config::NAV_COOLDOWN_MS;
use study_buddy::hal::{Buzzer, Display, Indicators, Led, System};
use study_buddy::ui::{Buttons, Direction, Sample};
use study_buddy::{App, Error, Time};

/// Poll period used by [`Rig`], matching the firmware loop.
pub const POLL_MS: u64 = 20;

/// Records everything the core asks of the hardware.
#[derive(Debug, Default)]
pub struct Recorder {
    /// Text drawn since the last `clear`.
    pub texts: Vec<String>,
    pub clears: u32,
    pub presents: u32,
    /// Green, blue, red.
    pub leds: [f32; 3],
    pub tone_on: bool,
    pub tone_starts: u32,
    pub maintenance_calls: u32,
    /// Number of upcoming `present` calls that report a bus error.
    pub failing_presents: u32,
}

impl Recorder {
    pub fn led(&self, led: Led) -> f32 {
        self.leds[led_index(led)]
    }

    pub fn shows(&self, text: &str) -> bool {
        self.texts.iter().any(|t| t == text)
    }

    /// Most recent text drawn, normally the value box.
    pub fn last_text(&self) -> Option<&str> {
        self.texts.last().map(String::as_str)
    }
}

fn led_index(led: Led) -> usize {
    match led {
        Led::Green => 0,
        Led::Blue => 1,
        Led::Red => 2,
    }
}

impl Display for Recorder {
    fn clear(&mut self) {
        self.texts.clear();
        self.clears += 1;
    }

    fn draw_text(&mut self, text: &str, _x: i32, _y: i32) {
        self.texts.push(text.to_owned());
    }

    fn fill_rect(&mut self, _x: i32, _y: i32, _w: u32, _h: u32, _on: bool) {}

    fn present(&mut self) -> Result<(), Error> {
        if self.failing_presents > 0 {
            self.failing_presents -= 1;
            return Err(Error::Display);
        }
        self.presents += 1;
        Ok(())
    }
}

impl Indicators for Recorder {
    fn set_brightness(&mut self, led: Led, level: f32) {
        self.leds[led_index(led)] = level.clamp(0.0, 1.0);
    }
}

impl Buzzer for Recorder {
    fn start_tone(&mut self) {
        self.tone_on = true;
        self.tone_starts += 1;
    }

    fn stop_tone(&mut self) {
        self.tone_on = false;
    }
}

impl System for Recorder {
    fn enter_maintenance_mode(&mut self) {
        self.maintenance_calls += 1;
    }
}

/// An [`App`] on a [`Recorder`] with a fake millisecond clock.
pub struct Rig {
    pub app: App,
    pub surface: Recorder,
    pub now_ms: u64,
}

impl Rig {
    pub fn new() -> Self {
        let mut app = App::new();
        let mut surface = Recorder::default();
        app.start(&mut surface).expect("welcome screen");
        Self {
            app,
            surface,
            now_ms: 0,
        }
    }

    /// One loop pass, `POLL_MS` after the previous one.
    pub fn poll(&mut self, sample: Sample) {
        self.try_poll(sample).expect("update");
    }

    /// Like [`Rig::poll`], but hands back the error the loop would log.
    pub fn try_poll(&mut self, sample: Sample) -> Result<(), Error> {
        self.now_ms += POLL_MS;
        self.app.update(self.now_ms, &sample, &mut self.surface)
    }

    pub fn idle(&mut self) {
        self.poll(Sample::default());
    }

    pub fn buttons(&mut self, buttons: Buttons) {
        self.poll(Sample {
            buttons,
            direction: Direction::None,
        });
    }

    pub fn a(&mut self) {
        self.buttons(Buttons { a: true, ..Default::default() });
    }

    pub fn b(&mut self) {
        self.buttons(Buttons { b: true, ..Default::default() });
    }

    pub fn joystick_button(&mut self) {
        self.buttons(Buttons { joystick: true, ..Default::default() });
    }

    /// Push the stick once, after the navigation cool-down has expired.
    pub fn stick(&mut self, direction: Direction) {
        self.now_ms += NAV_COOLDOWN_MS;
        self.poll(Sample {
            buttons: Buttons::default(),
            direction,
        });
    }

    /// Let `secs` whole seconds pass, polling once per second.
    pub fn advance_secs(&mut self, secs: u64) {
        for _ in 0..secs {
            self.now_ms += 1000 - POLL_MS;
            self.idle();
        }
    }

    /// Let `ms` pass in a single late poll.
    pub fn advance_ms(&mut self, ms: u64) {
        self.now_ms += ms - POLL_MS;
        self.idle();
    }

    /// Dial `time` into an editor that was just opened at `00:00`, then
    /// press A.
    pub fn enter_time(&mut self, time: Time) {
        let digits = time.digits();
        for (i, &digit) in digits.iter().enumerate() {
            for _ in 0..digit {
                self.stick(Direction::Right);
            }
            if i + 1 < digits.len() {
                self.stick(Direction::Down);
            }
        }
        self.a();
    }

    /// Welcome → main menu → current time → alarm → countdown.
    pub fn start_alarm(&mut self, current: Time, target: Time) {
        self.a();
        self.a();
        self.enter_time(current);
        self.enter_time(target);
    }

    /// Welcome → main menu → Pomodoro menu, cursor on the first preset.
    pub fn open_pomodoro_menu(&mut self) {
        self.a();
        self.stick(Direction::Down);
        self.a();
    }
}

pub fn t(hours: u8, minutes: u8) -> Time {
    Time::new(hours, minutes).expect("valid time")
}
