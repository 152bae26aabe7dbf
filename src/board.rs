//! RP2040 implementation of the capability traits.
//!
//! PWM slice 5 drives the buzzer (A) and the green LED (B); slice 6 drives
//! the blue (A) and red (B) LEDs. Both slices share one wrap and divider
//! so the buzzer pitch and LED refresh are fixed at about 2 kHz and only
//! the compare levels change at run time.

use defmt::{debug, warn};
use embassy_rp::pwm::{Config, Pwm};

use crate::config::{BUZZER_DUTY, PWM_DIVIDER, PWM_TOP};
use crate::error::Error;
use crate::hal::{self, Led};
use crate::ui::display::Oled;

/// Shared slice configuration with both outputs off.
pub fn pwm_config() -> Config {
    let mut config = Config::default();
    config.top = PWM_TOP;
    config.divider = PWM_DIVIDER.into();
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

fn level_to_compare(level: f32) -> u16 {
    (level.clamp(0.0, 1.0) * PWM_TOP as f32) as u16
}

pub struct Board<I2C> {
    oled: Oled<I2C>,
    buzzer_green: Pwm<'static>,
    buzzer_green_cfg: Config,
    blue_red: Pwm<'static>,
    blue_red_cfg: Config,
}

impl<I2C> Board<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    pub fn new(oled: Oled<I2C>, buzzer_green: Pwm<'static>, blue_red: Pwm<'static>) -> Self {
        Self {
            oled,
            buzzer_green,
            buzzer_green_cfg: pwm_config(),
            blue_red,
            blue_red_cfg: pwm_config(),
        }
    }
}

impl<I2C> hal::Display for Board<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn clear(&mut self) {
        hal::Display::clear(&mut self.oled);
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        hal::Display::draw_text(&mut self.oled, text, x, y);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, on: bool) {
        hal::Display::fill_rect(&mut self.oled, x, y, w, h, on);
    }

    fn present(&mut self) -> Result<(), Error> {
        hal::Display::present(&mut self.oled)
    }
}

impl<I2C> hal::Indicators for Board<I2C> {
    fn set_brightness(&mut self, led: Led, level: f32) {
        let compare = level_to_compare(level);
        debug!("LED {}: {}", led, compare);
        match led {
            Led::Green => {
                self.buzzer_green_cfg.compare_b = compare;
                self.buzzer_green.set_config(&self.buzzer_green_cfg);
            }
            Led::Blue => {
                self.blue_red_cfg.compare_a = compare;
                self.blue_red.set_config(&self.blue_red_cfg);
            }
            Led::Red => {
                self.blue_red_cfg.compare_b = compare;
                self.blue_red.set_config(&self.blue_red_cfg);
            }
        }
    }
}

impl<I2C> hal::Buzzer for Board<I2C> {
    fn start_tone(&mut self) {
        self.buzzer_green_cfg.compare_a = BUZZER_DUTY;
        self.buzzer_green.set_config(&self.buzzer_green_cfg);
    }

    fn stop_tone(&mut self) {
        self.buzzer_green_cfg.compare_a = 0;
        self.buzzer_green.set_config(&self.buzzer_green_cfg);
    }
}

impl<I2C> hal::System for Board<I2C> {
    fn enter_maintenance_mode(&mut self) {
        warn!("Rebooting into USB bootloader");
        embassy_rp::rom_data::reset_to_usb_boot(0, 0);
        loop {
            cortex_m::asm::wfi();
        }
    }
}
