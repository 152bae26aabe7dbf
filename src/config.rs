//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and screen layout
//! constants live here so they can be tuned in one place.

// Timing

/// Minimum spacing between two accepted edges on the same button (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 200;

/// Cool-down after an accepted joystick direction (ms).
///
/// Holding the stick therefore repeats roughly five times a second.
pub const NAV_COOLDOWN_MS: u64 = 200;

/// Length of one countdown tick (ms).
pub const TICK_MS: u64 = 1000;

/// Buzzer pattern: tone on for this long, then silent for this long (ms).
pub const TONE_HALF_PERIOD_MS: u64 = 500;

/// Main loop poll interval (ms).
pub const POLL_INTERVAL_MS: u64 = 20;

// Joystick

/// Full-scale reading of the 12-bit ADC.
pub const ADC_MAX: u16 = 4095;

/// Resting reading of either joystick axis.
pub const JOYSTICK_CENTER: u16 = 2048;

/// Distance from centre a reading must exceed to count as a direction.
pub const JOYSTICK_DEADZONE: u16 = 1000;

// GPIO pin assignments (BitDogLab / Pico W defaults)
//
// These are logical names; the concrete `embassy_rp::peripherals::*` are
// picked in `main.rs`.
//
//   Button A          → GP5
//   Button B          → GP6
//   Joystick switch   → GP22
//   Joystick X (ADC0) → GP26
//   Joystick Y (ADC1) → GP27
//   Buzzer            → GP10  (PWM5 A)
//   LED green         → GP11  (PWM5 B)
//   LED blue          → GP12  (PWM6 A)
//   LED red           → GP13  (PWM6 B)
//   I²C1 SDA          → GP14
//   I²C1 SCL          → GP15

// PWM

/// Counter wrap value shared by the LED and buzzer slices.
pub const PWM_TOP: u16 = 1000;

/// Integer clock divider: 125 MHz / 62 / 1001 ≈ 2 kHz buzzer pitch.
pub const PWM_DIVIDER: u8 = 62;

/// Buzzer compare level while the tone is on (50 % duty).
pub const BUZZER_DUTY: u16 = PWM_TOP / 2;

// Display

/// SSD1306 I²C address.
pub const OLED_I2C_ADDRESS: u8 = 0x3C;

/// I²C bus clock (Hz).
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

pub const SCREEN_WIDTH: i32 = 128;
pub const SCREEN_HEIGHT: i32 = 64;

/// Top-left of every screen title.
pub const TITLE_X: i32 = 10;
pub const TITLE_Y: i32 = 5;

/// Centred box that holds a time value or countdown; the only region
/// redrawn while a timer runs.
pub const VALUE_W: u32 = 40;
pub const VALUE_H: u32 = 16;
pub const VALUE_X: i32 = (SCREEN_WIDTH - VALUE_W as i32) / 2;
pub const VALUE_Y: i32 = 30;

/// Row under the value where the editor cursor glyph sits.
pub const CURSOR_Y: i32 = VALUE_Y + VALUE_H as i32;

/// Horizontal offset of each `HH:MM` digit inside the value box.
pub const DIGIT_OFFSETS: [i32; 4] = [0, 8, 24, 32];

/// Column of the menu selector glyph.
pub const SELECTOR_X: i32 = 10;
pub const SELECTOR_W: u32 = 10;
pub const SELECTOR_H: u32 = 8;

/// Main menu selector rows for "Alarme" and "Metodo".
pub const MAIN_MENU_ROWS: [i32; 2] = [10, 40];

/// First Pomodoro preset row and the spacing between rows.
pub const PRESET_ROW_Y: i32 = 20;
pub const PRESET_ROW_STEP: i32 = 10;

/// Glyph used for both the menu selector and the editor cursor.
pub const SELECTOR_GLYPH: &str = ":";
