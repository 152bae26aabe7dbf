//! Screen layouts drawn through the [`Display`] capability.
//!
//! Full-screen functions clear, draw and present. `update_*` functions
//! only repaint their own region so the rest of the frame stays put.

use core::fmt::Write;

use heapless::String;

use crate::config::{
    CURSOR_Y, DIGIT_OFFSETS, MAIN_MENU_ROWS, PRESET_ROW_STEP, PRESET_ROW_Y, SCREEN_HEIGHT,
    SCREEN_WIDTH, SELECTOR_GLYPH, SELECTOR_H, SELECTOR_W, SELECTOR_X, TITLE_X, TITLE_Y, VALUE_H,
    VALUE_W, VALUE_X, VALUE_Y,
};
use crate::engine::pomodoro::PRESETS;
use crate::error::Error;
use crate::hal::Display;
use crate::time::{Digit, Time};

/// One-pixel border around the whole panel.
pub fn draw_frame<D: Display>(display: &mut D) {
    let w = SCREEN_WIDTH as u32;
    let h = SCREEN_HEIGHT as u32;
    display.fill_rect(0, 0, w, 1, true);
    display.fill_rect(0, SCREEN_HEIGHT - 1, w, 1, true);
    display.fill_rect(0, 0, 1, h, true);
    display.fill_rect(SCREEN_WIDTH - 1, 0, 1, h, true);
}

fn begin<D: Display>(display: &mut D, title: &str) {
    display.clear();
    draw_frame(display);
    display.draw_text(title, TITLE_X, TITLE_Y);
}

/// Blank framed screen with a title.
pub fn show_title<D: Display>(display: &mut D, title: &str) -> Result<(), Error> {
    begin(display, title);
    display.present()
}

pub fn show_welcome<D: Display>(display: &mut D) -> Result<(), Error> {
    begin(display, "Bem vindo ao");
    display.draw_text("Study Buddy", 10, 20);
    display.draw_text("clique A para", 10, 40);
    display.draw_text("continuar", 10, 50);
    display.present()
}

pub fn show_main_menu<D: Display>(display: &mut D, selected: usize) -> Result<(), Error> {
    display.clear();
    draw_frame(display);
    display.draw_text("Alarme", 22, 10);
    display.draw_text("de estudos", 22, 20);
    display.draw_text("Metodo", 22, 40);
    display.draw_text("pomodoro", 20, 50);
    update_main_selector(display, selected)
}

/// Move the main menu selector to `selected`.
pub fn update_main_selector<D: Display>(display: &mut D, selected: usize) -> Result<(), Error> {
    for row in MAIN_MENU_ROWS {
        display.fill_rect(SELECTOR_X, row, SELECTOR_W, SELECTOR_H, false);
    }
    let row = MAIN_MENU_ROWS[selected % MAIN_MENU_ROWS.len()];
    display.draw_text(SELECTOR_GLYPH, SELECTOR_X, row);
    display.present()
}

pub fn show_pomodoro_menu<D: Display>(display: &mut D, selected: usize) -> Result<(), Error> {
    display.clear();
    draw_frame(display);
    display.draw_text("Metodo pomodoro", 6, TITLE_Y);
    for (row, preset) in PRESETS.iter().enumerate() {
        let y = PRESET_ROW_Y + row as i32 * PRESET_ROW_STEP;
        display.draw_text(preset.label, 20, y);
    }
    update_preset_selector(display, selected)
}

/// Move the preset selector to `selected`.
pub fn update_preset_selector<D: Display>(display: &mut D, selected: usize) -> Result<(), Error> {
    let column_h = PRESET_ROW_STEP as u32 * PRESETS.len() as u32;
    display.fill_rect(SELECTOR_X, PRESET_ROW_Y, SELECTOR_W, column_h, false);
    let y = PRESET_ROW_Y + (selected % PRESETS.len()) as i32 * PRESET_ROW_STEP;
    display.draw_text(SELECTOR_GLYPH, SELECTOR_X, y);
    display.present()
}

/// Repaint the centred value box with `text`.
pub fn update_value<D: Display>(display: &mut D, text: &str) -> Result<(), Error> {
    display.fill_rect(VALUE_X, VALUE_Y, VALUE_W, VALUE_H, false);
    display.draw_text(text, VALUE_X, VALUE_Y);
    display.present()
}

/// Repaint the editor value and the cursor under the selected digit.
pub fn update_editor<D: Display>(display: &mut D, value: Time, cursor: Digit) -> Result<(), Error> {
    let mut text: String<5> = String::new();
    write!(text, "{}", value)?;
    display.fill_rect(VALUE_X, VALUE_Y, VALUE_W, VALUE_H, false);
    display.draw_text(&text, VALUE_X, VALUE_Y);
    display.fill_rect(VALUE_X, CURSOR_Y, VALUE_W, SELECTOR_H, false);
    display.draw_text(SELECTOR_GLYPH, VALUE_X + DIGIT_OFFSETS[cursor.index()], CURSOR_Y);
    display.present()
}

pub fn show_editor<D: Display>(
    display: &mut D,
    title: &str,
    value: Time,
    cursor: Digit,
) -> Result<(), Error> {
    begin(display, title);
    update_editor(display, value, cursor)
}

/// Framed title plus a value box, used by both countdown engines.
pub fn show_countdown<D: Display>(display: &mut D, title: &str, text: &str) -> Result<(), Error> {
    begin(display, title);
    update_value(display, text)
}

pub fn show_alarm_ringing<D: Display>(display: &mut D) -> Result<(), Error> {
    begin(display, "Alarme!");
    display.draw_text("Clique A para", 10, 30);
    display.draw_text("desligar", 10, 40);
    display.present()
}

/// Blank, unframed panel shown just before rebooting.
pub fn show_blank<D: Display>(display: &mut D) -> Result<(), Error> {
    display.clear();
    display.present()
}

/// Seconds as `HH:MM:SS`.
pub fn format_hms(seconds: u32) -> Result<String<8>, Error> {
    let mut text = String::new();
    write!(
        text,
        "{:02}:{:02}:{:02}",
        seconds / 3600,
        (seconds % 3600) / 60,
        seconds % 60
    )?;
    Ok(text)
}

/// Seconds as `MM:SS`; minutes are not wrapped into hours.
pub fn format_ms(seconds: u32) -> Result<String<8>, Error> {
    let mut text = String::new();
    write!(text, "{:02}:{:02}", seconds / 60, seconds % 60)?;
    Ok(text)
}
