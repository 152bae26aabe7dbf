//! Capability traits between the control core and the board.
//!
//! The core never touches pixels, PWM slices or ROM calls directly; it only
//! sees these traits. `board.rs` implements them for the RP2040 and the
//! host tests implement them with recorders.

use crate::error::Error;

/// Monochrome display with a back buffer.
///
/// Drawing calls only touch the buffer; nothing is visible until
/// [`Display::present`] pushes it to the panel.
pub trait Display {
    /// Blank the whole buffer.
    fn clear(&mut self);

    /// Draw `text` with its top-left corner at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32);

    /// Set every pixel in the rectangle to `on`.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, on: bool);

    /// Push the buffer to the panel.
    fn present(&mut self) -> Result<(), Error>;
}

/// Channels of the RGB indicator LED.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Led {
    Green,
    Blue,
    Red,
}

pub trait Indicators {
    /// `level` is clamped to `0.0..=1.0`.
    fn set_brightness(&mut self, led: Led, level: f32);
}

/// Piezo buzzer. The on/off pattern is timed by the caller.
pub trait Buzzer {
    fn start_tone(&mut self);
    fn stop_tone(&mut self);
}

/// System-level escape hatch.
pub trait System {
    /// Reboot into the USB mass-storage bootloader. Does not return on
    /// hardware.
    fn enter_maintenance_mode(&mut self);
}

/// Everything the application state machine drives.
pub trait Surface: Display + Indicators + Buzzer + System {}

impl<T: Display + Indicators + Buzzer + System> Surface for T {}
