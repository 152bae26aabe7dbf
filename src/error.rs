//! Unified error type for study-buddy.
//!
//! The control logic itself cannot fail; every variant comes from the
//! hardware surface underneath it. No `alloc`, all variants are fieldless.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// I²C transaction to the OLED failed.
    Display,

    /// Joystick ADC conversion failed.
    Adc,

    /// Formatted text did not fit its fixed-size buffer.
    TextOverflow,
}

impl From<core::fmt::Error> for Error {
    fn from(_: core::fmt::Error) -> Self {
        Error::TextOverflow
    }
}
