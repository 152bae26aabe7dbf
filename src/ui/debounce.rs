//! Edge latches shared between the button edge path and the poll loop.
//!
//! Each button owns one [`EdgeLatch`]. The edge path (an interrupt or the
//! async edge task) is the only writer of the timestamp and the only one
//! that raises `pending`; the poll loop is the only one that clears it.
//! With one writer per field no lock is needed, only atomics.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

use crate::config::BUTTON_DEBOUNCE_MS;
use crate::ui::Buttons;

/// Physical buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonId {
    A,
    B,
    Joystick,
}

/// Debounce state and pending flag for one button.
pub struct EdgeLatch {
    /// Device time (ms, wrapping) of the last accepted edge.
    last_accepted_ms: AtomicU32,
    /// No edge has been accepted yet.
    fresh: AtomicBool,
    pending: AtomicBool,
}

impl EdgeLatch {
    pub const fn new() -> Self {
        Self {
            last_accepted_ms: AtomicU32::new(0),
            fresh: AtomicBool::new(true),
            pending: AtomicBool::new(false),
        }
    }

    /// Record a falling edge seen at `now_ms`.
    ///
    /// Never blocks. Returns `true` if the edge was accepted.
    pub fn on_edge(&self, now_ms: u32) -> bool {
        let last = self.last_accepted_ms.load(Ordering::Acquire);
        let fresh = self.fresh.load(Ordering::Acquire);
        if !fresh && now_ms.wrapping_sub(last) < BUTTON_DEBOUNCE_MS {
            return false;
        }
        self.last_accepted_ms.store(now_ms, Ordering::Release);
        self.fresh.store(false, Ordering::Release);
        self.pending.store(true, Ordering::Release);
        true
    }

    /// Consume the pending press, if any.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

impl Default for EdgeLatch {
    fn default() -> Self {
        Self::new()
    }
}

/// The three button latches of the device.
pub struct ButtonLatches {
    a: EdgeLatch,
    b: EdgeLatch,
    joystick: EdgeLatch,
}

impl ButtonLatches {
    pub const fn new() -> Self {
        Self {
            a: EdgeLatch::new(),
            b: EdgeLatch::new(),
            joystick: EdgeLatch::new(),
        }
    }

    pub fn latch(&self, id: ButtonId) -> &EdgeLatch {
        match id {
            ButtonId::A => &self.a,
            ButtonId::B => &self.b,
            ButtonId::Joystick => &self.joystick,
        }
    }

    /// Consume every pending press.
    pub fn poll(&self) -> Buttons {
        Buttons {
            a: self.a.take(),
            b: self.b.take(),
            joystick: self.joystick.take(),
        }
    }
}

impl Default for ButtonLatches {
    fn default() -> Self {
        Self::new()
    }
}
