use crate::config::{JOYSTICK_CENTER, JOYSTICK_DEADZONE, NAV_COOLDOWN_MS};
use crate::ui::Direction;

/// Threshold two raw ADC axis readings into a direction.
///
/// The vertical axis wins when both are deflected.
pub fn classify_joystick(x: u16, y: u16) -> Direction {
    let high = JOYSTICK_CENTER + JOYSTICK_DEADZONE;
    let low = JOYSTICK_CENTER - JOYSTICK_DEADZONE;

    if y > high {
        Direction::Up
    } else if y < low {
        Direction::Down
    } else if x > high {
        Direction::Right
    } else if x < low {
        Direction::Left
    } else {
        Direction::None
    }
}

/// Move selection cursor one item up, wrapping to the last item.
pub fn select_prev(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + item_count - 1) % item_count
}

/// Move selection cursor one item down, wrapping to the first item.
pub fn select_next(selected: usize, item_count: usize) -> usize {
    if item_count == 0 {
        return 0;
    }
    (selected + 1) % item_count
}

/// Rate limiter for joystick navigation.
///
/// After a direction is accepted, further directions are ignored for
/// [`NAV_COOLDOWN_MS`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NavGate {
    ready_at_ms: u64,
}

impl NavGate {
    pub const fn new() -> Self {
        Self { ready_at_ms: 0 }
    }

    /// Returns `true` and starts a new cool-down if the gate is open.
    pub fn accept(&mut self, now_ms: u64) -> bool {
        if now_ms < self.ready_at_ms {
            return false;
        }
        self.ready_at_ms = now_ms + NAV_COOLDOWN_MS;
        true
    }
}
