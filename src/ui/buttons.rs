//! GPIO button edge watcher.
//!
//! Three physical buttons (active-low with internal pull-up):
//!   - A        - confirm / acknowledge
//!   - B        - cancel
//!   - JOYSTICK - reboot to USB bootloader
//!
//! Each button is handled by an async task that waits for a falling edge
//! and hands its timestamp to the button's [`EdgeLatch`]. The task never
//! blocks on anything but the pin; the poll loop consumes the latch.

use defmt::{debug, info};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use crate::ui::debounce::{ButtonId, EdgeLatch};

/// Run a single button edge loop.
pub async fn button_task(mut btn: Input<'static>, id: ButtonId, latch: &'static EdgeLatch) -> ! {
    info!("Button: watching {}", id);

    loop {
        // Falling edge = press (active-low).
        btn.wait_for_falling_edge().await;

        let now_ms = Instant::now().as_millis() as u32;
        if latch.on_edge(now_ms) {
            debug!("Button: {} at {} ms", id, now_ms);
        }
    }
}
