//! Control core of the Study Buddy handheld: menus, a time editor, an
//! alarm and a Pomodoro timer on an RP2040 with an SSD1306 OLED.
//!
//! Everything except the board layer is plain `no_std` logic that runs on
//! the host, driven by injected millisecond timestamps and the capability
//! traits in [`hal`].
//!
//! Usage: `cargo test` on the host, or
//! `cargo build --release --features embedded --target thumbv6m-none-eabi`
//! for the firmware.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod app;
pub mod config;
pub mod editor;
pub mod engine;
pub mod error;
pub mod hal;
pub mod time;
pub mod ui;

#[cfg(feature = "embedded")]
pub mod board;

pub use app::{App, MenuChoice};
pub use error::Error;
pub use time::Time;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests - pure logic, no surface
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::engine::{Chime, Countdown};
    use super::hal::Buzzer;
    use super::time::{Digit, Step, Time};
    use super::ui::debounce::{ButtonId, ButtonLatches, EdgeLatch};
    use super::ui::input_logic::{classify_joystick, select_next, select_prev, NavGate};
    use super::ui::screens::{format_hms, format_ms};
    use super::ui::{Buttons, Direction, InputEvent, Sample};

    fn t(h: u8, m: u8) -> Time {
        Time::new(h, m).unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════
    // Time Value Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn time_rejects_out_of_range() {
        assert!(Time::new(24, 0).is_none());
        assert!(Time::new(0, 60).is_none());
        assert_eq!(Time::new(23, 59).unwrap().total_minutes(), 1439);
    }

    #[test]
    fn time_formats_zero_padded() {
        assert_eq!(format!("{}", t(7, 5)), "07:05");
        assert_eq!(format!("{}", Time::MIDNIGHT), "00:00");
    }

    #[test]
    fn minutes_until_wraps_past_midnight() {
        assert_eq!(t(23, 50).minutes_until(t(0, 10)), 20);
    }

    #[test]
    fn minutes_until_without_wrap() {
        assert_eq!(t(8, 0).minutes_until(t(8, 1)), 1);
    }

    #[test]
    fn minutes_until_same_time_is_a_full_day() {
        assert_eq!(t(12, 30).minutes_until(t(12, 30)), 1440);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Digit Wheel Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn minute_units_decrement_wraps_to_nine() {
        let v = t(0, 0).adjust(Digit::MinuteUnits, Step::Decrement);
        assert_eq!(v, t(0, 9));
    }

    #[test]
    fn minute_tens_wraps_both_ways() {
        assert_eq!(t(0, 3).adjust(Digit::MinuteTens, Step::Decrement), t(0, 53));
        assert_eq!(t(0, 53).adjust(Digit::MinuteTens, Step::Increment), t(0, 3));
    }

    #[test]
    fn hour_tens_increment_wraps_to_zero() {
        assert_eq!(t(21, 0).adjust(Digit::HourTens, Step::Increment), t(1, 0));
    }

    #[test]
    fn hour_tens_decrement_wraps_to_two() {
        assert_eq!(t(1, 0).adjust(Digit::HourTens, Step::Decrement), t(21, 0));
    }

    #[test]
    fn raising_hour_tens_to_two_clamps_units() {
        assert_eq!(t(17, 45).adjust(Digit::HourTens, Step::Increment), t(23, 45));
        assert_eq!(t(9, 0).adjust(Digit::HourTens, Step::Decrement), t(23, 0));
    }

    #[test]
    fn hour_units_capped_at_three_under_twenty() {
        assert_eq!(t(23, 0).adjust(Digit::HourUnits, Step::Increment), t(20, 0));
        assert_eq!(t(20, 0).adjust(Digit::HourUnits, Step::Decrement), t(23, 0));
    }

    #[test]
    fn hour_units_full_range_below_twenty() {
        assert_eq!(t(19, 0).adjust(Digit::HourUnits, Step::Increment), t(10, 0));
        assert_eq!(t(0, 0).adjust(Digit::HourUnits, Step::Decrement), t(9, 0));
    }

    #[test]
    fn digit_cursor_wraps() {
        assert_eq!(Digit::HourTens.prev(), Digit::MinuteUnits);
        assert_eq!(Digit::MinuteUnits.next(), Digit::HourTens);
        assert_eq!(Digit::HourUnits.next(), Digit::MinuteTens);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Debounce Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn edges_inside_window_count_once() {
        let latch = EdgeLatch::new();
        assert!(latch.on_edge(1_000));
        assert!(!latch.on_edge(1_199));
        assert!(latch.take());
        assert!(!latch.take());
    }

    #[test]
    fn edges_at_window_boundary_both_count() {
        let latch = EdgeLatch::new();
        assert!(latch.on_edge(1_000));
        assert!(latch.take());
        assert!(latch.on_edge(1_200));
        assert!(latch.take());
    }

    #[test]
    fn first_edge_right_after_boot_is_accepted() {
        let latch = EdgeLatch::new();
        assert!(latch.on_edge(5));
    }

    #[test]
    fn debounce_survives_clock_wrap() {
        let latch = EdgeLatch::new();
        assert!(latch.on_edge(u32::MAX - 50));
        assert!(!latch.on_edge(100));
        assert!(latch.on_edge(150));
    }

    #[test]
    fn buttons_debounce_independently() {
        let latches = ButtonLatches::new();
        assert!(latches.latch(ButtonId::A).on_edge(1_000));
        assert!(latches.latch(ButtonId::B).on_edge(1_010));
        assert_eq!(
            latches.poll(),
            Buttons { a: true, b: true, joystick: false }
        );
        assert_eq!(latches.poll(), Buttons::default());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Joystick & Navigation Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn joystick_center_and_deadzone_edges() {
        assert_eq!(classify_joystick(2048, 2048), Direction::None);
        assert_eq!(classify_joystick(3048, 1048), Direction::None);
        assert_eq!(classify_joystick(2048, 3049), Direction::Up);
        assert_eq!(classify_joystick(2048, 1047), Direction::Down);
        assert_eq!(classify_joystick(3049, 2048), Direction::Right);
        assert_eq!(classify_joystick(1047, 2048), Direction::Left);
    }

    #[test]
    fn joystick_vertical_wins_over_horizontal() {
        assert_eq!(classify_joystick(4095, 4095), Direction::Up);
        assert_eq!(classify_joystick(0, 0), Direction::Down);
    }

    #[test]
    fn selection_wraps_both_ways() {
        assert_eq!(select_prev(0, 4), 3);
        assert_eq!(select_next(3, 4), 0);
        assert_eq!(select_next(0, 2), 1);
        assert_eq!(select_prev(0, 0), 0);
    }

    #[test]
    fn nav_gate_enforces_cooldown() {
        let mut gate = NavGate::new();
        assert!(gate.accept(0));
        assert!(!gate.accept(199));
        assert!(gate.accept(200));
    }

    #[test]
    fn sample_events_are_ordered() {
        let sample = Sample {
            buttons: Buttons { a: true, b: true, joystick: true },
            direction: Direction::Left,
        };
        assert_eq!(
            sample.events().as_slice(),
            &[
                InputEvent::ButtonJoystick,
                InputEvent::Left,
                InputEvent::ButtonA,
                InputEvent::ButtonB
            ]
        );
        assert!(Sample::default().events().is_empty());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Countdown & Chime Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn countdown_ticks_once_per_second() {
        let mut c = Countdown::start(3, 10_000);
        assert_eq!(c.poll(10_999), 0);
        assert_eq!(c.poll(11_000), 1);
        assert_eq!(c.remaining(), 2);
        assert_eq!(c.poll(13_500), 2);
        assert!(c.is_finished());
        assert_eq!(c.poll(99_000), 0);
    }

    #[derive(Default)]
    struct ToneLog {
        on: bool,
        starts: u32,
        calls: u32,
    }

    impl Buzzer for ToneLog {
        fn start_tone(&mut self) {
            self.on = true;
            self.starts += 1;
            self.calls += 1;
        }
        fn stop_tone(&mut self) {
            self.on = false;
            self.calls += 1;
        }
    }

    #[test]
    fn chime_alternates_every_half_second() {
        let mut buzzer = ToneLog::default();
        let mut chime = Chime::start(0, &mut buzzer);
        assert!(buzzer.on);
        chime.poll(499, &mut buzzer);
        assert!(buzzer.on);
        chime.poll(500, &mut buzzer);
        assert!(!buzzer.on);
        chime.poll(1_000, &mut buzzer);
        assert!(buzzer.on);
        chime.stop(&mut buzzer);
        assert!(!buzzer.on);
    }

    #[test]
    fn chime_leaves_buzzer_alone_when_late_poll_lands_on_same_state() {
        let mut buzzer = ToneLog::default();
        let mut chime = Chime::start(0, &mut buzzer);
        chime.poll(500, &mut buzzer);
        assert!(!buzzer.on);
        assert_eq!(buzzer.calls, 2);
        // Missed the 1000 and 1500 toggles: still off, no buzzer call.
        chime.poll(1_700, &mut buzzer);
        assert!(!chime.is_sounding());
        assert_eq!(buzzer.calls, 2);
        chime.poll(2_000, &mut buzzer);
        assert!(buzzer.on);
        assert_eq!(buzzer.calls, 3);
    }

    #[test]
    fn chime_keeps_phase_after_late_poll() {
        let mut buzzer = ToneLog::default();
        let mut chime = Chime::start(0, &mut buzzer);
        // 1.2 s later: toggled at 500 and 1000, so back on.
        chime.poll(1_200, &mut buzzer);
        assert!(chime.is_sounding());
        assert_eq!(buzzer.starts, 1);
        chime.poll(1_500, &mut buzzer);
        assert!(!chime.is_sounding());
    }

    // ════════════════════════════════════════════════════════════════════════
    // Formatting Tests
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn countdown_text_formats() {
        assert_eq!(format_hms(20 * 60).unwrap().as_str(), "00:20:00");
        assert_eq!(format_hms(1440 * 60).unwrap().as_str(), "24:00:00");
        assert_eq!(format_ms(1500).unwrap().as_str(), "25:00");
        assert_eq!(format_ms(3600).unwrap().as_str(), "60:00");
        assert_eq!(format_ms(59).unwrap().as_str(), "00:59");
    }
}
