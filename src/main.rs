//! Study Buddy firmware entry point (RP2040).
//!
//! Spawns one edge-watcher task per button, then runs the control loop:
//! every [`POLL_INTERVAL_MS`] it drains the button latches, samples the
//! joystick and hands both to the application state machine.

#![no_std]
#![no_main]

use defmt::{info, warn};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::Pwm;
use embassy_time::{Duration, Instant, Ticker};
use {defmt_rtt as _, panic_probe as _};

use study_buddy::board::{pwm_config, Board};
use study_buddy::config::{I2C_FREQUENCY_HZ, POLL_INTERVAL_MS};
use study_buddy::ui::buttons;
use study_buddy::ui::debounce::{ButtonId, ButtonLatches};
use study_buddy::ui::display;
use study_buddy::ui::joystick::Joystick;
use study_buddy::ui::{Direction, Sample};
use study_buddy::App;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => adc::InterruptHandler;
});

/// Pending presses, written by the button tasks, drained by the loop.
static BUTTONS: ButtonLatches = ButtonLatches::new();

#[embassy_executor::task(pool_size = 3)]
async fn button(pin: Input<'static>, id: ButtonId) -> ! {
    buttons::button_task(pin, id, BUTTONS.latch(id)).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Study Buddy starting...");

    let p = embassy_rp::init(Default::default());

    // Buttons
    let a = Input::new(p.PIN_5, Pull::Up);
    let b = Input::new(p.PIN_6, Pull::Up);
    let js = Input::new(p.PIN_22, Pull::Up);
    spawner.must_spawn(button(a, ButtonId::A));
    spawner.must_spawn(button(b, ButtonId::B));
    spawner.must_spawn(button(js, ButtonId::Joystick));

    // Joystick
    let adc = Adc::new(p.ADC, Irqs, adc::Config::default());
    let x = Channel::new_pin(p.PIN_26, Pull::None);
    let y = Channel::new_pin(p.PIN_27, Pull::None);
    let mut joystick = Joystick::new(adc, x, y);

    // LEDs + buzzer
    let buzzer_green = Pwm::new_output_ab(p.PWM_SLICE5, p.PIN_10, p.PIN_11, pwm_config());
    let blue_red = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, pwm_config());

    // OLED
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = I2C_FREQUENCY_HZ;
    let bus = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let oled = match display::init(bus) {
        Ok(oled) => oled,
        Err(e) => {
            // Nothing useful can run without a screen.
            defmt::panic!("OLED init failed: {}", e);
        }
    };

    let mut board = Board::new(oled, buzzer_green, blue_red);
    let mut app = App::new();
    if let Err(e) = app.start(&mut board) {
        warn!("Welcome screen: {}", e);
    }
    info!("Ready");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    loop {
        let direction = match joystick.read().await {
            Ok(direction) => direction,
            Err(e) => {
                warn!("Joystick: {}", e);
                Direction::None
            }
        };
        let sample = Sample {
            buttons: BUTTONS.poll(),
            direction,
        };

        let now_ms = Instant::now().as_millis();
        if let Err(e) = app.update(now_ms, &sample, &mut board) {
            warn!("Update on {}: {}", app.screen(), e);
        }

        ticker.next().await;
    }
}
