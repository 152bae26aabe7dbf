//! Analog joystick on ADC0 (X) and ADC1 (Y).

use embassy_rp::adc::{Adc, Async, Channel};

use crate::error::Error;
use crate::ui::input_logic::classify_joystick;
use crate::ui::Direction;

pub struct Joystick {
    adc: Adc<'static, Async>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl Joystick {
    pub fn new(adc: Adc<'static, Async>, x: Channel<'static>, y: Channel<'static>) -> Self {
        Self { adc, x, y }
    }

    /// Sample both axes and threshold them.
    pub async fn read(&mut self) -> Result<Direction, Error> {
        let x = self.adc.read(&mut self.x).await.map_err(|_| Error::Adc)?;
        let y = self.adc.read(&mut self.y).await.map_err(|_| Error::Adc)?;
        Ok(classify_joystick(x, y))
    }
}
