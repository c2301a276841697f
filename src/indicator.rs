use core::fmt;

use embedded_hal::digital::{PinState, StatefulOutputPin};

/// Drive level at which the LED lights up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveLevel {
    High,
    Low,
}

impl ActiveLevel {
    fn pin_state(self, on: bool) -> PinState {
        match (self, on) {
            (ActiveLevel::High, on) => PinState::from(on),
            (ActiveLevel::Low, on) => PinState::from(!on),
        }
    }
}

/// The output pin could not be driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct IndicatorError;

impl fmt::Display for IndicatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("indicator output failed")
    }
}

/// Status LED reporting which regulator supplies the core domain.
pub struct Indicator<P> {
    pin: P,
    active: ActiveLevel,
}

impl<P: StatefulOutputPin> Indicator<P> {
    pub fn new(pin: P, active: ActiveLevel) -> Self {
        Self { pin, active }
    }

    pub fn on(&mut self) -> Result<(), IndicatorError> {
        self.set(true)
    }

    pub fn off(&mut self) -> Result<(), IndicatorError> {
        self.set(false)
    }

    pub fn set(&mut self, on: bool) -> Result<(), IndicatorError> {
        self.pin
            .set_state(self.active.pin_state(on))
            .map_err(|_| IndicatorError)
    }

    pub fn toggle(&mut self) -> Result<(), IndicatorError> {
        self.pin.toggle().map_err(|_| IndicatorError)
    }

    pub fn is_on(&mut self) -> Result<bool, IndicatorError> {
        let high = self.pin.is_set_high().map_err(|_| IndicatorError)?;
        Ok(match self.active {
            ActiveLevel::High => high,
            ActiveLevel::Low => !high,
        })
    }

    pub fn release(self) -> P {
        self.pin
    }
}
