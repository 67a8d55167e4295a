use super::traits::{Led, LedState, Polarity};
use crate::board::PinName;
use embassy_stm32::gpio::{Level, Output, Pin};

impl Polarity {
    /// Pin level to drive for `state`, e.g. the initial level of the `Output`.
    pub fn level(self, state: LedState) -> Level {
        Level::from(self.is_high(state))
    }
}

/// LED on an embassy-stm32 push-pull output.
pub struct GpioLed<'d> {
    pin: Output<'d>,
    polarity: Polarity,
}

impl<'d> GpioLed<'d> {
    pub fn new(pin: Output<'d>, polarity: Polarity) -> Self {
        Self { pin, polarity }
    }
}

impl<'d> Led for GpioLed<'d> {
    fn on(&mut self) {
        self.pin.set_level(self.polarity.level(LedState::On));
    }

    fn off(&mut self) {
        self.pin.set_level(self.polarity.level(LedState::Off));
    }

    fn toggle(&mut self) {
        self.pin.toggle();
    }
}

impl PinName {
    /// Name of the peripheral actually wired up, before it becomes an `Output`.
    pub fn of(pin: &impl Pin) -> Self {
        PinName::new(pin.port(), pin.pin())
    }
}
