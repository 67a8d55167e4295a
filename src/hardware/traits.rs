/// Logical LED state, independent of how the LED is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedState {
    On,
    Off,
}

impl LedState {
    pub fn is_on(self) -> bool {
        self == LedState::On
    }
}

/// Which pin level lights the LED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// LED between pin and ground, lit when the pin is high.
    ActiveHigh,
    /// LED between supply and pin, lit when the pin is low.
    ActiveLow,
}

impl Polarity {
    /// Pin level (`true` = high) that puts the LED into `state`.
    pub fn is_high(self, state: LedState) -> bool {
        match self {
            Polarity::ActiveHigh => state.is_on(),
            Polarity::ActiveLow => !state.is_on(),
        }
    }
}

pub trait Led {
    fn on(&mut self);
    fn off(&mut self);
    fn toggle(&mut self);

    fn set(&mut self, state: LedState) {
        match state {
            LedState::On => self.on(),
            LedState::Off => self.off(),
        }
    }
}
