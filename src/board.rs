//! STM32F103C8 "Blue Pill" wiring.
//!
//! Onboard LED: PC13, between 3V3 and the pin, so it lights when PC13 is
//! driven low. On another board change [`led_pin!`] and [`LED_POLARITY`];
//! the logged pin name is read back from the selected peripheral.

use core::fmt;

use crate::hardware::traits::Polarity;

pub const NAME: &str = "STM32F103C8 Blue Pill";

pub const LED_POLARITY: Polarity = Polarity::ActiveLow;

/// Picks the onboard LED out of the `embassy_stm32::init` peripherals.
///
/// This is the only place the LED pin is named.
#[macro_export]
macro_rules! led_pin {
    ($p:ident) => {
        $p.PC13
    };
}

pub use crate::led_pin;

/// Port and pin index of a GPIO, as the HAL numbers them (port 0 = A).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinName {
    port: u8,
    pin: u8,
}

impl PinName {
    pub const fn new(port: u8, pin: u8) -> Self {
        Self { port, pin }
    }

    /// Port letter, `'A'` for port 0.
    pub fn port(&self) -> char {
        char::from(b'A' + self.port)
    }

    pub fn pin(&self) -> u8 {
        self.pin
    }
}

impl fmt::Display for PinName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}{}", self.port(), self.pin)
    }
}
