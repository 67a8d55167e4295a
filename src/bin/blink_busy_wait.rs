//! STM32 Blue Pill Flash Self-Test (busy-wait)
//!
//! Same pattern as `blink`, without the async executor: a bare
//! `cortex-m-rt` entry point and blocking delays that spin on the embassy
//! time driver. Useful when the executor itself is suspect.
//!
//! Build & flash:
//!   cargo run --release --features stm32 --target thumbv7m-none-eabi --bin blink_busy_wait

#![no_std] // Required for embedded development
#![no_main] // Bypass standard main function

use cortex_m_rt::entry; // Reset handler entry point
use defmt::info; // Startup logging
use embassy_stm32::gpio::{Output, Speed}; // GPIO types
use embassy_time::Delay; // Blocking delay, spins on the time driver
use flash_check_blinky::{
    BlinkConfig, BlinkDriver, LedState,
    board::{self, PinName},
    hardware::gpio_led::GpioLed,
}; // Blink pattern and board wiring
use {defmt_rtt as _, panic_probe as _}; // Logging and panic handlers

#[entry]
fn main() -> ! {
    // Initialize peripherals (also starts the time driver used by Delay)
    let p = embassy_stm32::init(Default::default());

    // Select the onboard LED pin and report which one it really is
    let led_pin = board::led_pin!(p);
    let name = PinName::of(&led_pin);
    info!(
        "{}: flash self-test (busy-wait) on P{}{}",
        board::NAME,
        name.port(),
        name.pin()
    );

    // Configure the LED pin as push-pull output once, starting dark
    let pin = Output::new(
        led_pin,                                  // Onboard LED pin
        board::LED_POLARITY.level(LedState::Off), // Initial state: LED off
        Speed::Low,                               // Low speed is plenty for blinking
    );
    let led = GpioLed::new(pin, board::LED_POLARITY);

    // Busy-wait through the pattern forever
    BlinkDriver::new(led, Delay, BlinkConfig::DEFAULT).run_blocking()
}
