//! STM32 Blue Pill Flash Self-Test
//! =============================================================================================
//!
//! Blinks the onboard LED (PC13) in a fixed pattern so a freshly flashed
//! board can be checked by eye:
//!
//!   3 fast blinks (100ms on / 100ms off), 1000ms dark, repeat
//!
//! Hardware Connection:
//!   - No external connections needed - uses onboard LED at PC13
//!
//! Expected Behavior:
//!   - Pattern repeats every 1600ms, forever
//!   - Startup messages are output via defmt RTT
//!
//! Build & flash:
//!   cargo run --release --features stm32 --target thumbv7m-none-eabi --bin blink

#![no_std] // Disable Rust standard library (required for embedded)
#![no_main] // Disable standard main interface

use defmt::*; // Formatted logging macros
use embassy_executor::Spawner; // Async executor
use embassy_stm32::gpio::{Output, Speed}; // GPIO types
use embassy_time::Delay; // Async delay backed by the embassy time driver
use flash_check_blinky::{
    BlinkConfig, BlinkDriver, LedState,
    board::{self, PinName},
    hardware::gpio_led::GpioLed,
}; // Blink pattern and board wiring
use {defmt_rtt as _, panic_probe as _}; // Logging and panic handlers

/// Main application entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    // Initialize microcontroller peripherals with default configuration
    let p = embassy_stm32::init(Default::default());

    // Select the onboard LED pin and report which one it really is
    let led_pin = board::led_pin!(p);
    let name = PinName::of(&led_pin);
    info!(
        "{}: flash self-test on P{}{}",
        board::NAME,
        name.port(),
        name.pin()
    );

    // Configure the LED pin as push-pull output once, starting dark
    let pin = Output::new(
        led_pin,                                  // Onboard LED pin
        board::LED_POLARITY.level(LedState::Off), // Initial state: LED off
        Speed::Low,                               // Suitable speed for simple blinking
    );
    let led = GpioLed::new(pin, board::LED_POLARITY);

    // 3 x 100ms pulses, 1000ms pause, forever
    let driver = BlinkDriver::new(led, Delay, BlinkConfig::DEFAULT);
    match driver.run().await {}
}

// Notes:
// 1. Nothing else is spawned: the pattern is the only thing this image does
// 2. If the LED stays dark or lit, the flash or the GPIO is at fault
