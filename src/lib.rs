//! Flash self-test firmware for the STM32F103 "Blue Pill".
//!
//! Blinks the onboard LED three times fast, pauses, and repeats forever.
//! Seeing that pattern after flashing confirms the image was programmed
//! and that the LED GPIO works.
//!
//! The library half is hardware independent and builds on the host so the
//! timing can be tested; the board binaries live in `src/bin` and need the
//! `stm32` feature.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod board;
pub mod driver;
pub mod error;
pub mod hardware;
pub mod pattern;

pub use driver::BlinkDriver;
pub use error::ConfigError;
pub use hardware::traits::{Led, LedState, Polarity};
pub use pattern::{BlinkConfig, Phase};
