//! Blink pattern driver.
//!
//! Owns the LED and a delay provider and plays [`BlinkConfig`] on it
//! forever. The async API takes an `embedded-hal-async` delay (e.g.
//! `embassy_time::Delay` under the executor); the `_blocking` API takes a
//! blocking `embedded-hal` delay and busy-waits.

#[cfg(feature = "async")]
use core::convert::Infallible;

use crate::hardware::traits::Led;
use crate::pattern::{BlinkConfig, Phase};

pub struct BlinkDriver<L, D> {
    led: L,
    delay: D,
    config: BlinkConfig,
}

impl<L: Led, D> BlinkDriver<L, D> {
    /// Takes ownership of the LED and drives it off, so every run starts
    /// from the deasserted state.
    pub fn new(mut led: L, delay: D, config: BlinkConfig) -> Self {
        led.off();
        info!(
            "blink pattern: {} x {} ms pulses, {} ms pause, {} ms period",
            config.pulses(),
            config.pulse().as_millis(),
            config.pause().as_millis(),
            config.period().as_millis()
        );
        Self { led, delay, config }
    }

    pub fn config(&self) -> &BlinkConfig {
        &self.config
    }

    /// Gives back the LED and the delay provider.
    pub fn release(self) -> (L, D) {
        (self.led, self.delay)
    }

    fn enter(&mut self, phase: &Phase) {
        trace!("led {:?} for {} ms", phase.state(), phase.hold_ms());
        // The pause re-applies Off: the LED is always dark when it starts.
        self.led.set(phase.state());
    }

    fn finish_cycle(&self) {
        debug!("burst of {} done", self.config.pulses());
    }
}

#[cfg(feature = "async")]
impl<L, D> BlinkDriver<L, D>
where
    L: Led,
    D: embedded_hal_async::delay::DelayNs,
{
    /// Plays one full cycle: the fast pulses, then the pause.
    pub async fn run_cycle(&mut self) {
        for phase in self.config.phases() {
            self.enter(&phase);
            self.delay.delay_ms(phase.hold_ms()).await;
        }
        self.finish_cycle();
    }

    /// Plays the pattern forever.
    pub async fn run(mut self) -> Infallible {
        loop {
            self.run_cycle().await;
        }
    }
}

impl<L, D> BlinkDriver<L, D>
where
    L: Led,
    D: embedded_hal::delay::DelayNs,
{
    /// Blocking [`run_cycle`](Self::run_cycle).
    pub fn run_cycle_blocking(&mut self) {
        for phase in self.config.phases() {
            self.enter(&phase);
            self.delay.delay_ms(phase.hold_ms());
        }
        self.finish_cycle();
    }

    /// Blocking [`run`](Self::run); busy-waits between phases.
    pub fn run_blocking(mut self) -> ! {
        loop {
            self.run_cycle_blocking();
        }
    }
}
