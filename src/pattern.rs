//! The blink pattern as data.
//!
//! One cycle is `pulses` fast on/off pulses followed by a long off pause:
//!
//! ```text
//!  on  ┌──┐  ┌──┐  ┌──┐
//! off ─┘  └──┘  └──┘  └──────────────
//!      100   100   ...  1000 ms pause
//! ```

use embassy_time::Duration;

use crate::error::ConfigError;
use crate::hardware::traits::LedState;

/// Timing of the self-test pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    pulses: u8,
    pulse: Duration,
    pause: Duration,
}

impl BlinkConfig {
    /// Three 100 ms pulses, then a 1000 ms pause.
    pub const DEFAULT: Self = Self {
        pulses: 3,
        pulse: Duration::from_millis(100),
        pause: Duration::from_millis(1000),
    };

    /// Builds a custom pattern.
    ///
    /// `pause` may be zero; `pulses` and `pulse` may not. Every hold has to
    /// fit in `u32` milliseconds since that is what delays are issued in.
    pub fn new(pulses: u8, pulse: Duration, pause: Duration) -> Result<Self, ConfigError> {
        if pulses == 0 {
            return Err(ConfigError::NoPulses);
        }
        if pulse.as_millis() == 0 {
            return Err(ConfigError::ZeroPulse);
        }
        if hold_ms(pulse).is_none() || hold_ms(pause).is_none() {
            return Err(ConfigError::HoldTooLong);
        }
        Ok(Self {
            pulses,
            pulse,
            pause,
        })
    }

    pub fn pulses(&self) -> u8 {
        self.pulses
    }

    pub fn pulse(&self) -> Duration {
        self.pulse
    }

    pub fn pause(&self) -> Duration {
        self.pause
    }

    /// Length of one full cycle: `pulses * 2 * pulse + pause`, in the whole
    /// milliseconds the delays are issued in.
    pub fn period(&self) -> Duration {
        let pulse = self.pulse.as_millis();
        Duration::from_millis(2 * u64::from(self.pulses) * pulse + self.pause.as_millis())
    }

    /// Phases of one cycle, in order.
    pub fn phases(&self) -> Phases {
        Phases {
            config: *self,
            index: 0,
        }
    }

    fn phase_count(&self) -> usize {
        2 * usize::from(self.pulses) + 1
    }
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Hold the LED in `state` for `hold`.
///
/// Only produced by [`BlinkConfig::phases`], so every hold has passed the
/// `u32` milliseconds check in [`BlinkConfig::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Phase {
    state: LedState,
    hold: Duration,
}

impl Phase {
    pub fn state(&self) -> LedState {
        self.state
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    /// `hold` in whole milliseconds.
    pub fn hold_ms(&self) -> u32 {
        hold_ms(self.hold).unwrap_or(u32::MAX)
    }
}

/// Iterator returned by [`BlinkConfig::phases`].
#[derive(Debug, Clone)]
pub struct Phases {
    config: BlinkConfig,
    index: usize,
}

impl Iterator for Phases {
    type Item = Phase;

    fn next(&mut self) -> Option<Phase> {
        let count = self.config.phase_count();
        let phase = match self.index {
            i if i + 1 == count => Phase {
                state: LedState::Off,
                hold: self.config.pause,
            },
            i if i < count && i % 2 == 0 => Phase {
                state: LedState::On,
                hold: self.config.pulse,
            },
            i if i < count => Phase {
                state: LedState::Off,
                hold: self.config.pulse,
            },
            _ => return None,
        };
        self.index += 1;
        Some(phase)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.config.phase_count().saturating_sub(self.index);
        (left, Some(left))
    }
}

impl ExactSizeIterator for Phases {}

fn hold_ms(d: Duration) -> Option<u32> {
    u32::try_from(d.as_millis()).ok()
}
