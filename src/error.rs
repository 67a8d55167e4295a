use core::fmt;

/// Rejected [`BlinkConfig`](crate::BlinkConfig) parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A cycle needs at least one pulse.
    NoPulses,
    /// The pulse half-period is zero, so nothing would be visible.
    ZeroPulse,
    /// A hold does not fit in `u32` milliseconds.
    HoldTooLong,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoPulses => f.write_str("pattern has no pulses"),
            ConfigError::ZeroPulse => f.write_str("pulse half-period is zero"),
            ConfigError::HoldTooLong => f.write_str("hold exceeds u32 milliseconds"),
        }
    }
}

impl core::error::Error for ConfigError {}
