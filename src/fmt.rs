//! Logging shim
//!
//! - `defmt` feature: forwards to the `defmt` macros (RTT on the target).
//! - Host unit tests: prints to stdout.
//! - Anything else: only type-checks the arguments.

#![allow(unused_macros)]

macro_rules! info {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($fmt $(, $arg)*);

        #[cfg(all(not(feature = "defmt"), test))]
        println!(concat!("[INFO] ", $fmt) $(, $arg)*);

        #[cfg(not(any(feature = "defmt", test)))]
        let _ = format_args!($fmt $(, $arg)*);
    }};
}

macro_rules! debug {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($fmt $(, $arg)*);

        #[cfg(all(not(feature = "defmt"), test))]
        println!(concat!("[DEBUG] ", $fmt) $(, $arg)*);

        #[cfg(not(any(feature = "defmt", test)))]
        let _ = format_args!($fmt $(, $arg)*);
    }};
}

macro_rules! trace {
    ($fmt:literal $(, $arg:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::trace!($fmt $(, $arg)*);

        #[cfg(all(not(feature = "defmt"), test))]
        println!(concat!("[TRACE] ", $fmt) $(, $arg)*);

        #[cfg(not(any(feature = "defmt", test)))]
        let _ = format_args!($fmt $(, $arg)*);
    }};
}
