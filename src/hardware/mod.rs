pub mod traits;

#[cfg(feature = "stm32")]
pub mod gpio_led;
