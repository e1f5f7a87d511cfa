//! Unified error type for joystick-menu.
//!
//! We avoid `alloc` - all error variants are fieldless so the enum stays
//! `Copy`. Implements `defmt::Format` for efficient on-target logging.
//!
//! Nothing in the control loop propagates these: hardware calls are
//! best-effort and a failure is logged, then the loop carries on with its
//! normal timing.

/// Top-level error type reported by the hardware capability traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// ADC conversion failed or timed out.
    Adc,

    /// GPIO line could not be read.
    Gpio,

    /// PWM slice rejected a configuration update.
    Pwm,

    /// I²C transaction to the display failed.
    Display,
}
