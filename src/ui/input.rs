//! Joystick and push-button input.
//!
//! Everything here is a synchronous poll of the current physical state:
//! nothing is buffered between calls.
//!
//! The button (joystick SW, active-low with pull-up) is debounced in the
//! calling thread:
//!   1. sample - not pressed → `false` right away
//!   2. wait `BUTTON_DEBOUNCE_MS` and sample again - released → `false`
//!   3. spin until the button is released
//!   4. wait `BUTTON_DEBOUNCE_MS` again, report the press
//!
//! Step 3 means a held button stalls the caller for the whole hold.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::{BUTTON_DEBOUNCE_MS, BUTTON_RELEASE_POLL_US};
use crate::error::Error;
use crate::peripherals::{AnalogInput, Axis};
use crate::ui::input_logic::classify_vertical;
use crate::ui::{Direction, JoystickSample};

/// Owns the joystick ADC channels and the button line.
pub struct InputReader<A, B> {
    adc: A,
    button: B,
}

impl<A, B> InputReader<A, B>
where
    A: AnalogInput,
    B: InputPin,
{
    pub fn new(adc: A, button: B) -> Self {
        Self { adc, button }
    }

    /// Single-shot raw reading of one axis, no filtering.
    pub fn read_analog_axis(&mut self, axis: Axis) -> Result<u16, Error> {
        self.adc.read_axis(axis)
    }

    /// Both axes, X first.
    pub fn read_joystick(&mut self) -> Result<JoystickSample, Error> {
        let x = self.read_analog_axis(Axis::X)?;
        let y = self.read_analog_axis(Axis::Y)?;
        Ok(JoystickSample { x, y })
    }

    /// Sample the Y axis once and apply the dead zone.
    ///
    /// A failed conversion reads as `Neutral`.
    pub fn read_vertical_direction(&mut self) -> Direction {
        match self.read_analog_axis(Axis::Y) {
            Ok(raw) => {
                debug!("Joystick Y: {}", raw);
                classify_vertical(raw)
            }
            Err(e) => {
                warn!("Joystick Y read failed: {:?}", e);
                Direction::Neutral
            }
        }
    }

    /// Debounced press-and-release detection. Blocks while the button is held.
    pub fn is_button_pressed<D: DelayNs>(&mut self, delay: &mut D) -> bool {
        if !self.button_asserted() {
            return false;
        }

        delay.delay_ms(BUTTON_DEBOUNCE_MS);
        if !self.button_asserted() {
            return false;
        }

        while self.button_asserted() {
            delay.delay_us(BUTTON_RELEASE_POLL_US);
        }
        delay.delay_ms(BUTTON_DEBOUNCE_MS);

        debug!("Button press");
        true
    }

    /// Active-low; an unreadable line counts as released.
    fn button_asserted(&mut self) -> bool {
        match self.button.is_low() {
            Ok(low) => low,
            Err(_) => {
                warn!("Button read failed: {:?}", Error::Gpio);
                false
            }
        }
    }
}
