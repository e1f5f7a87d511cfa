//! Joystick position → LED brightness.
//!
//! The raw 12-bit readings are written straight to the compare registers
//! (no rescaling), X to the red LED and Y to the blue LED.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::JOYSTICK_LED_POLL_MS;
use crate::demos::{DemoContext, DemoExit, DemoProgram};
use crate::peripherals::{AnalogInput, PwmChannel, PwmOutputs};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct JoystickLed {
    poll_ms: u32,
}

impl JoystickLed {
    pub const fn new() -> Self {
        Self {
            poll_ms: JOYSTICK_LED_POLL_MS,
        }
    }
}

impl Default for JoystickLed {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoProgram for JoystickLed {
    fn run<A, B, O, D>(&self, ctx: &mut DemoContext<'_, A, B, O, D>) -> DemoExit
    where
        A: AnalogInput,
        B: InputPin,
        O: PwmOutputs,
        D: DelayNs,
    {
        loop {
            match ctx.input.read_joystick() {
                Ok(sample) => {
                    ctx.set_duty(PwmChannel::Red, sample.x);
                    ctx.set_duty(PwmChannel::Blue, sample.y);
                }
                Err(e) => warn!("Joystick read failed: {:?}", e),
            }

            if ctx.exit_requested() {
                ctx.idle();
                return DemoExit::ButtonPressed;
            }

            ctx.sleep_ms(self.poll_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{SimAdc, SimButton, SimClock, SimDelay, SimPwm};
    use crate::ui::input::InputReader;

    #[test]
    fn axes_drive_red_and_blue_until_button() {
        let clock = SimClock::new();
        let adc = SimAdc::centered(&clock)
            .with_x(|t| 1000 + t as u16)
            .with_y(|_| 3210);
        let mut input = InputReader::new(adc, SimButton::new(&clock, &[(250, 400)]));
        let mut pwm = SimPwm::new(&clock);
        let mut delay = SimDelay::new(&clock);

        let exit = JoystickLed::new().run(&mut DemoContext {
            input: &mut input,
            outputs: &mut pwm,
            delay: &mut delay,
        });

        assert_eq!(exit, DemoExit::ButtonPressed);
        // Samples at 0, 100, 200, 300 ms; the poll at 300 ms catches the press.
        assert_eq!(
            pwm.duty_history(PwmChannel::Red),
            vec![(0, 1000), (100, 1100), (200, 1200), (300, 1300), (450, 0)]
        );
        assert_eq!(
            pwm.duty_history(PwmChannel::Blue),
            vec![(0, 3210), (100, 3210), (200, 3210), (300, 3210), (450, 0)]
        );
        assert!(pwm.all_idle());
        assert_eq!(clock.now_ms(), 450);
    }

    #[test]
    fn unreadable_button_keeps_the_demo_running() {
        let clock = SimClock::new();
        let adc = SimAdc::centered(&clock).with_x(|_| 500);
        let button = SimButton::new(&clock, &[(250, 400)]).failing_during(&[(0, 250)]);
        let mut input = InputReader::new(adc, button);
        let mut pwm = SimPwm::new(&clock);
        let mut delay = SimDelay::new(&clock);

        let exit = JoystickLed::new().run(&mut DemoContext {
            input: &mut input,
            outputs: &mut pwm,
            delay: &mut delay,
        });

        // Polls at 0, 100 and 200 ms fail and are ignored; 300 ms sees the press.
        assert_eq!(exit, DemoExit::ButtonPressed);
        assert_eq!(
            pwm.duty_history(PwmChannel::Red),
            vec![(0, 500), (100, 500), (200, 500), (300, 500), (450, 0)]
        );
        assert_eq!(clock.now_ms(), 450);
    }

    #[test]
    fn failed_reads_leave_leds_alone() {
        let clock = SimClock::new();
        let mut input = InputReader::new(SimAdc::failing(&clock), SimButton::new(&clock, &[(100, 200)]));
        let mut pwm = SimPwm::new(&clock);
        let mut delay = SimDelay::new(&clock);

        let exit = JoystickLed::new().run(&mut DemoContext {
            input: &mut input,
            outputs: &mut pwm,
            delay: &mut delay,
        });

        assert_eq!(exit, DemoExit::ButtonPressed);
        assert_eq!(pwm.duty_history(PwmChannel::Red), vec![(250, 0)]);
        assert!(pwm.all_idle());
    }
}
