//! Auto-cycling LED brightness ramp on the blue LED.
//!
//! The level walks up and down between `step` and `period` in fixed steps
//! (a triangle wave), holding each level for about one second. The button
//! is polled every 100 ms during the hold so an exit is never more than one
//! sub-poll late.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::{
    LED_PWM_TOP, RAMP_PERIOD, RAMP_START_LEVEL, RAMP_STEP, RAMP_SUB_POLLS, RAMP_SUB_POLL_MS,
};
use crate::demos::{DemoContext, DemoExit, DemoProgram};
use crate::peripherals::{AnalogInput, PwmChannel, PwmOutputs};

/// Triangle-wave position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RampState {
    level: u16,
    step: u16,
    period: u16,
    rising: bool,
}

impl RampState {
    pub const fn new(start_level: u16, step: u16, period: u16) -> Self {
        Self {
            level: start_level,
            step,
            period,
            rising: true,
        }
    }

    pub fn level(&self) -> u16 {
        self.level
    }

    pub fn is_rising(&self) -> bool {
        self.rising
    }

    /// Move one step; turn around on reaching `period` or `step`.
    pub fn advance(&mut self) {
        if self.rising {
            self.level = self.level.saturating_add(self.step);
            if self.level >= self.period {
                self.rising = false;
            }
        } else {
            self.level = self.level.saturating_sub(self.step);
            if self.level <= self.step {
                self.rising = true;
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PwmRamp {
    start_level: u16,
    step: u16,
    period: u16,
    sub_polls: u32,
    sub_poll_ms: u32,
}

impl PwmRamp {
    pub const fn new() -> Self {
        Self {
            start_level: RAMP_START_LEVEL,
            step: RAMP_STEP,
            period: RAMP_PERIOD,
            sub_polls: RAMP_SUB_POLLS,
            sub_poll_ms: RAMP_SUB_POLL_MS,
        }
    }

    /// Hold the current level for one tick. Returns `true` if the button
    /// was pressed part-way through.
    fn hold_level<A, B, O, D>(&self, ctx: &mut DemoContext<'_, A, B, O, D>) -> bool
    where
        A: AnalogInput,
        B: InputPin,
        O: PwmOutputs,
        D: DelayNs,
    {
        for _ in 0..self.sub_polls {
            ctx.sleep_ms(self.sub_poll_ms);
            if ctx.exit_requested() {
                return true;
            }
        }
        false
    }
}

impl Default for PwmRamp {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoProgram for PwmRamp {
    fn run<A, B, O, D>(&self, ctx: &mut DemoContext<'_, A, B, O, D>) -> DemoExit
    where
        A: AnalogInput,
        B: InputPin,
        O: PwmOutputs,
        D: DelayNs,
    {
        let mut ramp = RampState::new(self.start_level, self.step, self.period);

        ctx.set_top(PwmChannel::Blue, self.period);
        ctx.set_duty(PwmChannel::Blue, ramp.level());
        ctx.set_duty(PwmChannel::Red, 0);
        ctx.set_duty(PwmChannel::Green, 0);

        loop {
            if ctx.exit_requested() {
                break;
            }

            ctx.set_duty(PwmChannel::Blue, ramp.level());
            if self.hold_level(ctx) {
                break;
            }

            ramp.advance();
            debug!("Ramp level {}", ramp.level());
        }

        ctx.idle();
        ctx.set_top(PwmChannel::Blue, LED_PWM_TOP);
        DemoExit::ButtonPressed
    }
}
