//! Demo programs launched from the menu.
//!
//! Each demo is a blocking loop that owns the control thread until the
//! joystick button is pressed (or, for the melody, until it runs out of
//! notes). Whatever way a demo returns, every PWM output is left idle.

pub mod buzzer_melody;
pub mod joystick_led;
pub mod melody;
pub mod pwm_ramp;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::peripherals::{idle_outputs, AnalogInput, PwmChannel, PwmOutputs};
use crate::ui::input::InputReader;

pub use buzzer_melody::BuzzerMelody;
pub use joystick_led::JoystickLed;
pub use pwm_ramp::PwmRamp;

/// Why a demo loop returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DemoExit {
    /// The user pressed the joystick button.
    ButtonPressed,
    /// The demo reached its natural end.
    Finished,
}

/// Hardware borrowed by a running demo.
pub struct DemoContext<'a, A, B, O, D> {
    pub input: &'a mut InputReader<A, B>,
    pub outputs: &'a mut O,
    pub delay: &'a mut D,
}

impl<A, B, O, D> DemoContext<'_, A, B, O, D>
where
    A: AnalogInput,
    B: InputPin,
    O: PwmOutputs,
    D: DelayNs,
{
    /// Debounced exit poll. Blocks while the button is held.
    pub fn exit_requested(&mut self) -> bool {
        self.input.is_button_pressed(&mut *self.delay)
    }

    pub fn sleep_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    /// Best-effort duty write.
    pub fn set_duty(&mut self, channel: PwmChannel, duty: u16) {
        if let Err(e) = self.outputs.set_duty(channel, duty) {
            warn!("Set duty {:?} failed: {:?}", channel, e);
        }
    }

    /// Best-effort counter-top write.
    pub fn set_top(&mut self, channel: PwmChannel, top: u16) {
        if let Err(e) = self.outputs.set_top(channel, top) {
            warn!("Set top {:?} failed: {:?}", channel, e);
        }
    }

    /// All duty cycles to 0.
    pub fn idle(&mut self) {
        idle_outputs(&mut *self.outputs);
    }
}

/// A blocking demo loop.
pub trait DemoProgram {
    /// Run until exit; all outputs are idle on return.
    fn run<A, B, O, D>(&self, ctx: &mut DemoContext<'_, A, B, O, D>) -> DemoExit
    where
        A: AnalogInput,
        B: InputPin,
        O: PwmOutputs,
        D: DelayNs;
}

/// The demos a menu entry can launch.
#[derive(Clone, Copy, Debug)]
pub enum Demo {
    JoystickLed(JoystickLed),
    BuzzerMelody(BuzzerMelody),
    PwmRamp(PwmRamp),
}

impl Demo {
    pub fn name(&self) -> &'static str {
        match self {
            Demo::JoystickLed(_) => "joystick-led",
            Demo::BuzzerMelody(_) => "buzzer-melody",
            Demo::PwmRamp(_) => "pwm-ramp",
        }
    }
}

impl DemoProgram for Demo {
    fn run<A, B, O, D>(&self, ctx: &mut DemoContext<'_, A, B, O, D>) -> DemoExit
    where
        A: AnalogInput,
        B: InputPin,
        O: PwmOutputs,
        D: DelayNs,
    {
        match self {
            Demo::JoystickLed(demo) => demo.run(ctx),
            Demo::BuzzerMelody(demo) => demo.run(ctx),
            Demo::PwmRamp(demo) => demo.run(ctx),
        }
    }
}
