//! Melody on the passive buzzer.
//!
//! Each sounded note reprograms the buzzer slice's counter top so that one
//! PWM period lasts one cycle of the note, then drives it at 50 % duty for
//! the note's duration followed by a short silence. Rests only wait.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::{BUZZER_PWM_CLOCK_HZ, NOTE_GAP_MS};
use crate::demos::melody::{Note, IMPERIAL_MARCH};
use crate::demos::{DemoContext, DemoExit, DemoProgram};
use crate::peripherals::{AnalogInput, PwmChannel, PwmOutputs};

/// Counter top giving `frequency_hz` from a counter ticking at
/// `reference_clock_hz`, clamped to the 16-bit counter.
pub fn tone_top(reference_clock_hz: u32, frequency_hz: u32) -> u16 {
    if frequency_hz == 0 {
        return 0;
    }
    let top = (reference_clock_hz / frequency_hz).saturating_sub(1);
    top.min(u16::MAX as u32) as u16
}

#[derive(Clone, Copy, Debug)]
pub struct BuzzerMelody {
    notes: &'static [Note],
    reference_clock_hz: u32,
    gap_ms: u32,
}

impl BuzzerMelody {
    pub const fn new(notes: &'static [Note]) -> Self {
        Self {
            notes,
            reference_clock_hz: BUZZER_PWM_CLOCK_HZ,
            gap_ms: NOTE_GAP_MS,
        }
    }

    /// The built-in Imperial March.
    pub fn imperial_march() -> Self {
        Self::new(&IMPERIAL_MARCH)
    }

    pub const fn with_reference_clock(mut self, reference_clock_hz: u32) -> Self {
        self.reference_clock_hz = reference_clock_hz;
        self
    }

    pub fn notes(&self) -> &'static [Note] {
        self.notes
    }

    fn play_note<A, B, O, D>(&self, ctx: &mut DemoContext<'_, A, B, O, D>, note: Note)
    where
        A: AnalogInput,
        B: InputPin,
        O: PwmOutputs,
        D: DelayNs,
    {
        if note.is_rest() {
            ctx.sleep_ms(note.duration_ms);
            return;
        }

        let top = tone_top(self.reference_clock_hz, note.frequency_hz);
        ctx.set_top(PwmChannel::Buzzer, top);
        ctx.set_duty(PwmChannel::Buzzer, top / 2);
        ctx.sleep_ms(note.duration_ms);
        ctx.set_duty(PwmChannel::Buzzer, 0);
        ctx.sleep_ms(self.gap_ms);
    }
}

impl DemoProgram for BuzzerMelody {
    fn run<A, B, O, D>(&self, ctx: &mut DemoContext<'_, A, B, O, D>) -> DemoExit
    where
        A: AnalogInput,
        B: InputPin,
        O: PwmOutputs,
        D: DelayNs,
    {
        ctx.set_duty(PwmChannel::Buzzer, 0);

        let mut exit = DemoExit::Finished;
        for &note in self.notes {
            self.play_note(ctx, note);
            if ctx.exit_requested() {
                exit = DemoExit::ButtonPressed;
                break;
            }
        }

        ctx.idle();
        exit
    }
}
