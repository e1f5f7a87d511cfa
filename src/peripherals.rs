//! Hardware capability traits the core drives the board through.
//!
//! The button line and delays use the `embedded-hal` 1.0 traits directly
//! (`InputPin`, `DelayNs`). The ADC, PWM and display have no suitable
//! `embedded-hal` trait, so the narrow interfaces the menu needs are
//! defined here and bound to real peripherals in the firmware binary.

use crate::error::Error;
use crate::ui::framebuffer::RenderArea;

/// Joystick analog axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    X,
    Y,
}

/// Single-shot analog reads of the joystick axes.
pub trait AnalogInput {
    /// Raw 12-bit conversion (0..=4095) of `axis`.
    fn read_axis(&mut self, axis: Axis) -> Result<u16, Error>;
}

/// PWM-driven actuator outputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PwmChannel {
    Red,
    Green,
    Blue,
    Buzzer,
}

impl PwmChannel {
    /// Every channel, in a fixed order.
    pub const ALL: [PwmChannel; 4] = [
        PwmChannel::Red,
        PwmChannel::Green,
        PwmChannel::Blue,
        PwmChannel::Buzzer,
    ];

    /// Position of this channel in [`PwmChannel::ALL`].
    pub fn index(self) -> usize {
        match self {
            PwmChannel::Red => 0,
            PwmChannel::Green => 1,
            PwmChannel::Blue => 2,
            PwmChannel::Buzzer => 3,
        }
    }
}

/// Duty and counter-top control of the PWM outputs.
pub trait PwmOutputs {
    /// Set the compare level of `channel` (0 = always low).
    fn set_duty(&mut self, channel: PwmChannel, duty: u16) -> Result<(), Error>;

    /// Set the counter top (wrap) value that determines the PWM period.
    fn set_top(&mut self, channel: PwmChannel, top: u16) -> Result<(), Error>;
}

/// Receives page-addressed framebuffer data for the physical panel.
pub trait DisplaySink {
    /// Push `buffer` (exactly `area.buffer_len()` bytes) into `area`.
    fn flush(&mut self, buffer: &[u8], area: RenderArea) -> Result<(), Error>;
}

/// Drive every output to its idle level.
///
/// Best-effort: a channel that rejects the write is logged and the rest
/// are still attempted.
pub fn idle_outputs<O: PwmOutputs>(outputs: &mut O) {
    for channel in PwmChannel::ALL {
        if let Err(e) = outputs.set_duty(channel, 0) {
            warn!("Idle {:?} failed: {:?}", channel, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rejects every write to one channel, records the others.
    struct StuckChannel {
        stuck: PwmChannel,
        written: Vec<PwmChannel>,
    }

    impl PwmOutputs for StuckChannel {
        fn set_duty(&mut self, channel: PwmChannel, _duty: u16) -> Result<(), Error> {
            if channel == self.stuck {
                return Err(Error::Pwm);
            }
            self.written.push(channel);
            Ok(())
        }

        fn set_top(&mut self, _channel: PwmChannel, _top: u16) -> Result<(), Error> {
            Ok(())
        }
    }

    #[test]
    fn idle_continues_past_a_failing_channel() {
        let mut outputs = StuckChannel {
            stuck: PwmChannel::Green,
            written: Vec::new(),
        };
        idle_outputs(&mut outputs);
        assert_eq!(
            outputs.written,
            vec![PwmChannel::Red, PwmChannel::Blue, PwmChannel::Buzzer]
        );
    }

    #[test]
    fn channel_index_matches_all_order() {
        for (i, channel) in PwmChannel::ALL.iter().enumerate() {
            assert_eq!(channel.index(), i);
        }
    }
}
