//! Simulated board for host tests.
//!
//! All parts share one virtual clock that only moves when something
//! delays, so blocking loops run instantly and deterministically. Button
//! presses and joystick positions are scripted against that clock; PWM
//! writes and display flushes are recorded with their timestamps.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, InputPin};

use crate::error::Error;
use crate::peripherals::{AnalogInput, Axis, DisplaySink, PwmChannel, PwmOutputs};
use crate::ui::framebuffer::RenderArea;

const NANOS_PER_MILLI: u64 = 1_000_000;

/// Resting joystick reading, mid-scale.
const CENTER: u16 = crate::config::ADC_MAX / 2 + 1;

/// Shared virtual time in nanoseconds.
#[derive(Clone, Default)]
pub struct SimClock(Rc<Cell<u64>>);

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ns(&self) -> u64 {
        self.0.get()
    }

    pub fn now_ms(&self) -> u64 {
        self.0.get() / NANOS_PER_MILLI
    }

    fn advance(&self, ns: u64) {
        self.0.set(self.0.get() + ns);
    }
}

/// `DelayNs` that advances the virtual clock.
pub struct SimDelay {
    clock: SimClock,
}

impl SimDelay {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
        }
    }
}

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.clock.advance(ns as u64);
    }

    fn delay_us(&mut self, us: u32) {
        self.clock.advance(us as u64 * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.clock.advance(ms as u64 * NANOS_PER_MILLI);
    }
}

/// Active-low button held during the scripted `[start_ms, end_ms)` windows.
/// Reads inside a `failing_during` window return an error instead.
pub struct SimButton {
    clock: SimClock,
    presses: Vec<(u64, u64)>,
    faults: Vec<(u64, u64)>,
}

fn in_window(now_ns: u64, windows: &[(u64, u64)]) -> bool {
    windows
        .iter()
        .any(|&(start, end)| now_ns >= start * NANOS_PER_MILLI && now_ns < end * NANOS_PER_MILLI)
}

impl SimButton {
    pub fn new(clock: &SimClock, presses: &[(u64, u64)]) -> Self {
        Self {
            clock: clock.clone(),
            presses: presses.to_vec(),
            faults: Vec::new(),
        }
    }

    pub fn failing_during(mut self, faults: &[(u64, u64)]) -> Self {
        self.faults = faults.to_vec();
        self
    }

    fn held(&self) -> Result<bool, ErrorKind> {
        let now = self.clock.now_ns();
        if in_window(now, &self.faults) {
            return Err(ErrorKind::Other);
        }
        Ok(in_window(now, &self.presses))
    }
}

impl ErrorType for SimButton {
    type Error = ErrorKind;
}

impl InputPin for SimButton {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.held().map(|held| !held)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.held()
    }
}

type AxisScript = Box<dyn Fn(u64) -> u16>;

/// Joystick whose axes are functions of the current time in ms.
pub struct SimAdc {
    clock: SimClock,
    x: AxisScript,
    y: AxisScript,
    failing: bool,
}

impl SimAdc {
    /// Both axes resting at mid-scale.
    pub fn centered(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            x: Box::new(|_| CENTER),
            y: Box::new(|_| CENTER),
            failing: false,
        }
    }

    /// Every conversion fails.
    pub fn failing(clock: &SimClock) -> Self {
        Self {
            failing: true,
            ..Self::centered(clock)
        }
    }

    pub fn with_x(mut self, script: impl Fn(u64) -> u16 + 'static) -> Self {
        self.x = Box::new(script);
        self
    }

    pub fn with_y(mut self, script: impl Fn(u64) -> u16 + 'static) -> Self {
        self.y = Box::new(script);
        self
    }
}

impl AnalogInput for SimAdc {
    fn read_axis(&mut self, axis: Axis) -> Result<u16, Error> {
        if self.failing {
            return Err(Error::Adc);
        }
        let now = self.clock.now_ms();
        Ok(match axis {
            Axis::X => (self.x)(now),
            Axis::Y => (self.y)(now),
        })
    }
}

/// What a recorded PWM write changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PwmWriteKind {
    Duty(u16),
    Top(u16),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PwmWrite {
    pub at_ms: u64,
    pub channel: PwmChannel,
    pub kind: PwmWriteKind,
}

struct PwmState {
    writes: Vec<PwmWrite>,
    duty: [u16; 4],
    top: [u16; 4],
}

/// Recording PWM bank. Clones share the same record.
#[derive(Clone)]
pub struct SimPwm {
    clock: SimClock,
    state: Rc<RefCell<PwmState>>,
}

impl SimPwm {
    pub fn new(clock: &SimClock) -> Self {
        Self {
            clock: clock.clone(),
            state: Rc::new(RefCell::new(PwmState {
                writes: Vec::new(),
                duty: [0; 4],
                top: [crate::config::LED_PWM_TOP; 4],
            })),
        }
    }

    pub fn top(&self, channel: PwmChannel) -> u16 {
        self.state.borrow().top[channel.index()]
    }

    pub fn all_idle(&self) -> bool {
        self.state.borrow().duty.iter().all(|&d| d == 0)
    }

    /// Every write to `channel`, oldest first.
    pub fn writes(&self, channel: PwmChannel) -> Vec<PwmWrite> {
        self.state
            .borrow()
            .writes
            .iter()
            .filter(|w| w.channel == channel)
            .copied()
            .collect()
    }

    /// `(at_ms, duty)` of every duty write to `channel`.
    pub fn duty_history(&self, channel: PwmChannel) -> Vec<(u64, u16)> {
        self.writes(channel)
            .into_iter()
            .filter_map(|w| match w.kind {
                PwmWriteKind::Duty(d) => Some((w.at_ms, d)),
                PwmWriteKind::Top(_) => None,
            })
            .collect()
    }

    fn record(&mut self, channel: PwmChannel, kind: PwmWriteKind) {
        let at_ms = self.clock.now_ms();
        let mut state = self.state.borrow_mut();
        match kind {
            PwmWriteKind::Duty(d) => state.duty[channel.index()] = d,
            PwmWriteKind::Top(t) => state.top[channel.index()] = t,
        }
        state.writes.push(PwmWrite {
            at_ms,
            channel,
            kind,
        });
    }
}

impl PwmOutputs for SimPwm {
    fn set_duty(&mut self, channel: PwmChannel, duty: u16) -> Result<(), Error> {
        self.record(channel, PwmWriteKind::Duty(duty));
        Ok(())
    }

    fn set_top(&mut self, channel: PwmChannel, top: u16) -> Result<(), Error> {
        self.record(channel, PwmWriteKind::Top(top));
        Ok(())
    }
}

/// Recording display. Clones share the same record.
#[derive(Clone, Default)]
pub struct SimSink {
    frames: Rc<RefCell<Vec<(Vec<u8>, RenderArea)>>>,
    failing: bool,
}

impl SimSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every flush is rejected (and not recorded).
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn flush_count(&self) -> usize {
        self.frames.borrow().len()
    }

    pub fn frame(&self, index: usize) -> Vec<u8> {
        self.frames.borrow()[index].0.clone()
    }

    pub fn last_frame(&self) -> Option<Vec<u8>> {
        self.frames.borrow().last().map(|(bytes, _)| bytes.clone())
    }

    pub fn last_area(&self) -> Option<RenderArea> {
        self.frames.borrow().last().map(|&(_, area)| area)
    }
}

impl DisplaySink for SimSink {
    fn flush(&mut self, buffer: &[u8], area: RenderArea) -> Result<(), Error> {
        if self.failing {
            return Err(Error::Display);
        }
        self.frames.borrow_mut().push((buffer.to_vec(), area));
        Ok(())
    }
}

/// Whether pixel `(x, y)` is lit in a recorded page-layout frame.
pub fn frame_pixel(frame: &[u8], x: i32, y: i32) -> bool {
    let index = (y / 8) as usize * crate::config::DISPLAY_WIDTH + x as usize;
    frame[index] & (1 << (y % 8)) != 0
}
