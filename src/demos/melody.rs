//! Note type and the built-in melody.

/// One step of a melody. A frequency of 0 is a rest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub frequency_hz: u32,
    pub duration_ms: u32,
}

impl Note {
    pub const fn new(frequency_hz: u32, duration_ms: u32) -> Self {
        Self {
            frequency_hz,
            duration_ms,
        }
    }

    pub const fn rest(duration_ms: u32) -> Self {
        Self::new(0, duration_ms)
    }

    pub const fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

const MARCH_LEN: usize = 80;

#[rustfmt::skip]
const MARCH_FREQUENCIES: [u32; MARCH_LEN] = [
    330, 330, 330, 262, 392, 523, 330, 262,
    392, 523, 330, 659, 659, 659, 698, 523,
    415, 349, 330, 262, 392, 523, 330, 262,
    392, 523, 330, 659, 659, 659, 698, 523,
    415, 349, 330, 523, 494, 440, 392, 330,
    659, 784, 659, 523, 494, 440, 392, 330,
    659, 659, 330, 784, 880, 698, 784, 659,
    523, 494, 440, 392, 659, 784, 659, 523,
    494, 440, 392, 330, 659, 523, 659, 262,
    330, 294, 247, 262, 220, 262, 330, 262,
];

#[rustfmt::skip]
const MARCH_DURATIONS: [u32; MARCH_LEN] = [
    500, 500, 500, 350, 150, 300, 500, 350,
    150, 300, 500, 500, 500, 500, 350, 150,
    300, 500, 500, 350, 150, 300, 500, 350,
    150, 300, 650, 500, 150, 300, 500, 350,
    150, 300, 500, 150, 300, 500, 350, 150,
    300, 650, 500, 350, 150, 300, 500, 350,
    150, 300, 500, 500, 500, 500, 350, 150,
    300, 500, 500, 350, 150, 300, 500, 350,
    150, 300, 500, 350, 150, 300, 500, 500,
    350, 150, 300, 500, 500, 350, 150, 300,
];

const fn zip_notes<const N: usize>(frequencies: &[u32; N], durations: &[u32; N]) -> [Note; N] {
    let mut notes = [Note::rest(0); N];
    let mut i = 0;
    while i < N {
        notes[i] = Note::new(frequencies[i], durations[i]);
        i += 1;
    }
    notes
}

/// The Imperial March theme played by the buzzer demo.
pub static IMPERIAL_MARCH: [Note; MARCH_LEN] = zip_notes(&MARCH_FREQUENCIES, &MARCH_DURATIONS);
