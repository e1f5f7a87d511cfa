//! User interface subsystem - OLED menu + analog joystick.
//!
//! ## Components
//!
//! - **FrameBuffer**: packed 128×64 1-bpp bitmap in SSD1306 page layout
//! - **Display**: text / menu composition and full-frame flushes
//! - **Input**: joystick axes with a dead zone, debounced push button

pub mod display;
pub mod framebuffer;
pub mod input;
pub mod input_logic;

/// Discrete vertical joystick position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Up,
    Down,
    /// Inside the dead zone.
    Neutral,
}

/// Raw readings of both joystick axes, taken back to back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct JoystickSample {
    pub x: u16,
    pub y: u16,
}
