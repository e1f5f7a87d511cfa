//! Hardware-independent core of the joystick menu firmware.
//!
//! Everything the firmware decides lives here: the menu state machine,
//! framebuffer drawing, joystick / button input handling and the three
//! demo loops. Hardware is reached only through the traits in
//! [`peripherals`] plus `embedded-hal`'s `InputPin` and `DelayNs`, so the
//! whole crate runs and is tested on the host.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main]
//! and binds the traits to RP2040 peripherals (`--features embedded`).

#![cfg_attr(not(test), no_std)]

// Must come first so the logging macros are visible to every module.
mod fmt;

pub mod config;
pub mod demos;
pub mod error;
pub mod menu;
pub mod peripherals;
pub mod ui;

#[cfg(test)]
mod sim;

pub use demos::{Demo, DemoExit, DemoProgram};
pub use error::Error;
pub use menu::{MenuController, MenuOption, MenuState, Mode, MENU_OPTIONS};
pub use ui::display::DisplayPresenter;
pub use ui::framebuffer::{FrameBuffer, RenderArea};
pub use ui::input::InputReader;

// ═══════════════════════════════════════════════════════════════════════════
// End-to-end scenarios on the simulated board
// ═══════════════════════════════════════════════════════════════════════════
