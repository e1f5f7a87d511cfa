//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and layout
//! constants live here so they can be tuned in one place.

// GPIO pin assignments (BitDogLab / Pico defaults)
//
// These are logical names; the actual `embassy_rp::peripherals::*` pins are
// picked in `main.rs`.  Adjust for your own wiring.
//
//   Joystick Y     → GP26 (ADC0)
//   Joystick X     → GP27 (ADC1)
//   Joystick SW    → GP22 (active-low, internal pull-up)
//   LED green      → GP11 (PWM5 B)
//   LED blue       → GP12 (PWM6 A)
//   LED red        → GP13 (PWM6 B)  shares a slice with blue
//   Buzzer         → GP21 (PWM2 B)
//   I²C1 SDA       → GP14
//   I²C1 SCL       → GP15

// Display

/// Panel width in pixels.
pub const DISPLAY_WIDTH: usize = 128;

/// Panel height in pixels.
pub const DISPLAY_HEIGHT: usize = 64;

/// Number of 8-row pages.
pub const DISPLAY_PAGES: usize = DISPLAY_HEIGHT / 8;

/// Packed framebuffer size (one bit per pixel).
pub const DISPLAY_BUFFER_LEN: usize = DISPLAY_WIDTH * DISPLAY_PAGES;

/// SSD1306 7-bit I²C address.
pub const DISPLAY_I2C_ADDRESS: u8 = 0x3C;

/// I²C bus clock for the display.
pub const DISPLAY_I2C_FREQUENCY_HZ: u32 = 400_000;

// Menu layout

pub const MENU_TITLE: &str = "Menu";
pub const MENU_TITLE_X: i32 = 52;
pub const MENU_TITLE_Y: i32 = 2;

/// Left edge of every option label.
pub const MENU_LABEL_X: i32 = 6;

/// Top of the first option label.
pub const MENU_FIRST_ROW_Y: i32 = 18;

/// Vertical distance between consecutive option labels.
pub const MENU_ROW_STRIDE: i32 = 12;

/// Horizontal extent of the selection rectangle.
pub const MENU_HIGHLIGHT_LEFT: i32 = 2;
pub const MENU_HIGHLIGHT_RIGHT: i32 = 120;

/// Selection rectangle extends this far above / below the label top.
pub const MENU_HIGHLIGHT_ABOVE: i32 = 2;
pub const MENU_HIGHLIGHT_BELOW: i32 = 8;

// Joystick

/// Raw Y readings below this count as "up".
pub const JOYSTICK_UP_THRESHOLD: u16 = 1000;

/// Raw Y readings above this count as "down".
pub const JOYSTICK_DOWN_THRESHOLD: u16 = 3000;

/// Full-scale reading of the 12-bit ADC.
pub const ADC_MAX: u16 = 4095;

// Timing

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u32 = 50;

/// Poll interval while waiting for the button to be released (µs).
pub const BUTTON_RELEASE_POLL_US: u32 = 100;

/// Pause after every menu navigation or mode change (ms).
pub const MENU_SETTLE_MS: u32 = 200;

/// Joystick LED demo sampling period (ms).
pub const JOYSTICK_LED_POLL_MS: u32 = 100;

/// Silence inserted after every sounded note (ms).
pub const NOTE_GAP_MS: u32 = 50;

/// PWM ramp: one level is held for `RAMP_SUB_POLLS` × `RAMP_SUB_POLL_MS`.
pub const RAMP_SUB_POLL_MS: u32 = 100;
pub const RAMP_SUB_POLLS: u32 = 10;

// PWM

/// System clock the PWM dividers are derived from.
pub const SYSTEM_CLOCK_HZ: u32 = 125_000_000;

/// Counter top of the LED slices outside the ramp demo.
pub const LED_PWM_TOP: u16 = 0xFFFF;

/// Integer clock divider of the LED slices.
pub const LED_PWM_DIVIDER: u8 = 4;

/// PWM ramp counter top, step and first level.
pub const RAMP_PERIOD: u16 = 2000;
pub const RAMP_STEP: u16 = 100;
pub const RAMP_START_LEVEL: u16 = 100;

/// Integer clock divider of the buzzer slice.
pub const BUZZER_PWM_DIVIDER: u8 = 125;

/// Buzzer counter rate after the divider; tone tops are derived from it.
pub const BUZZER_PWM_CLOCK_HZ: u32 = SYSTEM_CLOCK_HZ / BUZZER_PWM_DIVIDER as u32;
