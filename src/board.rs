//! RP2040 bindings for the core's hardware traits.
//!
//! - Joystick: ADC0 / ADC1, blocking single-shot conversions
//! - PWM: RGB LED on slices 5 and 6, buzzer on slice 2
//! - Display: SSD1306 over blocking I²C1, driven in basic (unbuffered)
//!   mode because the core owns the framebuffer

use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use joystick_menu::config::{BUZZER_PWM_DIVIDER, DISPLAY_I2C_ADDRESS, LED_PWM_DIVIDER, LED_PWM_TOP};
use joystick_menu::peripherals::{AnalogInput, Axis, DisplaySink, PwmChannel, PwmOutputs};
use joystick_menu::{Error, RenderArea};
use ssd1306::mode::BasicMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

// Joystick

/// Both joystick axes on the shared ADC.
pub struct Joystick {
    adc: Adc<'static, adc::Blocking>,
    x: Channel<'static>,
    y: Channel<'static>,
}

impl Joystick {
    pub fn new(adc: Adc<'static, adc::Blocking>, x: Channel<'static>, y: Channel<'static>) -> Self {
        Self { adc, x, y }
    }
}

impl AnalogInput for Joystick {
    fn read_axis(&mut self, axis: Axis) -> Result<u16, Error> {
        let channel = match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        };
        self.adc.blocking_read(channel).map_err(|_| Error::Adc)
    }
}

// PWM

/// Slice configuration for the RGB LED: free-running, default top.
pub fn led_pwm_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.divider = LED_PWM_DIVIDER.into();
    config.top = LED_PWM_TOP;
    config.compare_a = 0;
    config.compare_b = 0;
    config
}

/// Slice configuration for the buzzer: silent until a note sets the top.
pub fn buzzer_pwm_config() -> PwmConfig {
    let mut config = PwmConfig::default();
    config.divider = BUZZER_PWM_DIVIDER.into();
    config.compare_b = 0;
    config
}

/// One PWM slice together with the configuration last written to it.
struct Slice {
    pwm: Pwm<'static>,
    config: PwmConfig,
}

impl Slice {
    fn update(&mut self, change: impl FnOnce(&mut PwmConfig)) {
        change(&mut self.config);
        self.pwm.set_config(&self.config);
    }
}

/// RGB LED and buzzer outputs.
///
/// Blue (GP12, A) and red (GP13, B) share slice 6, so changing the blue
/// top also changes red's period.
pub struct PwmBank {
    blue_red: Slice,
    green: Slice,
    buzzer: Slice,
}

impl PwmBank {
    /// `blue_red` drives blue on A and red on B; `green` and `buzzer` use B.
    pub fn new(blue_red: Pwm<'static>, green: Pwm<'static>, buzzer: Pwm<'static>) -> Self {
        Self {
            blue_red: Slice {
                pwm: blue_red,
                config: led_pwm_config(),
            },
            green: Slice {
                pwm: green,
                config: led_pwm_config(),
            },
            buzzer: Slice {
                pwm: buzzer,
                config: buzzer_pwm_config(),
            },
        }
    }
}

impl PwmOutputs for PwmBank {
    fn set_duty(&mut self, channel: PwmChannel, duty: u16) -> Result<(), Error> {
        match channel {
            PwmChannel::Blue => self.blue_red.update(|c| c.compare_a = duty),
            PwmChannel::Red => self.blue_red.update(|c| c.compare_b = duty),
            PwmChannel::Green => self.green.update(|c| c.compare_b = duty),
            PwmChannel::Buzzer => self.buzzer.update(|c| c.compare_b = duty),
        }
        Ok(())
    }

    fn set_top(&mut self, channel: PwmChannel, top: u16) -> Result<(), Error> {
        match channel {
            PwmChannel::Blue | PwmChannel::Red => self.blue_red.update(|c| c.top = top),
            PwmChannel::Green => self.green.update(|c| c.top = top),
            PwmChannel::Buzzer => self.buzzer.update(|c| c.top = top),
        }
        Ok(())
    }
}

// Display

/// Concrete SSD1306 driver type: blocking I²C1, no driver-side buffer.
pub type Oled =
    Ssd1306<I2CInterface<I2c<'static, I2C1, i2c::Blocking>>, DisplaySize128x64, BasicMode>;

/// Page-addressed writes of the core's framebuffer to the SSD1306.
pub struct OledSink {
    display: Oled,
}

impl OledSink {
    /// Initialise the panel (horizontal addressing, display on).
    pub fn new(i2c: I2c<'static, I2C1, i2c::Blocking>) -> Result<Self, Error> {
        let interface = I2CDisplayInterface::new_custom_address(i2c, DISPLAY_I2C_ADDRESS);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0);
        display.init().map_err(|_| Error::Display)?;
        Ok(Self { display })
    }
}

impl DisplaySink for OledSink {
    fn flush(&mut self, buffer: &[u8], area: RenderArea) -> Result<(), Error> {
        // The driver takes pixel coordinates with exclusive end points.
        let start = (area.start_column, area.start_page * 8);
        let end = (area.end_column + 1, (area.end_page + 1) * 8);
        self.display
            .set_draw_area(start, end)
            .map_err(|_| Error::Display)?;
        self.display
            .draw(buffer)
            .map_err(|_| Error::Display)
    }
}
