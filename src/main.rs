//! joystick-menu firmware for RP2040 boards.
//!
//! A joystick scrolls a three-entry menu on a 128×64 SSD1306 OLED; the
//! joystick button launches the selected demo and pressing it again
//! returns to the menu:
//!
//!   - Joystick Led: joystick axes set red / blue LED brightness
//!   - Buzzer PWM:   Imperial March on the passive buzzer
//!   - PWM Led:      blue LED brightness ramps up and down
//!
//! The whole firmware is one blocking polling loop on the main task; no
//! other tasks are spawned.

#![no_std]
#![no_main]

mod board;

use defmt::{info, unwrap};
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::pwm::Pwm;
use embassy_time::Delay;
use joystick_menu::config::DISPLAY_I2C_FREQUENCY_HZ;
use joystick_menu::{DisplayPresenter, InputReader, MenuController, MENU_OPTIONS};
use {defmt_rtt as _, panic_probe as _};

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("joystick-menu starting");

    // - Joystick: Y on GP26 (ADC0), X on GP27 (ADC1), SW on GP22 ---------
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let joystick = board::Joystick::new(
        adc,
        Channel::new_pin(p.PIN_27, Pull::None),
        Channel::new_pin(p.PIN_26, Pull::None),
    );
    let button = Input::new(p.PIN_22, Pull::Up);

    // - RGB LED (GP12 blue, GP13 red, GP11 green) + buzzer (GP21) --------
    let blue_red = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, board::led_pwm_config());
    let green = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, board::led_pwm_config());
    let buzzer = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, board::buzzer_pwm_config());
    let outputs = board::PwmBank::new(blue_red, green, buzzer);

    // - SSD1306 on I²C1 (GP15 SCL, GP14 SDA) -----------------------------
    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = DISPLAY_I2C_FREQUENCY_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let oled = unwrap!(board::OledSink::new(i2c));
    info!("OLED initialised");

    let controller = MenuController::new(
        &MENU_OPTIONS,
        InputReader::new(joystick, button),
        outputs,
        Delay,
        DisplayPresenter::new(oled),
    );
    controller.run()
}
