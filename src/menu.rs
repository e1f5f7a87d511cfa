//! Menu state machine - the firmware's top-level driver.
//!
//! ```text
//!            Up / Down: move selection, redraw, settle
//!            ┌────────┐
//!            ▼        │
//!   ──► Navigating ───┘
//!        │      ▲
//!  press │      │ demo returned: idle outputs, redraw, settle
//!        ▼      │
//!      Running(selected)
//! ```
//!
//! One [`MenuController::tick`] handles one pass of the loop. Input is
//! sampled right before it is acted on and nothing is queued, so there is
//! no event backlog to drain after a long-running demo.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::InputPin;

use crate::config::MENU_SETTLE_MS;
use crate::demos::melody::IMPERIAL_MARCH;
use crate::demos::{BuzzerMelody, Demo, DemoContext, DemoProgram, JoystickLed, PwmRamp};
use crate::peripherals::{idle_outputs, AnalogInput, DisplaySink, PwmOutputs};
use crate::ui::display::DisplayPresenter;
use crate::ui::input::InputReader;
use crate::ui::input_logic::{select_next, select_prev};
use crate::ui::Direction;

/// Whether the menu is on screen or a demo owns the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    Navigating,
    Running,
}

/// Current selection and mode. Only [`MenuController`] mutates it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MenuState {
    selected: usize,
    mode: Mode,
}

impl MenuState {
    /// First option selected, navigating.
    pub const fn new() -> Self {
        Self::with_selected(0)
    }

    pub const fn with_selected(selected: usize) -> Self {
        Self {
            selected,
            mode: Mode::Navigating,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

/// One menu entry.
#[derive(Clone, Copy, Debug)]
pub struct MenuOption {
    pub label: &'static str,
    pub demo: Demo,
}

/// The firmware's menu, top to bottom.
pub static MENU_OPTIONS: [MenuOption; 3] = [
    MenuOption {
        label: "Joystick Led",
        demo: Demo::JoystickLed(JoystickLed::new()),
    },
    MenuOption {
        label: "Buzzer PWM",
        demo: Demo::BuzzerMelody(BuzzerMelody::new(&IMPERIAL_MARCH)),
    },
    MenuOption {
        label: "PWM Led",
        demo: Demo::PwmRamp(PwmRamp::new()),
    },
];

/// Owns every peripheral and the menu state; runs the main loop.
pub struct MenuController<'o, A, B, O, D, S> {
    state: MenuState,
    options: &'o [MenuOption],
    input: InputReader<A, B>,
    outputs: O,
    delay: D,
    presenter: DisplayPresenter<S>,
}

impl<'o, A, B, O, D, S> MenuController<'o, A, B, O, D, S>
where
    A: AnalogInput,
    B: InputPin,
    O: PwmOutputs,
    D: DelayNs,
    S: DisplaySink,
{
    pub fn new(
        options: &'o [MenuOption],
        input: InputReader<A, B>,
        outputs: O,
        delay: D,
        presenter: DisplayPresenter<S>,
    ) -> Self {
        Self {
            state: MenuState::new(),
            options,
            input,
            outputs,
            delay,
            presenter,
        }
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn presenter(&self) -> &DisplayPresenter<S> {
        &self.presenter
    }

    pub fn outputs(&self) -> &O {
        &self.outputs
    }

    /// Idle the outputs and draw the menu for the first time.
    pub fn start(&mut self) {
        info!("Menu: {} options", self.options.len());
        idle_outputs(&mut self.outputs);
        self.render();
    }

    /// One pass of the main loop.
    pub fn tick(&mut self) {
        match self.state.mode {
            Mode::Navigating => self.navigate(),
            Mode::Running => self.run_selected(),
        }
    }

    /// Start, then tick forever.
    pub fn run(mut self) -> ! {
        self.start();
        loop {
            self.tick();
        }
    }

    fn navigate(&mut self) {
        let count = self.options.len();
        let moved = match self.input.read_vertical_direction() {
            Direction::Up => Some(select_prev(self.state.selected, count)),
            Direction::Down => Some(select_next(self.state.selected, count)),
            Direction::Neutral => None,
        };

        if let Some(selected) = moved {
            self.state.selected = selected;
            debug!("Menu: selected {}", selected);
            self.render();
            self.delay.delay_ms(MENU_SETTLE_MS);
        }

        if self.input.is_button_pressed(&mut self.delay) {
            self.state.mode = Mode::Running;
            self.delay.delay_ms(MENU_SETTLE_MS);
        }
    }

    fn run_selected(&mut self) {
        if let Some(option) = self.options.get(self.state.selected) {
            info!("Menu: running {} ({})", option.label, option.demo.name());
            let exit = option.demo.run(&mut DemoContext {
                input: &mut self.input,
                outputs: &mut self.outputs,
                delay: &mut self.delay,
            });
            info!("Menu: {} returned {:?}", option.label, exit);
        }

        idle_outputs(&mut self.outputs);
        self.state.mode = Mode::Navigating;
        self.render();
        self.delay.delay_ms(MENU_SETTLE_MS);
    }

    fn render(&mut self) {
        self.presenter.render_menu(&self.state, self.options);
    }
}
