//! Menu rendering onto the framebuffer and full-frame flushes.

use embedded_graphics::mono_font::ascii::FONT_5X8;
use embedded_graphics::mono_font::{MonoTextStyle, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};

use crate::config::{
    MENU_FIRST_ROW_Y, MENU_HIGHLIGHT_ABOVE, MENU_HIGHLIGHT_BELOW, MENU_HIGHLIGHT_LEFT,
    MENU_HIGHLIGHT_RIGHT, MENU_LABEL_X, MENU_ROW_STRIDE, MENU_TITLE, MENU_TITLE_X, MENU_TITLE_Y,
};
use crate::menu::{MenuOption, MenuState};
use crate::peripherals::DisplaySink;
use crate::ui::framebuffer::{FrameBuffer, RenderArea};

fn text_style() -> MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_5X8)
        .text_color(BinaryColor::On)
        .build()
}

/// Top of the label for option `index`.
pub fn option_row_y(index: usize) -> i32 {
    MENU_FIRST_ROW_Y + index as i32 * MENU_ROW_STRIDE
}

/// Corners `(x1, y1, x2, y2)` of the selection rectangle around option `index`.
pub fn highlight_rect(index: usize) -> (i32, i32, i32, i32) {
    let y = option_row_y(index);
    (
        MENU_HIGHLIGHT_LEFT,
        y - MENU_HIGHLIGHT_ABOVE,
        MENU_HIGHLIGHT_RIGHT,
        y + MENU_HIGHLIGHT_BELOW,
    )
}

/// Owns the framebuffer and the panel it is flushed to.
pub struct DisplayPresenter<S> {
    frame: FrameBuffer,
    sink: S,
}

impl<S: DisplaySink> DisplayPresenter<S> {
    pub fn new(sink: S) -> Self {
        Self {
            frame: FrameBuffer::new(),
            sink,
        }
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut FrameBuffer {
        &mut self.frame
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Rasterise `text` with its top-left corner at `(x, y)`.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        // Drawing into the framebuffer cannot fail.
        let _ = Text::with_baseline(text, Point::new(x, y), text_style(), Baseline::Top)
            .draw(&mut self.frame);
    }

    /// Push the whole framebuffer to the panel. A failed transfer drops the
    /// frame; the next render sends a complete one anyway.
    pub fn present(&mut self) {
        self.present_area(RenderArea::FULL);
    }

    /// Push one full-width band of pages. Areas the framebuffer cannot hand
    /// out contiguously are skipped.
    pub fn present_area(&mut self, area: RenderArea) {
        let Some(bytes) = self.frame.page(area) else {
            warn!("Display area not pushable: {:?}", area);
            return;
        };
        if let Err(e) = self.sink.flush(bytes, area) {
            warn!("Display flush failed: {:?}", e);
        }
    }

    /// Redraw the menu from scratch and present it.
    pub fn render_menu(&mut self, state: &MenuState, options: &[MenuOption]) {
        self.frame.clear();

        self.draw_text(MENU_TITLE, MENU_TITLE_X, MENU_TITLE_Y);

        for (index, option) in options.iter().enumerate() {
            self.draw_text(option.label, MENU_LABEL_X, option_row_y(index));
        }

        if state.selected() < options.len() {
            let (x1, y1, x2, y2) = highlight_rect(state.selected());
            self.frame.draw_empty_rect(x1, y1, x2, y2);
        }

        self.present();
    }
}
