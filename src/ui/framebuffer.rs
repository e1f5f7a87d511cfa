//! Packed 1-bit-per-pixel framebuffer in SSD1306 page layout.
//!
//! Byte `(y / 8) * WIDTH + x` holds column `x` of page `y / 8`; bit `y % 8`
//! is the pixel row within that page (LSB on top). This is the order the
//! controller expects in horizontal addressing mode, so the buffer can be
//! streamed to the panel unchanged.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::Pixel;

use crate::config::{DISPLAY_BUFFER_LEN, DISPLAY_HEIGHT, DISPLAY_PAGES, DISPLAY_WIDTH};

/// Inclusive, page-addressed rectangle of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderArea {
    pub start_column: u8,
    pub end_column: u8,
    pub start_page: u8,
    pub end_page: u8,
}

impl RenderArea {
    /// The whole panel: columns 0-127, pages 0-7.
    pub const FULL: RenderArea = RenderArea {
        start_column: 0,
        end_column: (DISPLAY_WIDTH - 1) as u8,
        start_page: 0,
        end_page: (DISPLAY_PAGES - 1) as u8,
    };

    /// Number of bytes needed to fill this area.
    pub fn buffer_len(&self) -> usize {
        let columns = self.end_column.saturating_sub(self.start_column) as usize + 1;
        let pages = self.end_page.saturating_sub(self.start_page) as usize + 1;
        columns * pages
    }
}

/// 128×64 monochrome bitmap.
#[derive(Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    bytes: [u8; DISPLAY_BUFFER_LEN],
}

impl FrameBuffer {
    pub const WIDTH: i32 = DISPLAY_WIDTH as i32;
    pub const HEIGHT: i32 = DISPLAY_HEIGHT as i32;

    /// A blank (all pixels off) buffer.
    pub const fn new() -> Self {
        Self {
            bytes: [0; DISPLAY_BUFFER_LEN],
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Set or clear one pixel. Coordinates outside the panel are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some((index, mask)) = Self::locate(x, y) else {
            return;
        };
        if on {
            self.bytes[index] |= mask;
        } else {
            self.bytes[index] &= !mask;
        }
    }

    /// Whether a pixel is lit; off-panel coordinates read as off.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        match Self::locate(x, y) {
            Some((index, mask)) => self.bytes[index] & mask != 0,
            None => false,
        }
    }

    /// Outline (not filled) rectangle with corners `(x1, y1)` and `(x2, y2)`.
    ///
    /// Corners are expected in ascending order; reversed corners draw
    /// nothing along the affected axis.
    pub fn draw_empty_rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        for x in x1..=x2 {
            self.set_pixel(x, y1, true);
            self.set_pixel(x, y2, true);
        }
        for y in y1..=y2 {
            self.set_pixel(x1, y, true);
            self.set_pixel(x2, y, true);
        }
    }

    /// Raw page-layout bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Bytes backing `area`, ready for a page-addressed transfer.
    ///
    /// Only full-width areas are stored contiguously, so anything narrower
    /// (or reaching past the last page) yields `None`.
    pub fn page(&self, area: RenderArea) -> Option<&[u8]> {
        let full_width = area.start_column == 0 && area.end_column as usize == DISPLAY_WIDTH - 1;
        let pages = area.start_page <= area.end_page && (area.end_page as usize) < DISPLAY_PAGES;
        if !full_width || !pages {
            return None;
        }
        let start = area.start_page as usize * DISPLAY_WIDTH;
        let end = (area.end_page as usize + 1) * DISPLAY_WIDTH;
        Some(&self.bytes[start..end])
    }

    /// Number of lit pixels.
    pub fn lit_pixels(&self) -> u32 {
        self.bytes.iter().map(|b| b.count_ones()).sum()
    }

    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if !(0..Self::WIDTH).contains(&x) || !(0..Self::HEIGHT).contains(&y) {
            return None;
        }
        let index = (y / 8) as usize * DISPLAY_WIDTH + x as usize;
        Some((index, 1 << (y % 8)))
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for FrameBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrameBuffer")
            .field("lit_pixels", &self.lit_pixels())
            .finish()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH as u32, DISPLAY_HEIGHT as u32)
    }
}

/// Lets `embedded-graphics` rasterise glyphs and primitives straight into
/// the buffer; clipping goes through [`FrameBuffer::set_pixel`].
impl DrawTarget for FrameBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}
