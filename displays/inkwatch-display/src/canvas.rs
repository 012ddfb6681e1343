//! Grayscale framebuffer
//!
//! 4 bits per pixel, two pixels per byte, rows packed top to bottom. Within
//! a byte the even x pixel sits in the low nibble and the odd x pixel in the
//! high nibble. 0x0 is black, 0xF is white.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::{Gray4, GrayColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};

use inkwatch_core::{CanvasSize, Color, DrawCommand, Rect};

/// Byte value of two white pixels
const WHITE_PAIR: u8 = 0xFF;

/// 4-bit grayscale framebuffer
pub struct Canvas {
    width: u32,
    height: u32,
    /// Bytes per row
    stride: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a white canvas
    ///
    /// # Panics
    ///
    /// Panics on a zero width or height.
    pub fn new(size: CanvasSize) -> Self {
        assert!(size.width > 0 && size.height > 0, "empty canvas");
        let stride = (size.width as usize + 1) / 2;
        Self {
            width: size.width,
            height: size.height,
            stride,
            pixels: vec![WHITE_PAIR; stride * size.height as usize],
        }
    }

    /// Canvas dimensions
    pub fn canvas_size(&self) -> CanvasSize {
        CanvasSize::new(self.width, self.height)
    }

    /// Packed framebuffer, ready for the panel
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Reset every pixel to white
    pub fn clear(&mut self) {
        self.pixels.fill(WHITE_PAIR);
    }

    /// Gray level at (x, y), `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let byte = self.pixels[self.offset(x, y)];
        Some(if x % 2 == 0 { byte & 0x0F } else { byte >> 4 })
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride + x as usize / 2
    }

    fn set(&mut self, x: u32, y: u32, level: u8) {
        let offset = self.offset(x, y);
        let byte = &mut self.pixels[offset];
        *byte = if x % 2 == 0 {
            (*byte & 0xF0) | (level & 0x0F)
        } else {
            (*byte & 0x0F) | (level << 4)
        };
    }

    /// Rasterize a draw plan in order
    ///
    /// Text is drawn black with `font`, anchored at its top-left corner.
    /// Anything outside the canvas is clipped.
    pub fn apply(&mut self, plan: &[DrawCommand], font: &MonoFont<'_>) {
        match self.try_apply(plan, font) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    fn try_apply(&mut self, plan: &[DrawCommand], font: &MonoFont<'_>) -> Result<(), Infallible> {
        let text_style = MonoTextStyle::new(font, Gray4::BLACK);

        for command in plan {
            match command {
                DrawCommand::ClearRect(rect) => {
                    self.fill_solid(&rectangle(rect), Gray4::WHITE)?;
                }
                DrawCommand::FillRect(rect, color) => {
                    self.fill_solid(&rectangle(rect), gray(*color))?;
                }
                DrawCommand::DrawRect(rect, color) => {
                    rectangle(rect)
                        .into_styled(PrimitiveStyle::with_stroke(gray(*color), 1))
                        .draw(self)?;
                }
                DrawCommand::DrawHLine {
                    x,
                    y,
                    length,
                    color,
                } => {
                    if *length == 0 {
                        continue;
                    }
                    let end = Point::new(x + *length as i32 - 1, *y);
                    Line::new(Point::new(*x, *y), end)
                        .into_styled(PrimitiveStyle::with_stroke(gray(*color), 1))
                        .draw(self)?;
                }
                DrawCommand::DrawText { x, y, text } => {
                    Text::with_baseline(text.as_str(), Point::new(*x, *y), text_style, Baseline::Top)
                        .draw(self)?;
                }
            }
        }
        Ok(())
    }
}

fn gray(color: Color) -> Gray4 {
    Gray4::new(color.level())
}

fn rectangle(rect: &Rect) -> Rectangle {
    Rectangle::new(Point::new(rect.x, rect.y), Size::new(rect.width, rect.height))
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl DrawTarget for Canvas {
    type Color = Gray4;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) {
                if x < self.width && y < self.height {
                    self.set(x, y, color.luma());
                }
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let area = area.intersection(&self.bounding_box());
        for point in area.points() {
            self.set(point.x as u32, point.y as u32, color.luma());
        }
        Ok(())
    }
}
