//! Draw commands
//!
//! A render pass produces a [`DrawPlan`]: an ordered list of primitive
//! drawing instructions for the panel driver. Commands are applied in order,
//! so later commands paint over earlier ones. Nothing is ever removed from a
//! plan; every plan starts by clearing the canvas.

use alloc::vec::Vec;
use core::fmt::Write;

use heapless::String;

use crate::geometry::Rect;

/// Maximum bytes of text in a single [`DrawCommand::DrawText`]
pub const MAX_TEXT_LEN: usize = 128;

/// Text carried by a draw command
pub type TextBuf = String<MAX_TEXT_LEN>;

/// Ordered draw commands for one full frame
pub type DrawPlan = Vec<DrawCommand>;

/// 4-bit grayscale level, 0 = black, 15 = white
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Color(u8);

impl Color {
    pub const BLACK: Self = Self(0);
    pub const WHITE: Self = Self(15);

    /// Gray level, clamped to 0..=15
    pub const fn gray(level: u8) -> Self {
        if level > 15 {
            Self(15)
        } else {
            Self(level)
        }
    }

    /// Gray level 0..=15
    pub const fn level(self) -> u8 {
        self.0
    }
}

/// One primitive drawing instruction
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawCommand {
    /// Reset a region to the background (white)
    ClearRect(Rect),
    /// Fill a region with a solid color
    FillRect(Rect, Color),
    /// Draw a 1px outline
    DrawRect(Rect, Color),
    /// Draw a 1px horizontal line starting at (x, y)
    DrawHLine {
        x: i32,
        y: i32,
        length: u32,
        color: Color,
    },
    /// Draw text with its top-left corner at (x, y)
    DrawText { x: i32, y: i32, text: TextBuf },
}

impl DrawCommand {
    /// Text placement, truncated to [`MAX_TEXT_LEN`] on a char boundary
    pub fn text(x: i32, y: i32, text: &str) -> Self {
        DrawCommand::DrawText {
            x,
            y,
            text: text_buf(text),
        }
    }

    /// Formatted text placement, truncated to [`MAX_TEXT_LEN`] on a char
    /// boundary
    pub fn text_fmt(x: i32, y: i32, args: core::fmt::Arguments<'_>) -> Self {
        let mut text = TextBuf::new();
        let _ = Truncating::new(&mut text).write_fmt(args);
        DrawCommand::DrawText { x, y, text }
    }

    /// Text carried by this command, if any
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DrawCommand::DrawText { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Copy `src` into a bounded string, dropping whole characters that do not fit
pub fn push_truncated<const N: usize>(dst: &mut String<N>, src: &str) {
    for ch in src.chars() {
        if dst.push(ch).is_err() {
            break;
        }
    }
}

/// Writer that keeps as much of the output as fits and drops the rest
///
/// Once one character is dropped every later piece is dropped too, so the
/// kept text is always a prefix of the full output.
pub struct Truncating<'a, const N: usize> {
    dst: &'a mut String<N>,
    full: bool,
}

impl<'a, const N: usize> Truncating<'a, N> {
    pub fn new(dst: &'a mut String<N>) -> Self {
        Self { dst, full: false }
    }
}

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        if self.full {
            return Ok(());
        }
        for ch in s.chars() {
            if self.dst.push(ch).is_err() {
                self.full = true;
                break;
            }
        }
        Ok(())
    }
}

/// Bounded copy of `src` for use in a draw command
pub fn text_buf(src: &str) -> TextBuf {
    let mut buf = TextBuf::new();
    push_truncated(&mut buf, src);
    buf
}

/// Texts of all [`DrawCommand::DrawText`] entries, in plan order
pub fn texts(plan: &[DrawCommand]) -> impl Iterator<Item = &str> {
    plan.iter().filter_map(DrawCommand::as_text)
}
