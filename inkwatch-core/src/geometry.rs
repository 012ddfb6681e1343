//! Pixel geometry
//!
//! Rectangles are half-open: a `Rect` at `x` with `width` covers columns
//! `x..x + width`.

/// Size of the drawable area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    /// LilyGo T5 4.7" panel
    pub const EPD_960X540: Self = Self::new(960, 540);

    /// Create a canvas size
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// The rectangle covering the whole canvas
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Check whether `rect` lies fully inside the canvas
    pub fn contains(&self, rect: &Rect) -> bool {
        rect.x >= 0
            && rect.y >= 0
            && rect.right() <= self.width as i32
            && rect.bottom() <= self.height as i32
    }
}

/// Axis-aligned rectangle with a non-zero area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a rectangle
    ///
    /// # Panics
    ///
    /// A zero width or height is a layout bug and panics.
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "empty rect {}x{}", width, height);
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column past the right edge
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// First row past the bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    /// Check whether two rectangles share any pixel
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Shrink by `amount` on every side
    ///
    /// # Panics
    ///
    /// Panics if nothing would be left.
    pub fn inset(&self, amount: u32) -> Rect {
        Rect::new(
            self.x + amount as i32,
            self.y + amount as i32,
            self.width.saturating_sub(amount * 2),
            self.height.saturating_sub(amount * 2),
        )
    }
}
