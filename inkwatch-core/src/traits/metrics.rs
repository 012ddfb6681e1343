//! Glyph metrics provider

/// Measures rendered text
///
/// Implemented by whatever font rasterizer draws the text; the layout code
/// never looks at glyphs itself.
pub trait GlyphMetrics {
    /// Rendered `(width, height)` of `text` in pixels
    fn text_size(&self, text: &str) -> (u32, u32);

    /// Rendered width of `text` in pixels
    fn text_width(&self, text: &str) -> u32 {
        self.text_size(text).0
    }

    /// Height of one line of text in pixels
    fn line_height(&self) -> u32;
}

impl<M: GlyphMetrics + ?Sized> GlyphMetrics for &M {
    fn text_size(&self, text: &str) -> (u32, u32) {
        (**self).text_size(text)
    }

    fn line_height(&self) -> u32 {
        (**self).line_height()
    }
}

/// Fixed-advance metrics: every character is `advance` pixels wide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MonospaceMetrics {
    /// Horizontal advance per character
    pub advance: u32,
    /// Line height
    pub height: u32,
}

impl MonospaceMetrics {
    pub const fn new(advance: u32, height: u32) -> Self {
        Self { advance, height }
    }
}

impl GlyphMetrics for MonospaceMetrics {
    fn text_size(&self, text: &str) -> (u32, u32) {
        let chars = text.chars().count() as u32;
        let height = if chars == 0 { 0 } else { self.height };
        (chars * self.advance, height)
    }

    fn line_height(&self) -> u32 {
        self.height
    }
}
