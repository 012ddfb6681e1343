//! Glyph metrics for `embedded-graphics` mono fonts

use embedded_graphics::mono_font::MonoFont;

use inkwatch_core::GlyphMetrics;

/// [`GlyphMetrics`] backed by the mono font the canvas draws with
///
/// Every glyph is `character_size.width` wide with `character_spacing`
/// between glyphs, so the layout engine measures exactly what
/// [`Canvas::apply`](crate::Canvas::apply) draws.
#[derive(Clone, Copy)]
pub struct FontMetrics<'a> {
    font: &'a MonoFont<'a>,
}

impl<'a> FontMetrics<'a> {
    pub fn new(font: &'a MonoFont<'a>) -> Self {
        Self { font }
    }

    /// The measured font
    pub fn font(&self) -> &'a MonoFont<'a> {
        self.font
    }
}

impl GlyphMetrics for FontMetrics<'_> {
    fn text_size(&self, text: &str) -> (u32, u32) {
        let chars = text.chars().count() as u32;
        if chars == 0 {
            return (0, 0);
        }
        let glyph = self.font.character_size;
        let width = chars * (glyph.width + self.font.character_spacing) - self.font.character_spacing;
        (width, glyph.height)
    }

    fn line_height(&self) -> u32 {
        self.font.character_size.height
    }
}
