//! Fixed-advance font metrics.
//!
//! Tessera does not shape text. Every character advances by the same amount,
//! a fixed fraction of the text size, which keeps layout deterministic and
//! independent of font files. Sinks that render real fonts are free to draw
//! glyphs narrower than the advance.

/// Horizontal advance per character, relative to the text size.
const ADVANCE_RATIO: f32 = 0.6;
/// Line height relative to the text size.
const LINE_RATIO: f32 = 1.25;

/// Metrics for a single-size monospaced font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    size: f32,
    advance: f32,
    line_spacing: f32,
}

impl FontMetrics {
    /// Metrics for text of `size` pixels.
    pub fn new(size: f32) -> Self {
        Self {
            size,
            advance: size * ADVANCE_RATIO,
            line_spacing: (size * LINE_RATIO).ceil(),
        }
    }

    /// The text size in pixels.
    #[inline]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Horizontal advance of one character.
    #[inline]
    pub fn advance(&self) -> f32 {
        self.advance
    }

    /// Height of one line of text.
    #[inline]
    pub fn line_spacing(&self) -> f32 {
        self.line_spacing
    }

    /// Width of `text` on a single line.
    pub fn text_width(&self, text: &str) -> f32 {
        self.advance * text.chars().count() as f32
    }

    /// The x offset of the character at `index`, counted in chars.
    ///
    /// Indices past the end clamp to the end of the text.
    pub fn char_x(&self, text: &str, index: usize) -> f32 {
        self.advance * index.min(text.chars().count()) as f32
    }

    /// The char index whose leading edge is nearest to `x`.
    pub fn index_at(&self, text: &str, x: f32) -> usize {
        if x <= 0.0 {
            return 0;
        }
        let len = text.chars().count();
        ((x / self.advance).round() as usize).min(len)
    }
}
