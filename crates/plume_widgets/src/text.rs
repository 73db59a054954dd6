//! Text measurement
//!
//! Shaping and font loading belong to the host. Widgets only need two
//! answers from it: how big a single line of text is, and where the caret
//! sits before a given character.

use plume_core::{Size, TextStyle};

/// Single-line text measurement supplied by the host
pub trait TextShaper {
    /// Size of `text` on one line, width capped at `max_width`
    fn measure(&self, text: &str, style: &TextStyle, max_width: f32) -> Size;

    /// Horizontal offset of the caret before character `index`
    fn caret_offset(&self, text: &str, style: &TextStyle, index: usize) -> f32;

    /// Height of one line of text
    fn line_height(&self, style: &TextStyle) -> f32 {
        style.size * style.line_height
    }
}

/// Fixed-advance shaper: every character is `advance * font size` wide
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonospaceShaper {
    /// Advance as a fraction of the font size
    pub advance: f32,
}

impl Default for MonospaceShaper {
    fn default() -> Self {
        Self { advance: 0.5 }
    }
}

impl MonospaceShaper {
    pub fn new(advance: f32) -> Self {
        Self { advance }
    }

    fn char_width(&self, style: &TextStyle) -> f32 {
        style.size * self.advance
    }
}

impl TextShaper for MonospaceShaper {
    fn measure(&self, text: &str, style: &TextStyle, max_width: f32) -> Size {
        let width = text.chars().count() as f32 * self.char_width(style);
        Size::new(width.min(max_width.max(0.0)), self.line_height(style))
    }

    fn caret_offset(&self, text: &str, style: &TextStyle, index: usize) -> f32 {
        index.min(text.chars().count()) as f32 * self.char_width(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_measure() {
        let shaper = MonospaceShaper::default();
        let style = TextStyle::new(10.0);
        let size = shaper.measure("hello", &style, 100.0);
        assert_eq!(size.width, 25.0);
        assert!((size.height - 12.0).abs() < 1e-4);
        assert_eq!(shaper.measure("hello", &style, 20.0).width, 20.0);
        assert_eq!(shaper.measure("", &style, 100.0).width, 0.0);
    }

    #[test]
    fn test_monospace_caret_clamps() {
        let shaper = MonospaceShaper::new(1.0);
        let style = TextStyle::new(8.0);
        assert_eq!(shaper.caret_offset("héllo", &style, 2), 16.0);
        assert_eq!(shaper.caret_offset("ab", &style, 10), 16.0);
    }
}
