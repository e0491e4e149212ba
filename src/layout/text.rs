use crate::text_metrics;

use super::LayoutError;
use super::geometry::Size;

/// Text measurement used by the packer. Must be deterministic: the same
/// text, family, and size always give the same box.
pub trait TextMeasure {
    fn measure(&self, text: &str, font_family: &str, font_size: f32) -> Result<Size, LayoutError>;
}

impl<F> TextMeasure for F
where
    F: Fn(&str, &str, f32) -> Result<Size, LayoutError>,
{
    fn measure(&self, text: &str, font_family: &str, font_size: f32) -> Result<Size, LayoutError> {
        self(text, font_family, font_size)
    }
}

/// Measures with real font data, falling back to [`HeuristicMetrics`] when no
/// system face resolves for the family.
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    fallback: HeuristicMetrics,
}

impl FontMetrics {
    pub fn new(line_height: f32) -> Self {
        Self {
            fallback: HeuristicMetrics::new(line_height),
        }
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self::new(HeuristicMetrics::DEFAULT_LINE_HEIGHT)
    }
}

impl TextMeasure for FontMetrics {
    fn measure(&self, text: &str, font_family: &str, font_size: f32) -> Result<Size, LayoutError> {
        match text_metrics::measure_text(text, font_size, font_family) {
            Some(extent) => Size::new(extent.width.ceil(), extent.height.ceil()),
            None => self.fallback.measure(text, font_family, font_size),
        }
    }
}

/// Font-free estimate from per-character width factors.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicMetrics {
    line_height: f32,
}

impl HeuristicMetrics {
    pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

    pub fn new(line_height: f32) -> Self {
        Self { line_height }
    }
}

impl Default for HeuristicMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LINE_HEIGHT)
    }
}

impl TextMeasure for HeuristicMetrics {
    fn measure(&self, text: &str, _font_family: &str, font_size: f32) -> Result<Size, LayoutError> {
        if text.is_empty() || font_size <= 0.0 {
            return Ok(Size::default());
        }
        let width = text.chars().map(char_width_factor).sum::<f32>() * font_size;
        Size::new(width.ceil(), (font_size * self.line_height).ceil())
    }
}

/// Advance width as a fraction of the font size, calibrated on a common
/// sans-serif stack.
pub(crate) fn char_width_factor(ch: char) -> f32 {
    match ch {
        ' ' => 0.306,
        '.' | ',' | ':' | ';' | '|' | '!' | '\'' | '(' | ')' | '[' | ']' => 0.321,
        'i' | 'j' | 'l' | 'I' => 0.25,
        'f' | 't' | 'r' => 0.34,
        'm' | 'w' => 0.84,
        'M' | 'W' => 0.93,
        '@' | '#' | '%' | '&' => 0.946,
        'A'..='Z' => 0.66,
        'a'..='z' => 0.57,
        '0'..='9' => 0.6,
        c if is_wide(c) => 1.0,
        _ => 0.568,
    }
}

fn is_wide(ch: char) -> bool {
    matches!(ch as u32,
        0x1100..=0x115F
        | 0x2E80..=0xA4CF
        | 0xAC00..=0xD7A3
        | 0xF900..=0xFAFF
        | 0xFF00..=0xFF60
        | 0xFFE0..=0xFFE6)
}
