#![forbid(unsafe_code)]

//! Padded text label.

use tessera_core::trace;
use tessera_layout::{Constraints, Measurable, Placeable, Rect, Sides, Size};

use crate::wrap::{display_width, wrap_words};

/// A text label with padding on each side.
///
/// Measuring wraps the text to the available width and keeps the wrapped
/// lines for drawing; placing records where the label ended up.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextItem {
    text: String,
    padding: Sides,
    lines: Vec<String>,
    measured: Size,
    origin: Option<(u16, u16)>,
}

impl TextItem {
    /// Create an unpadded label.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the padding.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Sides>) -> Self {
        self.padding = padding.into();
        self
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lines from the last measurement. Empty until measured.
    #[inline]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Size from the last measurement.
    #[inline]
    pub fn measured(&self) -> Size {
        self.measured
    }

    /// Offset from the last placement.
    #[inline]
    pub fn origin(&self) -> Option<(u16, u16)> {
        self.origin
    }

    /// Rectangle the label occupies, once placed.
    pub fn bounds(&self) -> Option<Rect> {
        let (x, y) = self.origin?;
        Some(Rect::at(x, y, self.measured))
    }

    /// Rectangle the text itself occupies (bounds minus padding), once placed.
    pub fn content_rect(&self) -> Option<Rect> {
        Some(self.bounds()?.inner(self.padding))
    }
}

impl Measurable for TextItem {
    fn measure(&mut self, constraints: Constraints) -> Size {
        let content_width = constraints
            .max_width
            .saturating_sub(self.padding.horizontal_sum());
        self.lines = wrap_words(&self.text, usize::from(content_width));

        let widest = self
            .lines
            .iter()
            .map(|line| display_width(line))
            .max()
            .unwrap_or(0);
        let widest = u16::try_from(widest).unwrap_or(u16::MAX).min(content_width);
        let line_count = u16::try_from(self.lines.len()).unwrap_or(u16::MAX);

        self.measured = constraints.constrain(Size::new(widest, line_count).padded(self.padding));
        trace!(
            text = self.text.as_str(),
            width = self.measured.width,
            height = self.measured.height,
            "measured label"
        );
        self.measured
    }
}

impl Placeable for TextItem {
    fn place_at(&mut self, x: u16, y: u16) {
        self.origin = Some((x, y));
    }
}
