//! Hover tooltip scene.

use pokedash_core::{Canvas, Point, Rect, Size, Stroke, TextAnchor, TextStyle, Theme};
use serde::{Deserialize, Serialize};

const FONT_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 15.0;
const PADDING: f32 = 10.0;
// Rough advance width per character; backends have no font metrics.
const CHAR_WIDTH: f32 = 0.58 * FONT_SIZE;

/// A tooltip anchored near the pointer: bold title plus detail lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    /// Bold first line
    pub title: String,
    /// Detail lines below the title
    pub lines: Vec<String>,
    /// Pointer position the tooltip hangs off
    pub anchor: Point,
}

impl Tooltip {
    /// Create a tooltip.
    #[must_use]
    pub fn new(title: impl Into<String>, lines: Vec<String>, anchor: Point) -> Self {
        Self {
            title: title.into(),
            lines,
            anchor,
        }
    }

    /// Estimated box size from line lengths.
    #[must_use]
    pub fn measure(&self) -> Size {
        let longest = self
            .lines
            .iter()
            .map(String::len)
            .chain(std::iter::once(self.title.len()))
            .max()
            .unwrap_or(0);
        let width = (longest as f32).mul_add(CHAR_WIDTH, PADDING * 2.0);
        let height = ((self.lines.len() + 1) as f32).mul_add(LINE_HEIGHT, PADDING * 2.0);
        Size::new(width, height)
    }

    /// Box position: offset right and above the pointer, as the original
    /// dashboard placed it.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let size = self.measure();
        Rect::new(
            self.anchor.x + 10.0,
            self.anchor.y - 28.0,
            size.width,
            size.height,
        )
    }

    /// Paint the tooltip box and text.
    pub fn paint(&self, canvas: &mut dyn Canvas, theme: &Theme) {
        let bounds = self.bounds();
        canvas.fill_rect(bounds, theme.tooltip_background);
        canvas.stroke_rect(bounds, &Stroke::new(theme.tooltip_border, 1.0));

        let title_style = TextStyle::sized(FONT_SIZE).bold().anchor(TextAnchor::Start);
        let line_style = TextStyle::sized(FONT_SIZE).anchor(TextAnchor::Start);
        let mut y = bounds.y + PADDING + FONT_SIZE;
        canvas.draw_text(&self.title, Point::new(bounds.x + PADDING, y), &title_style);
        for line in &self.lines {
            y += LINE_HEIGHT;
            canvas.draw_text(line, Point::new(bounds.x + PADDING, y), &line_style);
        }
    }
}
