//! The `Canvas` paint abstraction and mark styling types.
//!
//! Charts paint through this trait; backends (SVG, test recorders) decide
//! what the operations mean. Opacity rides on [`crate::Color`] alpha.

use crate::color::Color;
use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Stroke styling for lines, outlines and polylines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Stroke color (alpha encodes opacity)
    pub color: Color,
    /// Stroke width in pixels
    pub width: f32,
    /// Dash length for dashed strokes; `None` draws solid
    pub dash: Option<f32>,
}

impl Stroke {
    /// Create a solid stroke.
    #[must_use]
    pub const fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash: None,
        }
    }

    /// Create a dashed stroke with equal dash/gap length.
    #[must_use]
    pub const fn dashed(color: Color, width: f32, dash: f32) -> Self {
        Self {
            color,
            width,
            dash: Some(dash),
        }
    }
}

/// Left-to-right reveal animation for a polyline.
///
/// Backends that cannot animate are free to ignore this and draw the
/// finished line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    /// Animation duration in milliseconds
    pub duration_ms: u32,
    /// Delay before the animation starts, in milliseconds
    pub delay_ms: u32,
}

impl Reveal {
    /// Create a reveal animation.
    #[must_use]
    pub const fn new(duration_ms: u32, delay_ms: u32) -> Self {
        Self {
            duration_ms,
            delay_ms,
        }
    }
}

/// Horizontal text anchoring relative to the given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    /// Position marks the start of the text
    #[default]
    Start,
    /// Position marks the center of the text
    Middle,
    /// Position marks the end of the text
    End,
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
}

/// Text style for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
    /// Horizontal anchoring
    pub anchor: TextAnchor,
    /// Rotation in degrees about the anchor point
    pub rotate: Option<f32>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
            anchor: TextAnchor::Start,
            rotate: None,
        }
    }
}

impl TextStyle {
    /// Style with a given size.
    #[must_use]
    pub fn sized(size: f32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the anchor.
    #[must_use]
    pub const fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Set bold weight.
    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.weight = FontWeight::Bold;
        self
    }

    /// Set rotation in degrees.
    #[must_use]
    pub const fn rotated(mut self, degrees: f32) -> Self {
        self.rotate = Some(degrees);
        self
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw a stroked rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    /// Draw a filled circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a stroked circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke);

    /// Draw an open polyline, optionally revealed left to right.
    fn draw_polyline(&mut self, points: &[Point], stroke: &Stroke, reveal: Option<Reveal>);

    /// Fill a closed polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Color);

    /// Draw text.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Push a translation; subsequent operations are offset by `(dx, dy)`.
    fn push_translate(&mut self, dx: f32, dy: f32);

    /// Pop the innermost translation.
    fn pop_translate(&mut self);
}
