//! SVG canvas backend.
//!
//! Implements [`Canvas`] by appending SVG elements to a document buffer.
//! Coordinates are emitted as-is; translation nesting maps to `<g>`
//! groups. Polyline reveal animations use `pathLength` normalization so
//! no geometric length computation is needed.

use pokedash_core::{
    Canvas, Color, FontWeight, Point, Rect, Reveal, Size, Stroke, TextAnchor, TextStyle,
};
use std::fmt::Write as _;

/// A [`Canvas`] that builds a standalone SVG document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    size: Size,
    body: String,
    depth: usize,
}

impl SvgCanvas {
    /// Create a canvas for a document of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
            depth: 0,
        }
    }

    /// Finish the document, closing any open groups.
    #[must_use]
    pub fn finish(mut self) -> String {
        while self.depth > 0 {
            self.pop_translate();
        }
        format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"100%\" height=\"100%\" ",
                "viewBox=\"0 0 {} {}\" preserveAspectRatio=\"xMidYMid meet\" ",
                "font-family=\"sans-serif\">\n{}</svg>\n"
            ),
            fmt(self.size.width),
            fmt(self.size.height),
            self.body
        )
    }

    fn fill_attrs(color: Color) -> String {
        if color.is_opaque() {
            format!("fill=\"{}\"", color.to_hex())
        } else {
            format!("fill=\"{}\" fill-opacity=\"{}\"", color.to_hex(), fmt(color.a))
        }
    }

    fn stroke_attrs(stroke: &Stroke) -> String {
        let mut attrs = format!(
            "stroke=\"{}\" stroke-width=\"{}\"",
            stroke.color.to_hex(),
            fmt(stroke.width)
        );
        if !stroke.color.is_opaque() {
            let _ = write!(attrs, " stroke-opacity=\"{}\"", fmt(stroke.color.a));
        }
        if let Some(dash) = stroke.dash {
            let _ = write!(attrs, " stroke-dasharray=\"{}\"", fmt(dash));
        }
        attrs
    }

    fn points_attr(points: &[Point]) -> String {
        let mut out = String::new();
        for (index, point) in points.iter().enumerate() {
            if index > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{},{}", fmt(point.x), fmt(point.y));
        }
        out
    }
}

impl Canvas for SvgCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" {}/>",
            fmt(rect.x),
            fmt(rect.y),
            fmt(rect.width.max(0.0)),
            fmt(rect.height.max(0.0)),
            Self::fill_attrs(color)
        );
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" {}/>",
            fmt(rect.x),
            fmt(rect.y),
            fmt(rect.width.max(0.0)),
            fmt(rect.height.max(0.0)),
            Self::stroke_attrs(stroke)
        );
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
            fmt(from.x),
            fmt(from.y),
            fmt(to.x),
            fmt(to.y),
            Self::stroke_attrs(stroke)
        );
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>",
            fmt(center.x),
            fmt(center.y),
            fmt(radius),
            Self::fill_attrs(color)
        );
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: &Stroke) {
        let _ = writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" {}/>",
            fmt(center.x),
            fmt(center.y),
            fmt(radius),
            Self::stroke_attrs(stroke)
        );
    }

    fn draw_polyline(&mut self, points: &[Point], stroke: &Stroke, reveal: Option<Reveal>) {
        if points.len() < 2 {
            return;
        }
        let base = format!(
            "<polyline points=\"{}\" fill=\"none\" {}",
            Self::points_attr(points),
            Self::stroke_attrs(stroke)
        );
        match reveal {
            // pathLength="1" normalizes the dash metric so the dashoffset
            // animation needs no real path length.
            Some(reveal) => {
                let _ = writeln!(
                    self.body,
                    concat!(
                        "{} pathLength=\"1\" stroke-dasharray=\"1\" stroke-dashoffset=\"1\">",
                        "<animate attributeName=\"stroke-dashoffset\" from=\"1\" to=\"0\" ",
                        "dur=\"{}ms\" begin=\"{}ms\" fill=\"freeze\"/></polyline>"
                    ),
                    base,
                    reveal.duration_ms,
                    reveal.delay_ms
                );
            }
            None => {
                let _ = writeln!(self.body, "{base}/>");
            }
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let _ = writeln!(
            self.body,
            "<polygon points=\"{}\" {}/>",
            Self::points_attr(points),
            Self::fill_attrs(color)
        );
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let mut attrs = format!(
            "x=\"{}\" y=\"{}\" font-size=\"{}\" text-anchor=\"{}\" fill=\"{}\"",
            fmt(position.x),
            fmt(position.y),
            fmt(style.size),
            anchor,
            style.color.to_hex()
        );
        if style.weight == FontWeight::Bold {
            attrs.push_str(" font-weight=\"bold\"");
        }
        if let Some(degrees) = style.rotate {
            let _ = write!(
                attrs,
                " transform=\"rotate({} {} {})\"",
                fmt(degrees),
                fmt(position.x),
                fmt(position.y)
            );
        }
        let _ = writeln!(self.body, "<text {attrs}>{}</text>", escape(text));
    }

    fn push_translate(&mut self, dx: f32, dy: f32) {
        let _ = writeln!(
            self.body,
            "<g transform=\"translate({},{})\">",
            fmt(dx),
            fmt(dy)
        );
        self.depth += 1;
    }

    fn pop_translate(&mut self) {
        if self.depth > 0 {
            self.body.push_str("</g>\n");
            self.depth -= 1;
        }
    }
}

/// Format a coordinate: integers plain, otherwise two decimals.
fn fmt(value: f32) -> String {
    if (value - value.round()).abs() < 1e-4 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Escape text content for XML.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
