//! Axis scenes: tick computation and painting.

use pokedash_core::{
    BandScale, Canvas, LinearScale, Point, Stroke, TextAnchor, TextStyle, Theme,
};

/// Length of axis tick marks in pixels.
const TICK_LENGTH: f32 = 6.0;

/// A tick position with its formatted label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Pixel position along the axis
    pub position: f32,
    /// Formatted value label
    pub label: String,
}

/// Compute ticks for a linear scale.
#[must_use]
pub fn linear_ticks(scale: &LinearScale, count: usize) -> Vec<Tick> {
    scale
        .ticks(count)
        .into_iter()
        .map(|value| Tick {
            position: scale.scale(value),
            label: format_tick(value),
        })
        .collect()
}

/// Format a tick value: integers plain, fractional values with one decimal.
#[must_use]
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}

/// Paint a horizontal axis along `y`, ticks and labels below the line.
pub fn paint_bottom(
    canvas: &mut dyn Canvas,
    scale: &LinearScale,
    tick_count: usize,
    y: f32,
    theme: &Theme,
) {
    let stroke = Stroke::new(theme.axis, 1.0);
    let (r0, r1) = scale.range();
    canvas.draw_line(Point::new(r0, y), Point::new(r1, y), &stroke);

    let label_style = TextStyle::sized(10.0).anchor(TextAnchor::Middle);
    for tick in linear_ticks(scale, tick_count) {
        canvas.draw_line(
            Point::new(tick.position, y),
            Point::new(tick.position, y + TICK_LENGTH),
            &stroke,
        );
        canvas.draw_text(
            &tick.label,
            Point::new(tick.position, y + TICK_LENGTH + 10.0),
            &label_style,
        );
    }
}

/// Paint a vertical axis along `x`, ticks and labels to the left.
pub fn paint_left(
    canvas: &mut dyn Canvas,
    scale: &LinearScale,
    tick_count: usize,
    x: f32,
    theme: &Theme,
) {
    let stroke = Stroke::new(theme.axis, 1.0);
    let (r0, r1) = scale.range();
    canvas.draw_line(Point::new(x, r0), Point::new(x, r1), &stroke);

    let label_style = TextStyle::sized(10.0).anchor(TextAnchor::End);
    for tick in linear_ticks(scale, tick_count) {
        canvas.draw_line(
            Point::new(x - TICK_LENGTH, tick.position),
            Point::new(x, tick.position),
            &stroke,
        );
        canvas.draw_text(
            &tick.label,
            Point::new(x - TICK_LENGTH - 2.0, tick.position + 3.0),
            &label_style,
        );
    }
}

/// Paint a horizontal band axis: baseline plus one rotated label per band.
pub fn paint_band_bottom(canvas: &mut dyn Canvas, scale: &BandScale, y: f32, theme: &Theme) {
    let stroke = Stroke::new(theme.axis, 1.0);
    let (r0, r1) = scale.range();
    canvas.draw_line(Point::new(r0, y), Point::new(r1, y), &stroke);

    // Rotated so long category names do not collide.
    let label_style = TextStyle::sized(10.0).anchor(TextAnchor::End).rotated(-30.0);
    for (index, category) in scale.categories().iter().enumerate() {
        let center = scale.position_at(index) + scale.bandwidth() / 2.0;
        canvas.draw_line(
            Point::new(center, y),
            Point::new(center, y + TICK_LENGTH),
            &stroke,
        );
        canvas.draw_text(
            category,
            Point::new(center, y + TICK_LENGTH + 8.0),
            &label_style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_ticks_positions_follow_scale() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 200.0));
        let ticks = linear_ticks(&scale, 5);
        assert_eq!(ticks.first().map(|t| t.position), Some(0.0));
        assert_eq!(ticks.last().map(|t| t.position), Some(200.0));
        assert_eq!(ticks.first().map(|t| t.label.as_str()), Some("0"));
        assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("100"));
    }

    #[test]
    fn format_tick_integers_plain() {
        assert_eq!(format_tick(40.0), "40");
        assert_eq!(format_tick(-3.0), "-3");
    }

    #[test]
    fn format_tick_fractional_one_decimal() {
        assert_eq!(format_tick(0.2), "0.2");
        assert_eq!(format_tick(12.5), "12.5");
    }
}
