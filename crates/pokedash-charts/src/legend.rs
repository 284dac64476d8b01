//! Legend layout shared by the quadrant and parallel charts.

use pokedash_core::{Color, Point, Rect};

/// Input entry: a label and its color.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Display label
    pub label: String,
    /// Swatch color
    pub color: Color,
}

impl LegendEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}

/// The swatch shape drawn next to a legend label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Swatch {
    /// Small filled square
    Square(Rect),
    /// Short horizontal line sample
    Line(Point, Point),
}

/// A positioned legend item ready to paint, with click-target bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItem {
    /// Display label
    pub label: String,
    /// Swatch color
    pub color: Color,
    /// Swatch shape and position
    pub swatch: Swatch,
    /// Label anchor position
    pub label_position: Point,
    /// Hit-test bounds covering swatch and label
    pub bounds: Rect,
}

/// Vertical legend of square swatches, one row per entry.
///
/// Matches the quadrant chart legend: 10px swatches on 15px rows.
#[must_use]
pub fn swatch_column(entries: &[LegendEntry], origin: Point) -> Vec<LegendItem> {
    const ROW_STEP: f32 = 15.0;
    const SWATCH: f32 = 10.0;

    entries
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let y = (row as f32).mul_add(ROW_STEP, origin.y);
            LegendItem {
                label: entry.label.clone(),
                color: entry.color,
                swatch: Swatch::Square(Rect::new(origin.x, y, SWATCH, SWATCH)),
                label_position: Point::new(origin.x + SWATCH + 5.0, y + 8.0),
                bounds: Rect::new(origin.x, y, 160.0, ROW_STEP),
            }
        })
        .collect()
}

/// Horizontal legend of line swatches, centered on `center_x`.
///
/// Matches the parallel chart mini legend: 60px columns with a 20px line
/// sample per entry.
#[must_use]
pub fn line_row(entries: &[LegendEntry], center_x: f32, y: f32) -> Vec<LegendItem> {
    const COLUMN_STEP: f32 = 60.0;
    const LINE_LENGTH: f32 = 20.0;

    let start_x = (entries.len() as f32).mul_add(-COLUMN_STEP / 2.0, center_x);
    entries
        .iter()
        .enumerate()
        .map(|(column, entry)| {
            let x = (column as f32).mul_add(COLUMN_STEP, start_x);
            LegendItem {
                label: entry.label.clone(),
                color: entry.color,
                swatch: Swatch::Line(Point::new(x, y), Point::new(x + LINE_LENGTH, y)),
                label_position: Point::new(x + LINE_LENGTH + 5.0, y + 4.0),
                bounds: Rect::new(x, y - 6.0, COLUMN_STEP, 12.0),
            }
        })
        .collect()
}
