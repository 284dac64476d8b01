//! Bar chart: record count per primary category.

use crate::{axis, plot_height};
use pokedash_core::{
    BandScale, Canvas, Color, Event, LayoutResult, LinearScale, Point, Rect, Size, TextAnchor,
    TextStyle, Theme, Widget,
};
use pokedash_data::{category_counts, CategoryCount, Record};
use std::any::Any;

/// One bar, in chart-local coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct BarMark {
    /// Category label
    pub category: String,
    /// Member count the bar encodes
    pub count: usize,
    /// Bar rectangle
    pub rect: Rect,
    /// Fill color
    pub color: Color,
}

/// Computed bar chart scene.
#[derive(Debug, Clone, PartialEq)]
pub struct BarScene {
    /// Bars in descending count order
    pub bars: Vec<BarMark>,
    /// Category scale along x
    pub x_scale: BandScale,
    /// Count scale along y
    pub y_scale: LinearScale,
}

/// Messages emitted by the bar chart.
#[derive(Debug, Clone, PartialEq)]
pub enum BarMessage {
    /// Pointer entered a bar
    Hovered {
        /// Bar index in descending-count order
        index: usize,
        /// Category under the pointer
        category: String,
        /// Member count of that category
        count: usize,
        /// Pointer position in dashboard coordinates
        position: Point,
    },
    /// Pointer left all bars
    HoverCleared,
}

/// Bar chart widget: one bar per primary category, sorted by count.
#[derive(Debug, Clone)]
pub struct BarChart {
    counts: Vec<CategoryCount>,
    theme: Theme,
    bounds: Rect,
    hovered: Option<usize>,
}

impl BarChart {
    /// Build from the full record set.
    #[must_use]
    pub fn new(records: &[Record], theme: Theme) -> Self {
        Self::from_counts(category_counts(records), theme)
    }

    /// Build from precomputed counts (descending order expected).
    #[must_use]
    pub fn from_counts(counts: Vec<CategoryCount>, theme: Theme) -> Self {
        Self {
            counts,
            theme,
            bounds: Rect::default(),
            hovered: None,
        }
    }

    /// Mark one bar as hovered; it paints at reduced opacity.
    #[must_use]
    pub const fn with_hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Compute the scene for a chart allocation of `size`.
    ///
    /// Pure: no canvas, no widget state. The y domain is padded to 1.1x
    /// the maximum count so the tallest bar clears the plot top.
    #[must_use]
    pub fn scene(&self, size: Size) -> BarScene {
        let plot_h = plot_height(size.height);
        let categories: Vec<String> = self.counts.iter().map(|c| c.category.clone()).collect();
        let x_scale = BandScale::new(categories, (0.0, size.width), 0.2);
        let max_count = self.counts.first().map_or(0, |c| c.count);
        let y_scale = LinearScale::new((0.0, f64::from(max_count as u32) * 1.1), (plot_h, 0.0));

        let bars = self
            .counts
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let x = x_scale.position_at(index);
                let top = y_scale.scale(entry.count as f64);
                BarMark {
                    category: entry.category.clone(),
                    count: entry.count,
                    rect: Rect::new(x, top, x_scale.bandwidth(), (plot_h - top).max(0.0)),
                    color: self.theme.category_color(&entry.category),
                }
            })
            .collect();

        BarScene {
            bars,
            x_scale,
            y_scale,
        }
    }

    fn hit_test(&self, local: Point) -> Option<usize> {
        let scene = self.scene(self.bounds.size());
        scene.bars.iter().position(|bar| bar.rect.contains(local))
    }

    fn to_local(&self, position: Point) -> Point {
        position - Point::new(self.bounds.x, self.bounds.y)
    }
}

impl Widget for BarChart {
    fn measure(&self, available: Size) -> Size {
        available
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let scene = self.scene(self.bounds.size());
        let plot_h = plot_height(self.bounds.height);
        canvas.push_translate(self.bounds.x, self.bounds.y);

        let title_style = TextStyle::sized(16.0).bold().anchor(TextAnchor::Middle);
        canvas.draw_text(
            "Overview of Pokemon by Primary Type",
            Point::new(self.bounds.width / 2.0, -5.0),
            &title_style,
        );

        for (index, bar) in scene.bars.iter().enumerate() {
            let color = if self.hovered == Some(index) {
                bar.color.with_alpha(0.8)
            } else {
                bar.color
            };
            canvas.fill_rect(bar.rect, color);
        }

        axis::paint_band_bottom(canvas, &scene.x_scale, plot_h, &self.theme);
        axis::paint_left(canvas, &scene.y_scale, 5, 0.0, &self.theme);

        let label_style = TextStyle::sized(12.0).anchor(TextAnchor::Middle);
        canvas.draw_text(
            "Pokemon Type",
            Point::new(self.bounds.width / 2.0, self.bounds.height),
            &label_style,
        );
        canvas.draw_text(
            "Number of Pokemon",
            Point::new(-40.0, plot_h / 2.0),
            &label_style.rotated(-90.0),
        );

        canvas.pop_translate();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseMove { position } => {
                let hit = self.hit_test(self.to_local(*position));
                match hit {
                    Some(index) => {
                        self.hovered = Some(index);
                        let entry = &self.counts[index];
                        Some(Box::new(BarMessage::Hovered {
                            index,
                            category: entry.category.clone(),
                            count: entry.count,
                            position: *position,
                        }))
                    }
                    None if self.hovered.take().is_some() => {
                        Some(Box::new(BarMessage::HoverCleared))
                    }
                    None => None,
                }
            }
            Event::MouseLeave if self.hovered.take().is_some() => {
                Some(Box::new(BarMessage::HoverCleared))
            }
            _ => None,
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
