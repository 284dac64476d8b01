//! Parallel-coordinates chart: six stat axes, one polyline per category
//! (aggregate view) or per record (detail view).
//!
//! The only non-trivial state transition in the dashboard lives here:
//! `Aggregate` to `Detail(category)` and back. The widget emits [`ParallelMessage`]
//! values; the application owns the [`ViewMode`] and rebuilds the chart
//! with the new mode, so entering detail and returning reproduces the
//! aggregate scene exactly.

use crate::legend::{line_row, LegendEntry, LegendItem};
use crate::{axis, plot_height};
use pokedash_core::{
    stats, Canvas, Color, Event, LayoutResult, LinearScale, MouseButton, Point, PointScale, Rect,
    Reveal, Size, Stroke, TextAnchor, TextStyle, Theme, Widget,
};
use pokedash_data::{aggregate_by_category, filter_records, Filter, Record, StatAxis};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Pointer distance within which a polyline counts as hovered.
const HOVER_DISTANCE: f32 = 4.0;
/// The aggregate legend shows at most this many categories.
const LEGEND_CAP: usize = 14;

/// Which view the chart is showing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    /// One line per category (mean of its members)
    #[default]
    Aggregate,
    /// One line per record of the named category
    Detail(String),
}

/// One stat axis with its own value scale.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisMark {
    /// Axis label (stat column name)
    pub label: String,
    /// Horizontal position
    pub x: f32,
    /// Value scale, top-down pixels
    pub scale: LinearScale,
}

/// One polyline across the six axes.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineMark {
    /// Category (aggregate) or entity (detail) label
    pub label: String,
    /// Line color
    pub color: Color,
    /// Stroke width
    pub width: f32,
    /// Vertex per axis, left to right
    pub points: Vec<Point>,
    /// Staggered reveal animation
    pub reveal: Reveal,
    /// Tooltip title for hover
    pub tooltip_title: String,
    /// Tooltip detail lines for hover
    pub tooltip_lines: Vec<String>,
}

/// Computed parallel-coordinates scene.
#[derive(Debug, Clone, PartialEq)]
pub struct ParallelScene {
    /// Chart title
    pub title: String,
    /// Hint line under the title (aggregate view only)
    pub subtitle: Option<String>,
    /// Record-count note (detail view only)
    pub note: Option<String>,
    /// The six stat axes
    pub axes: Vec<AxisMark>,
    /// Polylines in draw order
    pub lines: Vec<PolylineMark>,
    /// Clickable category legend (aggregate view only)
    pub legend: Vec<LegendItem>,
    /// Back control bounds (detail view only)
    pub back_button: Option<Rect>,
}

/// Messages emitted by the parallel-coordinates chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ParallelMessage {
    /// Pointer is over a polyline
    Hovered {
        /// Line index in draw order
        index: usize,
        /// Tooltip title
        title: String,
        /// Tooltip detail lines
        lines: Vec<String>,
        /// Pointer position in dashboard coordinates
        position: Point,
    },
    /// Pointer left all polylines
    HoverCleared,
    /// A category line or legend entry was clicked
    DrillDown(String),
    /// The back control was clicked
    BackToAggregate,
}

/// Parallel-coordinates chart widget.
#[derive(Debug, Clone)]
pub struct ParallelChart {
    records: Vec<Record>,
    view: ViewMode,
    theme: Theme,
    bounds: Rect,
    hovered: Option<usize>,
}

impl ParallelChart {
    /// Build in aggregate view over the full record set.
    #[must_use]
    pub fn new(records: &[Record], theme: Theme) -> Self {
        Self {
            records: records.to_vec(),
            view: ViewMode::Aggregate,
            theme,
            bounds: Rect::default(),
            hovered: None,
        }
    }

    /// Set the view mode.
    #[must_use]
    pub fn with_view(mut self, view: ViewMode) -> Self {
        self.view = view;
        self
    }

    /// Mark a polyline as hovered; it paints thicker and fully opaque.
    #[must_use]
    pub const fn with_hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Compute the scene for a chart allocation of `size`.
    #[must_use]
    pub fn scene(&self, size: Size) -> ParallelScene {
        match &self.view {
            ViewMode::Aggregate => self.aggregate_scene(size),
            ViewMode::Detail(category) => self.detail_scene(size, category),
        }
    }

    fn axis_positions(size: Size) -> PointScale {
        let labels = StatAxis::ALL
            .iter()
            .map(|a| a.label().to_string())
            .collect();
        PointScale::new(labels, (0.0, size.width), 0.5)
    }

    fn axes_for<F>(size: Size, value_of: F) -> Vec<AxisMark>
    where
        F: Fn(StatAxis) -> Vec<f64>,
    {
        let plot_h = plot_height(size.height);
        let positions = Self::axis_positions(size);
        StatAxis::ALL
            .iter()
            .enumerate()
            .map(|(index, stat)| {
                let values = value_of(*stat);
                let (min, max) = stats::extent(&values).unwrap_or((0.0, 1.0));
                AxisMark {
                    label: stat.label().to_string(),
                    x: positions.position_at(index),
                    scale: LinearScale::new((min * 0.9, max * 1.05), (plot_h, 0.0)),
                }
            })
            .collect()
    }

    fn polyline_points(axes: &[AxisMark], value_of: impl Fn(StatAxis) -> f64) -> Vec<Point> {
        axes.iter()
            .zip(StatAxis::ALL)
            .map(|(axis_mark, stat)| {
                Point::new(axis_mark.x, axis_mark.scale.scale(value_of(stat)))
            })
            .collect()
    }

    fn aggregate_scene(&self, size: Size) -> ParallelScene {
        let aggregates = aggregate_by_category(&self.records);
        let axes = Self::axes_for(size, |stat| {
            aggregates.iter().map(|a| a.stat_mean(stat)).collect()
        });

        let lines = aggregates
            .iter()
            .enumerate()
            .map(|(index, aggregate)| {
                let tooltip_lines = StatAxis::ALL
                    .iter()
                    .map(|stat| format!("{}: {:.1}", stat.label(), aggregate.stat_mean(*stat)))
                    .collect();
                PolylineMark {
                    label: aggregate.category.clone(),
                    color: self.theme.category_color(&aggregate.category),
                    width: 2.0,
                    points: Self::polyline_points(&axes, |stat| aggregate.stat_mean(stat)),
                    reveal: Reveal::new(1000, index as u32 * 100),
                    tooltip_title: format!(
                        "{} Type ({} Pokémon)",
                        aggregate.category, aggregate.count
                    ),
                    tooltip_lines,
                }
            })
            .collect();

        // Aggregates are already sorted by descending count.
        let legend_entries: Vec<LegendEntry> = aggregates
            .iter()
            .take(LEGEND_CAP)
            .map(|a| LegendEntry::new(a.category.clone(), self.theme.category_color(&a.category)))
            .collect();
        let legend = line_row(&legend_entries, size.width / 2.0, -30.0);

        ParallelScene {
            title: "Pokemon Stats by Primary Type".to_string(),
            subtitle: Some("Click on a Type to Explore its Pokemon".to_string()),
            note: None,
            axes,
            lines,
            legend,
            back_button: None,
        }
    }

    fn detail_scene(&self, size: Size, category: &str) -> ParallelScene {
        let filter = Filter::Category(category.to_string());
        let members = filter_records(&self.records, &filter);
        let axes = Self::axes_for(size, |stat| {
            members.iter().map(|r| r.stat(stat)).collect()
        });
        let color = self.theme.category_color(category);

        let lines = members
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let type_line = record.secondary_type.as_ref().map_or_else(
                    || format!("Type: {}", record.primary_type),
                    |second| format!("Type: {}/{second}", record.primary_type),
                );
                let tooltip_lines = std::iter::once(type_line)
                    .chain(StatAxis::ALL.iter().map(|stat| {
                        format!("{}: {}", stat.label(), axis::format_tick(record.stat(*stat)))
                    }))
                    .collect();
                PolylineMark {
                    label: record.name.clone(),
                    color,
                    width: 1.0,
                    points: Self::polyline_points(&axes, |stat| record.stat(stat)),
                    reveal: Reveal::new(800, index as u32 * 20),
                    tooltip_title: record.name.clone(),
                    tooltip_lines,
                }
            })
            .collect();

        ParallelScene {
            title: format!("Individual {category} Type Pokémon Stats"),
            subtitle: None,
            note: Some(format!("Showing {} {category} Pokémon", members.len())),
            axes,
            lines,
            legend: Vec::new(),
            back_button: Some(Rect::new(10.0, -30.0, 80.0, 11.0)),
        }
    }

    fn to_local(&self, position: Point) -> Point {
        position - Point::new(self.bounds.x, self.bounds.y)
    }

    fn hit_line(scene: &ParallelScene, local: Point) -> Option<usize> {
        scene.lines.iter().position(|line| {
            line.points
                .windows(2)
                .any(|pair| segment_distance(local, pair[0], pair[1]) <= HOVER_DISTANCE)
        })
    }
}

/// Distance from a point to a line segment.
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let ab = b - a;
    let length_sq = ab.x.mul_add(ab.x, ab.y * ab.y);
    if length_sq < f32::EPSILON {
        return p.distance(&a);
    }
    let ap = p - a;
    let t = (ap.x.mul_add(ab.x, ap.y * ab.y) / length_sq).clamp(0.0, 1.0);
    let closest = Point::new(t.mul_add(ab.x, a.x), t.mul_add(ab.y, a.y));
    p.distance(&closest)
}

impl Widget for ParallelChart {
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
        canvas.push_translate(self.bounds.x, self.bounds.y);

        let title_style = TextStyle::sized(16.0).bold().anchor(TextAnchor::Middle);
        let title_y = if scene.subtitle.is_some() { -60.0 } else { -45.0 };
        canvas.draw_text(
            &scene.title,
            Point::new(self.bounds.width / 2.0, title_y),
            &title_style,
        );
        if let Some(subtitle) = &scene.subtitle {
            canvas.draw_text(
                subtitle,
                Point::new(self.bounds.width / 2.0, -45.0),
                &TextStyle::sized(12.0).anchor(TextAnchor::Middle),
            );
        }
        if let Some(note) = &scene.note {
            canvas.draw_text(
                note,
                Point::new(self.bounds.width - 10.0, -25.0),
                &TextStyle::sized(12.0).anchor(TextAnchor::End),
            );
        }

        if let Some(back) = scene.back_button {
            canvas.fill_rect(back, Color::rgb8(0xf0, 0xf0, 0xf0));
            canvas.stroke_rect(back, &Stroke::new(Color::rgb8(0x99, 0x99, 0x99), 1.0));
            canvas.draw_text(
                "← Back",
                Point::new(back.x + back.width / 2.0, back.bottom() - 1.5),
                &TextStyle::sized(12.0).anchor(TextAnchor::Middle),
            );
        }

        for axis_mark in &scene.axes {
            axis::paint_left(canvas, &axis_mark.scale, 5, axis_mark.x, &self.theme);
            canvas.draw_text(
                &axis_mark.label,
                Point::new(axis_mark.x, -9.0),
                &TextStyle::sized(10.0).anchor(TextAnchor::Middle),
            );
        }

        for (index, line) in scene.lines.iter().enumerate() {
            let hovered = self.hovered == Some(index);
            let stroke = Stroke::new(
                line.color.with_alpha(if hovered { 1.0 } else { 0.7 }),
                if hovered { line.width * 2.0 } else { line.width },
            );
            canvas.draw_polyline(&line.points, &stroke, Some(line.reveal));
        }

        let legend_style = TextStyle::sized(10.0);
        for item in &scene.legend {
            if let crate::legend::Swatch::Line(from, to) = item.swatch {
                canvas.draw_line(from, to, &Stroke::new(item.color, 2.0));
            }
            canvas.draw_text(&item.label, item.label_position, &legend_style);
        }

        canvas.pop_translate();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                let local = self.to_local(*position);
                let scene = self.scene(self.bounds.size());
                if let Some(back) = scene.back_button {
                    if back.contains(local) {
                        return Some(Box::new(ParallelMessage::BackToAggregate));
                    }
                }
                if let Some(item) = scene.legend.iter().find(|i| i.bounds.contains(local)) {
                    return Some(Box::new(ParallelMessage::DrillDown(item.label.clone())));
                }
                if self.view == ViewMode::Aggregate {
                    if let Some(index) = Self::hit_line(&scene, local) {
                        return Some(Box::new(ParallelMessage::DrillDown(
                            scene.lines[index].label.clone(),
                        )));
                    }
                }
                None
            }
            Event::MouseMove { position } => {
                let local = self.to_local(*position);
                let scene = self.scene(self.bounds.size());
                match Self::hit_line(&scene, local) {
                    Some(index) => {
                        self.hovered = Some(index);
                        let line = &scene.lines[index];
                        Some(Box::new(ParallelMessage::Hovered {
                            index,
                            title: line.tooltip_title.clone(),
                            lines: line.tooltip_lines.clone(),
                            position: *position,
                        }))
                    }
                    None if self.hovered.take().is_some() => {
                        Some(Box::new(ParallelMessage::HoverCleared))
                    }
                    None => None,
                }
            }
            Event::MouseLeave => self
                .hovered
                .take()
                .map(|_| Box::new(ParallelMessage::HoverCleared) as Box<dyn Any + Send>),
            _ => None,
        }
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedash_data::read_records;

    const SIZE: Size = Size::new(600.0, 240.0);

    fn records() -> Vec<Record> {
        let csv = "Name,Type_1,Type_2,Total,HP,Attack,Defense,Sp_Atk,Sp_Def,Speed,Catch_Rate\n\
                   w1,Water,,300,40,40,40,40,40,40,190\n\
                   w2,Water,Flying,400,60,60,60,60,60,60,90\n\
                   f1,Fire,,500,80,80,80,80,80,80,45";
        read_records(csv.as_bytes()).expect("valid csv")
    }

    #[test]
    fn aggregate_has_one_line_per_category() {
        let chart = ParallelChart::new(&records(), Theme::pokemon());
        let scene = chart.scene(SIZE);
        assert_eq!(scene.lines.len(), 2);
        assert_eq!(scene.axes.len(), 6);
        assert!(scene.back_button.is_none());
        // Water has two members, so it draws first.
        assert_eq!(scene.lines[0].label, "Water");
        assert_eq!(scene.lines[1].label, "Fire");
    }

    #[test]
    fn aggregate_lines_use_stat_means() {
        let chart = ParallelChart::new(&records(), Theme::pokemon());
        let scene = chart.scene(SIZE);
        let water = &scene.lines[0];
        // Water mean HP is 50; axis 0 is HP.
        let expected_y = scene.axes[0].scale.scale(50.0);
        assert!((water.points[0].y - expected_y).abs() < 1e-4);
    }

    #[test]
    fn detail_has_one_line_per_member() {
        let chart = ParallelChart::new(&records(), Theme::pokemon())
            .with_view(ViewMode::Detail("Water".to_string()));
        let scene = chart.scene(SIZE);
        assert_eq!(scene.lines.len(), 2);
        assert_eq!(scene.lines[0].label, "w1");
        assert!(scene.back_button.is_some());
        assert_eq!(scene.note.as_deref(), Some("Showing 2 Water Pokémon"));
        assert!(scene.legend.is_empty());
    }

    #[test]
    fn detail_domains_fit_subset() {
        let chart = ParallelChart::new(&records(), Theme::pokemon())
            .with_view(ViewMode::Detail("Water".to_string()));
        let scene = chart.scene(SIZE);
        // Water HP values are 40 and 60.
        let (d0, d1) = scene.axes[0].scale.domain();
        assert!((d0 - 36.0).abs() < 1e-9);
        assert!((d1 - 63.0).abs() < 1e-9);
    }

    #[test]
    fn drill_down_and_back_reproduces_aggregate_scene() {
        let theme = Theme::pokemon();
        let before = ParallelChart::new(&records(), theme.clone()).scene(SIZE);
        // Enter detail, then rebuild in aggregate mode, as the app does.
        let _detail = ParallelChart::new(&records(), theme.clone())
            .with_view(ViewMode::Detail("Water".to_string()))
            .scene(SIZE);
        let after = ParallelChart::new(&records(), theme)
            .with_view(ViewMode::Aggregate)
            .scene(SIZE);
        assert_eq!(before, after);
    }

    #[test]
    fn reveal_delays_stagger() {
        let chart = ParallelChart::new(&records(), Theme::pokemon());
        let scene = chart.scene(SIZE);
        assert_eq!(scene.lines[0].reveal.delay_ms, 0);
        assert_eq!(scene.lines[1].reveal.delay_ms, 100);
    }

    #[test]
    fn clicking_a_line_drills_down() {
        let mut chart = ParallelChart::new(&records(), Theme::pokemon());
        chart.layout(Rect::new(0.0, 0.0, SIZE.width, SIZE.height));
        let scene = chart.scene(SIZE);
        let on_line = scene.lines[1].points[0];
        let message = chart
            .event(&Event::MouseDown {
                position: on_line,
                button: MouseButton::Left,
            })
            .expect("message")
            .downcast::<ParallelMessage>()
            .expect("parallel message");
        assert_eq!(*message, ParallelMessage::DrillDown("Fire".to_string()));
    }

    #[test]
    fn clicking_back_returns_to_aggregate() {
        let mut chart = ParallelChart::new(&records(), Theme::pokemon())
            .with_view(ViewMode::Detail("Water".to_string()));
        chart.layout(Rect::new(0.0, 0.0, SIZE.width, SIZE.height));
        let message = chart
            .event(&Event::MouseDown {
                position: Point::new(50.0, -25.0),
                button: MouseButton::Left,
            })
            .expect("message")
            .downcast::<ParallelMessage>()
            .expect("parallel message");
        assert_eq!(*message, ParallelMessage::BackToAggregate);
    }

    #[test]
    fn segment_distance_basics() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert_eq!(segment_distance(Point::new(5.0, 3.0), a, b), 3.0);
        assert_eq!(segment_distance(Point::new(-4.0, 0.0), a, b), 4.0);
        assert_eq!(segment_distance(Point::new(2.0, 0.0), a, b), 0.0);
    }
}
