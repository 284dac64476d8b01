//! Quadrant scatter chart: total strength vs capture difficulty.
//!
//! Axis domains always come from the full record set so points keep their
//! positions across filter changes; the median split lines move with the
//! filtered subset.

use crate::legend::{swatch_column, LegendEntry, LegendItem};
use crate::{axis, plot_height};
use pokedash_core::{
    stats, Canvas, Color, Event, LayoutResult, LinearScale, MouseButton, Point, Rect, Size,
    Stroke, TextAnchor, TextStyle, Theme, Widget,
};
use pokedash_data::{filter_records, Filter, Record};
use std::any::Any;
use std::collections::BTreeSet;

/// Pointer distance within which a point counts as hovered.
const HOVER_RADIUS: f32 = 5.0;
/// Drags smaller than this in both dimensions clear the brush.
const MIN_BRUSH: f32 = 2.0;

/// One background quadrant region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionMark {
    /// Region rectangle in plot coordinates
    pub rect: Rect,
    /// Fill color (painted translucent)
    pub color: Color,
}

/// One scatter point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointMark {
    /// Index into the full record set
    pub record_index: usize,
    /// Entity name
    pub name: String,
    /// Primary category
    pub category: String,
    /// Total strength value
    pub total: f64,
    /// Capture difficulty value
    pub catch_rate: f64,
    /// Screen position in plot coordinates
    pub position: Point,
    /// Point opacity after selection dimming
    pub opacity: f32,
    /// Fill color
    pub color: Color,
}

/// Computed quadrant chart scene.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadrantScene {
    /// The four background regions; empty when the filtered set is empty
    pub regions: Vec<RegionMark>,
    /// Median split position along x, in pixels
    pub median_x: Option<f32>,
    /// Median split position along y, in pixels
    pub median_y: Option<f32>,
    /// Points for the filtered subset
    pub points: Vec<PointMark>,
    /// Total-strength scale along x
    pub x_scale: LinearScale,
    /// Capture-difficulty scale along y
    pub y_scale: LinearScale,
    /// Region legend
    pub legend: Vec<LegendItem>,
}

/// Messages emitted by the quadrant chart.
#[derive(Debug, Clone, PartialEq)]
pub enum QuadrantMessage {
    /// Pointer is over a point
    PointHovered {
        /// Index into the full record set
        record_index: usize,
        /// Entity name
        name: String,
        /// Primary category
        category: String,
        /// Total strength
        total: f64,
        /// Capture difficulty
        catch_rate: f64,
        /// Pointer position in dashboard coordinates
        position: Point,
    },
    /// Pointer left all points
    HoverCleared,
    /// A brush drag finished over this plot-local rectangle
    Brushed(Rect),
    /// A degenerate brush (click) cleared the selection
    BrushCleared,
}

/// Quadrant chart widget.
#[derive(Debug, Clone)]
pub struct QuadrantChart {
    records: Vec<Record>,
    filter: Filter,
    selection: Option<BTreeSet<usize>>,
    theme: Theme,
    bounds: Rect,
    hovered: Option<usize>,
    drag_origin: Option<Point>,
}

impl QuadrantChart {
    /// Build over the full record set with no filter or selection.
    #[must_use]
    pub fn new(records: &[Record], theme: Theme) -> Self {
        Self {
            records: records.to_vec(),
            filter: Filter::All,
            selection: None,
            theme,
            bounds: Rect::default(),
            hovered: None,
            drag_origin: None,
        }
    }

    /// Set the active category filter.
    #[must_use]
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the brush selection (record indices into the full set).
    #[must_use]
    pub fn with_selection(mut self, selection: Option<BTreeSet<usize>>) -> Self {
        self.selection = selection;
        self
    }

    /// Mark a record's point as hovered; it paints enlarged.
    #[must_use]
    pub const fn with_hovered(mut self, hovered: Option<usize>) -> Self {
        self.hovered = hovered;
        self
    }

    /// Compute the scene for a chart allocation of `size`.
    #[must_use]
    pub fn scene(&self, size: Size) -> QuadrantScene {
        let plot_h = plot_height(size.height);

        let totals: Vec<f64> = self.records.iter().map(|r| r.total).collect();
        let rates: Vec<f64> = self.records.iter().map(|r| r.catch_rate).collect();
        let (total_min, total_max) = stats::extent(&totals).unwrap_or((0.0, 1.0));
        let (_, rate_max) = stats::extent(&rates).unwrap_or((0.0, 1.0));

        let x_scale = LinearScale::new((total_min * 0.9, total_max * 1.05), (0.0, size.width));
        let y_scale = LinearScale::new((0.0, rate_max * 1.05), (plot_h, 0.0));

        let filtered = filter_records(&self.records, &self.filter);
        let filtered_totals: Vec<f64> = filtered.iter().map(|r| r.total).collect();
        let filtered_rates: Vec<f64> = filtered.iter().map(|r| r.catch_rate).collect();
        let median_total = stats::median(&filtered_totals);
        let median_rate = stats::median(&filtered_rates);

        let median_x = median_total.map(|m| x_scale.scale(m));
        let median_y = median_rate.map(|m| y_scale.scale(m));

        let regions = match (median_x, median_y) {
            (Some(mx), Some(my)) => {
                let q = self.theme.quadrants;
                vec![
                    RegionMark {
                        rect: Rect::new(0.0, 0.0, mx, my),
                        color: q.top_left,
                    },
                    RegionMark {
                        rect: Rect::new(mx, 0.0, size.width - mx, my),
                        color: q.top_right,
                    },
                    RegionMark {
                        rect: Rect::new(0.0, my, mx, plot_h - my),
                        color: q.bottom_left,
                    },
                    RegionMark {
                        rect: Rect::new(mx, my, size.width - mx, plot_h - my),
                        color: q.bottom_right,
                    },
                ]
            }
            _ => Vec::new(),
        };

        let points = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| self.filter.matches(r))
            .map(|(record_index, record)| {
                let opacity = match &self.selection {
                    Some(selected) if selected.contains(&record_index) => 1.0,
                    Some(_) => 0.1,
                    None => 0.7,
                };
                PointMark {
                    record_index,
                    name: record.name.clone(),
                    category: record.primary_type.clone(),
                    total: record.total,
                    catch_rate: record.catch_rate,
                    position: Point::new(
                        x_scale.scale(record.total),
                        y_scale.scale(record.catch_rate),
                    ),
                    opacity,
                    color: self.theme.category_color(&record.primary_type),
                }
            })
            .collect();

        let q = self.theme.quadrants;
        let legend_entries = [
            LegendEntry::new("Strong & Easy to Catch", q.top_right),
            LegendEntry::new("Weak & Easy to Catch", q.top_left),
            LegendEntry::new("Strong & Hard to Catch", q.bottom_right),
            LegendEntry::new("Weak & Hard to Catch", q.bottom_left),
        ];
        let legend = swatch_column(&legend_entries, Point::new(size.width - 180.0, 10.0));

        QuadrantScene {
            regions,
            median_x,
            median_y,
            points,
            x_scale,
            y_scale,
            legend,
        }
    }

    /// Record indices whose screen position falls inside a plot-local
    /// brush rectangle.
    #[must_use]
    pub fn brush_select(&self, size: Size, brush: Rect) -> BTreeSet<usize> {
        self.scene(size)
            .points
            .iter()
            .filter(|p| brush.contains(p.position))
            .map(|p| p.record_index)
            .collect()
    }

    fn to_local(&self, position: Point) -> Point {
        position - Point::new(self.bounds.x, self.bounds.y)
    }

    fn hit_point(&self, local: Point) -> Option<usize> {
        let scene = self.scene(self.bounds.size());
        scene
            .points
            .iter()
            .find(|p| p.position.distance(&local) <= HOVER_RADIUS)
            .map(|p| p.record_index)
    }
}

impl Widget for QuadrantChart {
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
            "Pokemon Quadrant Analysis: Total Stats vs Catch Rate",
            Point::new(self.bounds.width / 2.0, -5.0),
            &title_style,
        );

        for region in &scene.regions {
            canvas.fill_rect(region.rect, region.color.with_alpha(0.2));
        }

        axis::paint_bottom(canvas, &scene.x_scale, 8, plot_h, &self.theme);
        axis::paint_left(canvas, &scene.y_scale, 5, 0.0, &self.theme);

        let label_style = TextStyle::sized(12.0).anchor(TextAnchor::Middle);
        canvas.draw_text(
            "Total Stats",
            Point::new(self.bounds.width / 2.0, self.bounds.height - 5.0),
            &label_style,
        );
        canvas.draw_text(
            "Catch Rate (Higher = Easier to Catch)",
            Point::new(-40.0, plot_h / 2.0),
            &label_style.rotated(-90.0),
        );

        let median_stroke = Stroke::dashed(Color::BLACK, 1.0, 4.0);
        if let Some(mx) = scene.median_x {
            canvas.draw_line(Point::new(mx, 0.0), Point::new(mx, plot_h), &median_stroke);
        }
        if let Some(my) = scene.median_y {
            canvas.draw_line(
                Point::new(0.0, my),
                Point::new(self.bounds.width, my),
                &median_stroke,
            );
        }

        for point in &scene.points {
            let hovered = self.hovered == Some(point.record_index);
            let radius = if hovered { 6.0 } else { 3.0 };
            let outline = Stroke::new(Color::BLACK, if hovered { 1.5 } else { 0.5 });
            canvas.fill_circle(
                point.position,
                radius,
                point.color.with_alpha(point.opacity),
            );
            canvas.stroke_circle(point.position, radius, &outline);
        }

        let legend_style = TextStyle::sized(8.0);
        for item in &scene.legend {
            if let crate::legend::Swatch::Square(rect) = item.swatch {
                canvas.fill_rect(rect, item.color.with_alpha(0.7));
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
                self.drag_origin = Some(self.to_local(*position));
                None
            }
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => {
                let origin = self.drag_origin.take()?;
                let brush = Rect::from_corners(origin, self.to_local(*position));
                if brush.width < MIN_BRUSH && brush.height < MIN_BRUSH {
                    Some(Box::new(QuadrantMessage::BrushCleared))
                } else {
                    Some(Box::new(QuadrantMessage::Brushed(brush)))
                }
            }
            Event::MouseMove { position } if self.drag_origin.is_none() => {
                match self.hit_point(self.to_local(*position)) {
                    Some(record_index) => {
                        self.hovered = Some(record_index);
                        let record = &self.records[record_index];
                        Some(Box::new(QuadrantMessage::PointHovered {
                            record_index,
                            name: record.name.clone(),
                            category: record.primary_type.clone(),
                            total: record.total,
                            catch_rate: record.catch_rate,
                            position: *position,
                        }))
                    }
                    None if self.hovered.take().is_some() => {
                        Some(Box::new(QuadrantMessage::HoverCleared))
                    }
                    None => None,
                }
            }
            Event::MouseLeave => {
                self.drag_origin = None;
                self.hovered
                    .take()
                    .map(|_| Box::new(QuadrantMessage::HoverCleared) as Box<dyn Any + Send>)
            }
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
    use proptest::prelude::*;

    const SIZE: Size = Size::new(400.0, 240.0);

    fn records() -> Vec<Record> {
        let csv = "Name,Type_1,Type_2,Total,HP,Attack,Defense,Sp_Atk,Sp_Def,Speed,Catch_Rate\n\
                   a1,Water,,300,50,50,50,50,50,50,200\n\
                   a2,Water,,400,55,50,50,50,50,55,120\n\
                   b1,Fire,,500,60,50,50,50,50,60,60\n\
                   b2,Fire,,600,60,50,50,50,50,60,30";
        read_records(csv.as_bytes()).expect("valid csv")
    }

    #[test]
    fn regions_partition_plot_exactly() {
        let chart = QuadrantChart::new(&records(), Theme::pokemon());
        let scene = chart.scene(SIZE);
        let plot_h = plot_height(SIZE.height);
        assert_eq!(scene.regions.len(), 4);
        let area: f32 = scene.regions.iter().map(|r| r.rect.size().area()).sum();
        assert!((area - SIZE.width * plot_h).abs() < 1e-2);
        // No pairwise overlap.
        for (i, a) in scene.regions.iter().enumerate() {
            for b in scene.regions.iter().skip(i + 1) {
                assert!(!a.rect.intersects(&b.rect), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn medians_follow_filtered_subset() {
        let theme = Theme::pokemon();
        let chart = QuadrantChart::new(&records(), theme.clone());
        let all_scene = chart.scene(SIZE);

        let fire = QuadrantChart::new(&records(), theme)
            .with_filter(Filter::Category("Fire".to_string()));
        let fire_scene = fire.scene(SIZE);

        // Domains stay pinned to the full set...
        assert_eq!(all_scene.x_scale, fire_scene.x_scale);
        assert_eq!(all_scene.y_scale, fire_scene.y_scale);
        // ...while the split moves to the Fire median (550 vs 450).
        let all_mx = all_scene.median_x.expect("median");
        let fire_mx = fire_scene.median_x.expect("median");
        assert!(fire_mx > all_mx);
    }

    #[test]
    fn filter_restricts_points_and_all_restores() {
        let theme = Theme::pokemon();
        let filtered = QuadrantChart::new(&records(), theme.clone())
            .with_filter(Filter::Category("Water".to_string()));
        assert_eq!(filtered.scene(SIZE).points.len(), 2);

        let restored = QuadrantChart::new(&records(), theme).with_filter(Filter::All);
        assert_eq!(restored.scene(SIZE).points.len(), 4);
    }

    #[test]
    fn empty_filter_yields_no_regions() {
        let chart = QuadrantChart::new(&records(), Theme::pokemon())
            .with_filter(Filter::Category("Ghost".to_string()));
        let scene = chart.scene(SIZE);
        assert!(scene.regions.is_empty());
        assert!(scene.points.is_empty());
        assert_eq!(scene.median_x, None);
    }

    #[test]
    fn brush_selects_points_inside_rect() {
        let chart = QuadrantChart::new(&records(), Theme::pokemon());
        let scene = chart.scene(SIZE);
        let target = &scene.points[0];
        let brush = Rect::new(
            target.position.x - 5.0,
            target.position.y - 5.0,
            10.0,
            10.0,
        );
        let selected = chart.brush_select(SIZE, brush);
        assert!(selected.contains(&target.record_index));
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn selection_dims_unselected_points() {
        let selection: BTreeSet<usize> = [0].into_iter().collect();
        let chart = QuadrantChart::new(&records(), Theme::pokemon())
            .with_selection(Some(selection));
        let scene = chart.scene(SIZE);
        assert_eq!(scene.points[0].opacity, 1.0);
        assert!(scene.points[1..].iter().all(|p| p.opacity == 0.1));
    }

    #[test]
    fn drag_emits_brush_message() {
        let mut chart = QuadrantChart::new(&records(), Theme::pokemon());
        chart.layout(Rect::new(0.0, 0.0, SIZE.width, SIZE.height));
        chart.event(&Event::MouseDown {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Left,
        });
        let message = chart
            .event(&Event::MouseUp {
                position: Point::new(110.0, 90.0),
                button: MouseButton::Left,
            })
            .expect("brush message")
            .downcast::<QuadrantMessage>()
            .expect("quadrant message");
        assert_eq!(
            *message,
            QuadrantMessage::Brushed(Rect::new(10.0, 10.0, 100.0, 80.0))
        );
    }

    #[test]
    fn click_without_drag_clears_brush() {
        let mut chart = QuadrantChart::new(&records(), Theme::pokemon());
        chart.layout(Rect::new(0.0, 0.0, SIZE.width, SIZE.height));
        chart.event(&Event::MouseDown {
            position: Point::new(10.0, 10.0),
            button: MouseButton::Left,
        });
        let message = chart
            .event(&Event::MouseUp {
                position: Point::new(10.5, 10.5),
                button: MouseButton::Left,
            })
            .expect("message")
            .downcast::<QuadrantMessage>()
            .expect("quadrant message");
        assert_eq!(*message, QuadrantMessage::BrushCleared);
    }

    proptest! {
        #[test]
        fn regions_always_partition(
            totals in proptest::collection::vec(100.0f64..700.0, 1..40),
            rates in proptest::collection::vec(3.0f64..255.0, 1..40),
        ) {
            let n = totals.len().min(rates.len());
            let records: Vec<Record> = (0..n)
                .map(|i| Record {
                    name: format!("r{i}"),
                    primary_type: "Normal".to_string(),
                    secondary_type: None,
                    total: totals[i],
                    hp: 1.0,
                    attack: 1.0,
                    defense: 1.0,
                    sp_atk: 1.0,
                    sp_def: 1.0,
                    speed: 1.0,
                    catch_rate: rates[i],
                })
                .collect();
            let chart = QuadrantChart::new(&records, Theme::pokemon());
            let scene = chart.scene(SIZE);
            let area: f32 = scene.regions.iter().map(|r| r.rect.size().area()).sum();
            let plot_area = SIZE.width * plot_height(SIZE.height);
            prop_assert!((area - plot_area).abs() < plot_area * 1e-4 + 1e-2);
        }
    }
}
