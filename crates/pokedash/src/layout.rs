//! Dashboard layout: viewport size to chart allocations.
//!
//! Three charts stack vertically inside the viewport. The arithmetic is
//! fixed: charts take 95% of the width minus the horizontal margins, and
//! `(85% of the height - 120) / 3` each, clamped so a tiny window never
//! produces negative dimensions.

use pokedash_core::{Margin, Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Fixed margin insets around each chart group.
pub const MARGIN: Margin = Margin::new(20.0, 30.0, 30.0, 60.0);

/// Vertical gap above the bar chart group.
const BAR_OFFSET: f32 = 40.0;
/// Vertical offset of the quadrant chart group past one chart height.
const QUADRANT_OFFSET: f32 = 120.0;
/// Vertical offset of the parallel chart group past two chart heights.
const PARALLEL_OFFSET: f32 = 230.0;

/// Computed dashboard layout. Derived from the viewport alone; recomputed
/// on every resize and read-only everywhere else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    /// Viewport width
    pub width: f32,
    /// Viewport height
    pub height: f32,
    /// Fixed margins
    pub margin: Margin,
    /// Drawable width shared by all charts
    pub chart_width: f32,
    /// Height allocated to each of the three charts
    pub chart_height: f32,
}

impl DashboardLayout {
    /// Compute the layout for a viewport.
    #[must_use]
    pub fn compute(viewport: Size) -> Self {
        let chart_width = viewport.width.mul_add(0.95, -90.0).max(0.0);
        let chart_height = (viewport.height.mul_add(0.85, -120.0) / 3.0).max(0.0);
        Self {
            width: viewport.width,
            height: viewport.height,
            margin: MARGIN,
            chart_width,
            chart_height,
        }
    }

    /// Dashboard title anchor.
    #[must_use]
    pub fn title_position(&self) -> Point {
        Point::new(self.width / 2.0, 30.0)
    }

    /// Bar chart allocation.
    #[must_use]
    pub fn bar_bounds(&self) -> Rect {
        self.chart_bounds(self.margin.top + BAR_OFFSET)
    }

    /// Quadrant chart allocation.
    #[must_use]
    pub fn quadrant_bounds(&self) -> Rect {
        self.chart_bounds(self.margin.top + self.chart_height + QUADRANT_OFFSET)
    }

    /// Parallel-coordinates chart allocation.
    #[must_use]
    pub fn parallel_bounds(&self) -> Rect {
        self.chart_bounds(self.margin.top + 2.0f32.mul_add(self.chart_height, PARALLEL_OFFSET))
    }

    fn chart_bounds(&self, y: f32) -> Rect {
        Rect::new(self.margin.left, y, self.chart_width, self.chart_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn chart_height_follows_formula() {
        let layout = DashboardLayout::compute(Size::new(1280.0, 800.0));
        assert!((layout.chart_height - (800.0 * 0.85 - 120.0) / 3.0).abs() < 1e-3);
        assert!((layout.chart_width - (1280.0 * 0.95 - 90.0)).abs() < 1e-3);
    }

    #[test]
    fn tiny_viewport_clamps_to_zero() {
        let layout = DashboardLayout::compute(Size::new(50.0, 100.0));
        assert_eq!(layout.chart_height, 0.0);
        assert!(layout.chart_width >= 0.0);
    }

    #[test]
    fn charts_stack_top_down() {
        let layout = DashboardLayout::compute(Size::new(1280.0, 800.0));
        let bar = layout.bar_bounds();
        let quadrant = layout.quadrant_bounds();
        let parallel = layout.parallel_bounds();
        assert!(bar.y < quadrant.y);
        assert!(quadrant.y < parallel.y);
        assert_eq!(bar.x, MARGIN.left);
        assert_eq!(bar.width, layout.chart_width);
    }

    proptest! {
        #[test]
        fn dimensions_never_negative(w in 0.0f32..4000.0, h in 0.0f32..4000.0) {
            let layout = DashboardLayout::compute(Size::new(w, h));
            prop_assert!(layout.chart_width >= 0.0);
            prop_assert!(layout.chart_height >= 0.0);
        }
    }
}
