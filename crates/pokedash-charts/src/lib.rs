//! Chart widgets for Pokedash dashboards.
//!
//! Each chart separates a pure scene computation (data + plot size →
//! typed marks) from the imperative paint step, so layout and interaction
//! logic are testable without a rendering surface. All charts repaint
//! from scratch; none keeps incremental draw state.

pub mod axis;
mod bar;
mod legend;
mod parallel;
mod quadrant;
mod tooltip;

pub use bar::{BarChart, BarMark, BarMessage, BarScene};
pub use legend::{line_row, swatch_column, LegendEntry, LegendItem, Swatch};
pub use parallel::{
    AxisMark, ParallelChart, ParallelMessage, ParallelScene, PolylineMark, ViewMode,
};
pub use quadrant::{
    PointMark, QuadrantChart, QuadrantMessage, QuadrantScene, RegionMark,
};
pub use tooltip::Tooltip;

/// Vertical strip reserved at the bottom of each chart for the x axis.
pub const AXIS_STRIP: f32 = 40.0;

/// Height of the plotting area inside a chart allocation.
#[must_use]
pub fn plot_height(chart_height: f32) -> f32 {
    (chart_height - AXIS_STRIP).max(0.0)
}
