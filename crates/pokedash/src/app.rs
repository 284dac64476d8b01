//! The dashboard application: state, messages, update, and rendering.
//!
//! All interaction flows through one Elm-style update function. Chart
//! widgets emit their own messages; [`Dashboard::handle`] maps them into
//! [`Message`] values, [`AppState::update`] applies them, and the charts
//! are rebuilt from the new state. Redraw is always full clear-and-rebuild.
//!
//! The dataset is loaded exactly once through a [`Command::LoadData`]
//! effect; a resize only recomputes layout, so the original's
//! resize-during-fetch race cannot occur.

use crate::layout::DashboardLayout;
use pokedash_charts::{
    axis, BarChart, BarMessage, ParallelChart, ParallelMessage, QuadrantChart, QuadrantMessage,
    Tooltip, ViewMode,
};
use pokedash_core::{
    Canvas, Color, Command, Event, Point, Rect, Size, State, TextAnchor, TextStyle, Theme, Widget,
};
use pokedash_data::{distinct_categories, load_records, Filter, Record};
use pokedash_svg::SvgCanvas;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Which mark the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverTarget {
    /// Bar index in the bar chart
    Bar(usize),
    /// Record index in the quadrant chart
    Point(usize),
    /// Line index in the parallel chart
    Line(usize),
}

/// Every state transition in the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Viewport changed size
    Resize {
        /// New viewport width
        width: f32,
        /// New viewport height
        height: f32,
    },
    /// Ask the shell to load the dataset
    LoadRequested {
        /// CSV path
        path: PathBuf,
    },
    /// The dataset arrived
    DataLoaded(Vec<Record>),
    /// The dataset could not be loaded
    LoadFailed(String),
    /// The category filter changed
    FilterChanged(Filter),
    /// A brush drag finished over this quadrant-local rectangle
    BrushEnded(Rect),
    /// The brush selection was cleared
    BrushCleared,
    /// The pointer is over a mark
    Hovered {
        /// Which mark
        target: HoverTarget,
        /// Tooltip to show
        tooltip: Tooltip,
    },
    /// The pointer left all marks
    HoverCleared,
    /// Drill into one category's individual records
    DrillDown(String),
    /// Return to the aggregate parallel view
    BackToAggregate,
}

/// The single owned application state.
///
/// Everything the dashboard draws derives from this value; no chart keeps
/// authoritative state of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppState {
    /// Current layout, derived from the viewport
    pub layout: DashboardLayout,
    /// Palette and shared styling
    pub theme: Theme,
    /// Loaded dataset; `None` until `DataLoaded` arrives
    pub records: Option<Vec<Record>>,
    /// Load failure, shown as a banner
    pub error: Option<String>,
    /// Active quadrant category filter
    pub filter: Filter,
    /// Ephemeral brush selection (record indices)
    pub selection: Option<BTreeSet<usize>>,
    /// Parallel chart view mode
    pub view: ViewMode,
    /// Current hover target
    pub hover: Option<HoverTarget>,
    /// Current tooltip
    pub tooltip: Option<Tooltip>,
}

impl AppState {
    /// Fresh state for a viewport, before any data has loaded.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            layout: DashboardLayout::compute(viewport),
            theme: Theme::pokemon(),
            records: None,
            error: None,
            filter: Filter::All,
            selection: None,
            view: ViewMode::default(),
            hover: None,
            tooltip: None,
        }
    }

    /// Options for the category filter control: "All" plus every distinct
    /// category, sorted.
    #[must_use]
    pub fn filter_options(&self) -> Vec<String> {
        let mut options = vec!["All".to_string()];
        if let Some(records) = &self.records {
            options.extend(distinct_categories(records));
        }
        options
    }

    fn chart_size(&self) -> Size {
        Size::new(self.layout.chart_width, self.layout.chart_height)
    }

    fn clear_hover(&mut self) {
        self.hover = None;
        self.tooltip = None;
    }
}

impl State for AppState {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::Resize { width, height } => {
                self.layout = DashboardLayout::compute(Size::new(width, height));
                // Brush and hover are screen-space; they do not survive a
                // relayout.
                self.selection = None;
                self.clear_hover();
            }
            Message::LoadRequested { path } => return Command::LoadData { path },
            Message::DataLoaded(records) => {
                self.records = Some(records);
                self.error = None;
                self.selection = None;
                self.clear_hover();
            }
            Message::LoadFailed(error) => self.error = Some(error),
            Message::FilterChanged(filter) => {
                self.filter = filter;
                self.selection = None;
                self.clear_hover();
            }
            Message::BrushEnded(rect) => {
                if let Some(records) = &self.records {
                    let chart = QuadrantChart::new(records, self.theme.clone())
                        .with_filter(self.filter.clone());
                    self.selection = Some(chart.brush_select(self.chart_size(), rect));
                }
            }
            Message::BrushCleared => self.selection = None,
            Message::Hovered { target, tooltip } => {
                self.hover = Some(target);
                self.tooltip = Some(tooltip);
            }
            Message::HoverCleared => self.clear_hover(),
            Message::DrillDown(category) => {
                self.view = ViewMode::Detail(category);
                self.clear_hover();
            }
            Message::BackToAggregate => {
                self.view = ViewMode::Aggregate;
                self.clear_hover();
            }
        }
        Command::None
    }
}

/// The dashboard: owned state plus the three chart widgets derived from it.
#[derive(Debug, Clone)]
pub struct Dashboard {
    state: AppState,
    bar: BarChart,
    quadrant: QuadrantChart,
    parallel: ParallelChart,
}

impl Dashboard {
    /// Create a dashboard for a viewport.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let state = AppState::new(viewport);
        let (bar, quadrant, parallel) = Self::build_charts(&state);
        Self {
            state,
            bar,
            quadrant,
            parallel,
        }
    }

    /// Read the current state.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply a message and rebuild the charts from the new state.
    pub fn apply(&mut self, message: Message) -> Command<Message> {
        let command = self.state.update(message);
        self.rebuild();
        command
    }

    /// Interpret a command, feeding resulting messages back in.
    ///
    /// `LoadData` performs the CSV load synchronously; failure becomes a
    /// `LoadFailed` message rather than an error return.
    pub fn run(&mut self, command: Command<Message>) {
        match command {
            Command::None => {}
            Command::Batch(commands) => {
                for command in commands {
                    self.run(command);
                }
            }
            Command::Message(message) => {
                let next = self.apply(message);
                self.run(next);
            }
            Command::LoadData { path } => {
                let message = match load_records(&path) {
                    Ok(records) => Message::DataLoaded(records),
                    Err(error) => Message::LoadFailed(error.to_string()),
                };
                let next = self.apply(message);
                self.run(next);
            }
        }
    }

    /// Route an input event to the charts, collecting dashboard messages.
    ///
    /// Hover-clear messages sort first so a hover handoff between charts
    /// never drops the new tooltip.
    pub fn handle(&mut self, event: &Event) -> Vec<Message> {
        if let Event::Resize { width, height } = event {
            return vec![Message::Resize {
                width: *width,
                height: *height,
            }];
        }
        if self.state.records.is_none() {
            return Vec::new();
        }

        let mut messages = Vec::new();
        if let Some(boxed) = self.bar.event(event) {
            if let Ok(message) = boxed.downcast::<BarMessage>() {
                messages.push(map_bar(*message));
            }
        }
        if let Some(boxed) = self.quadrant.event(event) {
            if let Ok(message) = boxed.downcast::<QuadrantMessage>() {
                messages.push(map_quadrant(*message));
            }
        }
        if let Some(boxed) = self.parallel.event(event) {
            if let Ok(message) = boxed.downcast::<ParallelMessage>() {
                messages.push(map_parallel(*message));
            }
        }
        messages.sort_by_key(|m| !matches!(m, Message::HoverCleared));
        messages
    }

    /// Paint the whole dashboard: title, charts, then tooltip on top.
    pub fn render(&self, canvas: &mut dyn Canvas) {
        let layout = &self.state.layout;
        canvas.draw_text(
            "Pokemon Data Dashboard",
            layout.title_position(),
            &TextStyle::sized(24.0).bold().anchor(TextAnchor::Middle),
        );

        let center = Point::new(layout.width / 2.0, layout.height / 2.0);
        if let Some(error) = &self.state.error {
            canvas.draw_text(
                &format!("Failed to load dataset: {error}"),
                center,
                &TextStyle {
                    size: 16.0,
                    color: Color::rgb8(0xb0, 0x2e, 0x2e),
                    ..TextStyle::default()
                }
                .bold()
                .anchor(TextAnchor::Middle),
            );
            return;
        }
        if self.state.records.is_none() {
            canvas.draw_text(
                "Loading dataset…",
                center,
                &TextStyle::sized(16.0).anchor(TextAnchor::Middle),
            );
            return;
        }

        self.bar.paint(canvas);
        self.quadrant.paint(canvas);
        self.parallel.paint(canvas);

        if let Some(tooltip) = &self.state.tooltip {
            tooltip.paint(canvas, &self.state.theme);
        }
    }

    /// Render the dashboard to a standalone SVG document.
    #[must_use]
    pub fn render_svg(&self) -> String {
        let layout = &self.state.layout;
        let mut canvas = SvgCanvas::new(Size::new(layout.width, layout.height));
        self.render(&mut canvas);
        canvas.finish()
    }

    fn rebuild(&mut self) {
        let (bar, quadrant, parallel) = Self::build_charts(&self.state);
        self.bar = bar;
        self.quadrant = quadrant;
        self.parallel = parallel;
    }

    fn build_charts(state: &AppState) -> (BarChart, QuadrantChart, ParallelChart) {
        let records: &[Record] = state.records.as_deref().unwrap_or(&[]);
        let theme = state.theme.clone();

        let mut bar = BarChart::new(records, theme.clone()).with_hovered(match state.hover {
            Some(HoverTarget::Bar(index)) => Some(index),
            _ => None,
        });
        bar.layout(state.layout.bar_bounds());

        let mut quadrant = QuadrantChart::new(records, theme.clone())
            .with_filter(state.filter.clone())
            .with_selection(state.selection.clone())
            .with_hovered(match state.hover {
                Some(HoverTarget::Point(index)) => Some(index),
                _ => None,
            });
        quadrant.layout(state.layout.quadrant_bounds());

        let mut parallel = ParallelChart::new(records, theme)
            .with_view(state.view.clone())
            .with_hovered(match state.hover {
                Some(HoverTarget::Line(index)) => Some(index),
                _ => None,
            });
        parallel.layout(state.layout.parallel_bounds());

        (bar, quadrant, parallel)
    }
}

fn map_bar(message: BarMessage) -> Message {
    match message {
        BarMessage::Hovered {
            index,
            category,
            count,
            position,
        } => Message::Hovered {
            target: HoverTarget::Bar(index),
            tooltip: Tooltip::new(category, vec![format!("Count: {count}")], position),
        },
        BarMessage::HoverCleared => Message::HoverCleared,
    }
}

fn map_quadrant(message: QuadrantMessage) -> Message {
    match message {
        QuadrantMessage::PointHovered {
            record_index,
            name,
            category,
            total,
            catch_rate,
            position,
        } => Message::Hovered {
            target: HoverTarget::Point(record_index),
            tooltip: Tooltip::new(
                name,
                vec![
                    format!("Type: {category}"),
                    format!("Total Strength: {}", axis::format_tick(total)),
                    format!("Catch Rate: {}", axis::format_tick(catch_rate)),
                ],
                position,
            ),
        },
        QuadrantMessage::HoverCleared => Message::HoverCleared,
        QuadrantMessage::Brushed(rect) => Message::BrushEnded(rect),
        QuadrantMessage::BrushCleared => Message::BrushCleared,
    }
}

fn map_parallel(message: ParallelMessage) -> Message {
    match message {
        ParallelMessage::Hovered {
            index,
            title,
            lines,
            position,
        } => Message::Hovered {
            target: HoverTarget::Line(index),
            tooltip: Tooltip::new(title, lines, position),
        },
        ParallelMessage::HoverCleared => Message::HoverCleared,
        ParallelMessage::DrillDown(category) => Message::DrillDown(category),
        ParallelMessage::BackToAggregate => Message::BackToAggregate,
    }
}
