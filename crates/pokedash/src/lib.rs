//! Pokedash: a three-chart SVG dashboard over a creature-stats dataset.
//!
//! A bar chart of category counts, a quadrant scatter of total strength
//! vs capture difficulty, and a parallel-coordinates chart of per-category
//! stat means with drill-down to individual records. State lives in one
//! [`AppState`] updated through [`Message`] values; every redraw rebuilds
//! the charts from scratch.
//!
//! # Example
//!
//! ```no_run
//! use pokedash::{Dashboard, Message, Size};
//! use std::path::PathBuf;
//!
//! let mut dashboard = Dashboard::new(Size::new(1280.0, 800.0));
//! let command = dashboard.apply(Message::LoadRequested {
//!     path: PathBuf::from("pokemon.csv"),
//! });
//! dashboard.run(command);
//! let svg = dashboard.render_svg();
//! ```

pub mod app;
pub mod layout;

pub use app::{AppState, Dashboard, HoverTarget, Message};
pub use layout::{DashboardLayout, MARGIN};

// Convenience re-exports for shell crates and tests.
pub use pokedash_charts::{Tooltip, ViewMode};
pub use pokedash_core::{Command, Event, MouseButton, Point, Rect, Size, State, Theme};
pub use pokedash_data::{load_records, read_records, DataError, Filter, Record};
pub use pokedash_svg::SvgCanvas;
