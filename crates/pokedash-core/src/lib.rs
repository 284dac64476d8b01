//! Core types and traits for the Pokedash visualization toolkit.
//!
//! This crate provides the foundational pieces shared by every chart:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`Margin`]
//! - Color representation: [`Color`] with hex parsing
//! - Scales mapping data to screen coordinates: [`LinearScale`],
//!   [`BandScale`], [`PointScale`]
//! - Events and state management: [`Event`], [`State`], [`Command`]
//! - The [`Canvas`] paint abstraction implemented by rendering backends

mod canvas;
mod color;
mod event;
mod geometry;
mod scale;
mod state;
pub mod stats;
mod theme;
pub mod widget;

pub use canvas::{Canvas, FontWeight, Reveal, Stroke, TextAnchor, TextStyle};
pub use color::{Color, ColorParseError};
pub use event::{Event, MouseButton};
pub use geometry::{Margin, Point, Rect, Size};
pub use scale::{BandScale, LinearScale, PointScale};
pub use state::{Command, State};
pub use theme::{QuadrantColors, Theme};
pub use widget::{LayoutResult, Widget};
