//! Theme: category palette and shared chart styling.

use crate::color::Color;
use serde::{Deserialize, Serialize};

/// The fixed category palette plus shared chart colors.
///
/// Unknown categories fall back to a neutral gray rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Body text color
    pub text: Color,
    /// Axis line and tick color
    pub axis: Color,
    /// Tooltip background
    pub tooltip_background: Color,
    /// Tooltip border
    pub tooltip_border: Color,
    /// Fallback for categories missing from the palette
    pub fallback: Color,
    /// Quadrant background region colors
    pub quadrants: QuadrantColors,
    categories: Vec<(String, Color)>,
}

/// Background colors for the four quadrant regions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrantColors {
    /// Upper-left region
    pub top_left: Color,
    /// Upper-right region
    pub top_right: Color,
    /// Lower-left region
    pub bottom_left: Color,
    /// Lower-right region
    pub bottom_right: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::pokemon()
    }
}

impl Theme {
    /// The standard palette: one fixed color per primary type.
    #[must_use]
    pub fn pokemon() -> Self {
        let categories = [
            ("Water", Color::rgb8(0x1f, 0x77, 0xb4)),
            ("Normal", Color::rgb8(0xd3, 0xd3, 0xd3)),
            ("Flying", Color::rgb8(0xad, 0xd8, 0xe6)),
            ("Grass", Color::rgb8(0x2c, 0xa0, 0x2c)),
            ("Psychic", Color::rgb8(0x80, 0x00, 0x80)),
            ("Bug", Color::rgb8(0xff, 0x00, 0x00)),
            ("Ground", Color::rgb8(0x8b, 0x45, 0x13)),
            ("Poison", Color::rgb8(0x00, 0x64, 0x00)),
            ("Fire", Color::rgb8(0xff, 0x7f, 0x0e)),
            ("Rock", Color::rgb8(0x80, 0x80, 0x80)),
            ("Dark", Color::rgb8(0x00, 0x00, 0x00)),
            ("Fighting", Color::rgb8(0x80, 0x00, 0x00)),
            ("Electric", Color::rgb8(0xff, 0xd7, 0x00)),
            ("Steel", Color::rgb8(0xa9, 0xa9, 0xa9)),
            ("Dragon", Color::rgb8(0xff, 0x8c, 0x00)),
            ("Fairy", Color::rgb8(0xff, 0xb6, 0xc1)),
            ("Ghost", Color::rgb8(0xc0, 0xc0, 0xc0)),
            ("Ice", Color::rgb8(0xb0, 0xe0, 0xe6)),
        ]
        .into_iter()
        .map(|(name, color)| (name.to_string(), color))
        .collect();

        Self {
            text: Color::rgb8(0x21, 0x21, 0x21),
            axis: Color::rgb8(0x21, 0x21, 0x21),
            tooltip_background: Color::rgb8(0xf9, 0xf9, 0xf9),
            tooltip_border: Color::rgb8(0xcc, 0xcc, 0xcc),
            fallback: Color::rgb8(0xcc, 0xcc, 0xcc),
            quadrants: QuadrantColors {
                top_left: Color::rgb8(0xa8, 0xa8, 0xd8),
                top_right: Color::rgb8(0xa8, 0xd8, 0xa8),
                bottom_left: Color::rgb8(0xd8, 0xd8, 0xa8),
                bottom_right: Color::rgb8(0xd8, 0xa8, 0xa8),
            },
            categories,
        }
    }

    /// Color for a category, falling back to neutral gray for unknowns.
    #[must_use]
    pub fn category_color(&self, category: &str) -> Color {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map_or(self.fallback, |(_, color)| *color)
    }

    /// Number of categories with a fixed palette entry.
    #[must_use]
    pub fn category_count(&self) -> usize {
        self.categories.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_category_color() {
        let theme = Theme::pokemon();
        assert_eq!(theme.category_color("Water"), Color::rgb8(0x1f, 0x77, 0xb4));
        assert_eq!(theme.category_color("Fire"), Color::rgb8(0xff, 0x7f, 0x0e));
    }

    #[test]
    fn unknown_category_falls_back() {
        let theme = Theme::pokemon();
        assert_eq!(theme.category_color("Shadow"), theme.fallback);
    }

    #[test]
    fn palette_covers_all_eighteen_types() {
        assert_eq!(Theme::pokemon().category_count(), 18);
    }

    #[test]
    fn theme_serde_round_trip() {
        let theme = Theme::pokemon();
        let json = serde_json::to_string(&theme).expect("serialize");
        let back: Theme = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, theme);
    }
}
