//! Scales mapping data values to screen coordinates.
//!
//! Three scale families cover the dashboard's needs:
//! - [`LinearScale`]: continuous numeric domain to a pixel range
//! - [`BandScale`]: ordinal categories to evenly spaced bands (bar charts)
//! - [`PointScale`]: ordinal categories to evenly spaced points (parallel axes)

use serde::{Deserialize, Serialize};

/// Continuous linear scale from a numeric domain onto a pixel range.
///
/// The range may be inverted (start > end), which is the usual case for
/// y axes where larger values map to smaller pixel offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f32, f32),
}

impl LinearScale {
    /// Create a scale from a domain onto a range.
    #[must_use]
    pub const fn new(domain: (f64, f64), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    /// The data domain.
    #[must_use]
    pub const fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// The pixel range.
    #[must_use]
    pub const fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Map a data value to a pixel position.
    ///
    /// A degenerate domain (zero span) maps everything to the range start.
    #[must_use]
    pub fn scale(&self, value: f64) -> f32 {
        let (d0, d1) = self.domain;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return self.range.0;
        }
        let t = (value - d0) / span;
        let (r0, r1) = self.range;
        (t as f32).mul_add(r1 - r0, r0)
    }

    /// Map a pixel position back to a data value.
    #[must_use]
    pub fn invert(&self, position: f32) -> f64 {
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span.abs() < f32::EPSILON {
            return self.domain.0;
        }
        let t = f64::from((position - r0) / span);
        let (d0, d1) = self.domain;
        t.mul_add(d1 - d0, d0)
    }

    /// Generate round tick values covering the domain.
    ///
    /// Tick steps are powers of ten times 1, 2 or 5, chosen so roughly
    /// `count` ticks fall inside the domain. Returns an empty vector for a
    /// degenerate domain or `count == 0`.
    #[must_use]
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        let span = hi - lo;
        if count == 0 || span <= 0.0 || !span.is_finite() {
            return Vec::new();
        }

        let step = tick_increment(span / count as f64);
        let start = (lo / step).ceil();
        let stop = (hi / step).floor();
        if stop < start {
            return Vec::new();
        }
        let n = (stop - start) as usize + 1;
        (0..n).map(|i| (start + i as f64) * step).collect()
    }
}

/// Round a raw step up to the nearest 1/2/5 x 10^k increment.
fn tick_increment(raw: f64) -> f64 {
    let power = raw.log10().floor();
    let error = raw / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * 10f64.powf(power)
}

/// Ordinal scale assigning each category an evenly spaced band.
///
/// Matches the d3 band-scale model with equal inner and outer padding:
/// `step = width / (n + padding)` and `bandwidth = step * (1 - padding)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandScale {
    categories: Vec<String>,
    range: (f32, f32),
    padding: f32,
}

impl BandScale {
    /// Create a band scale over the given categories.
    #[must_use]
    pub fn new(categories: Vec<String>, range: (f32, f32), padding: f32) -> Self {
        Self {
            categories,
            range,
            padding: padding.clamp(0.0, 1.0),
        }
    }

    /// Number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Whether the scale has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The categories, in band order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// The pixel range.
    #[must_use]
    pub const fn range(&self) -> (f32, f32) {
        self.range
    }

    /// Distance between the starts of adjacent bands.
    #[must_use]
    pub fn step(&self) -> f32 {
        let n = self.categories.len() as f32;
        if n == 0.0 {
            return 0.0;
        }
        (self.range.1 - self.range.0) / (n + self.padding)
    }

    /// Width of each band.
    #[must_use]
    pub fn bandwidth(&self) -> f32 {
        self.step() * (1.0 - self.padding)
    }

    /// Left edge of the band for a category, if present.
    #[must_use]
    pub fn position(&self, category: &str) -> Option<f32> {
        let index = self.categories.iter().position(|c| c == category)?;
        Some(self.position_at(index))
    }

    /// Left edge of the band at an index.
    #[must_use]
    pub fn position_at(&self, index: usize) -> f32 {
        let step = self.step();
        let n = self.categories.len() as f32;
        let width = self.range.1 - self.range.0;
        // Center the occupied span within the range.
        let start = (width - step * (n - self.padding)).mul_add(0.5, self.range.0);
        (index as f32).mul_add(step, start)
    }
}

/// Ordinal scale assigning each category a single point position.
///
/// Equivalent to a band scale with zero bandwidth; used for the parallel
/// coordinate axes where each dimension occupies one x position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointScale {
    categories: Vec<String>,
    range: (f32, f32),
    padding: f32,
}

impl PointScale {
    /// Create a point scale over the given categories.
    #[must_use]
    pub fn new(categories: Vec<String>, range: (f32, f32), padding: f32) -> Self {
        Self {
            categories,
            range,
            padding: padding.max(0.0),
        }
    }

    /// The categories, in axis order.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Distance between adjacent points.
    #[must_use]
    pub fn step(&self) -> f32 {
        let n = self.categories.len() as f32;
        let denominator = (n - 1.0 + 2.0 * self.padding).max(1.0);
        (self.range.1 - self.range.0) / denominator
    }

    /// Position of a category's point, if present.
    #[must_use]
    pub fn position(&self, category: &str) -> Option<f32> {
        let index = self.categories.iter().position(|c| c == category)?;
        Some(self.position_at(index))
    }

    /// Position of the point at an index.
    #[must_use]
    pub fn position_at(&self, index: usize) -> f32 {
        let step = self.step();
        (index as f32 + self.padding).mul_add(step, self.range.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn linear_maps_endpoints() {
        let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(s.scale(0.0), 0.0);
        assert_eq!(s.scale(10.0), 100.0);
        assert_eq!(s.scale(5.0), 50.0);
    }

    #[test]
    fn linear_inverted_range() {
        // y axes run top-down: larger values, smaller pixel offsets.
        let s = LinearScale::new((0.0, 100.0), (200.0, 0.0));
        assert_eq!(s.scale(0.0), 200.0);
        assert_eq!(s.scale(100.0), 0.0);
        assert_eq!(s.scale(50.0), 100.0);
    }

    #[test]
    fn linear_degenerate_domain() {
        let s = LinearScale::new((5.0, 5.0), (0.0, 100.0));
        assert_eq!(s.scale(5.0), 0.0);
        assert_eq!(s.scale(99.0), 0.0);
    }

    #[test]
    fn linear_invert_round_trip() {
        let s = LinearScale::new((20.0, 180.0), (0.0, 640.0));
        let pos = s.scale(77.0);
        assert!((s.invert(pos) - 77.0).abs() < 1e-3);
    }

    #[test]
    fn ticks_are_round_and_cover_domain() {
        let s = LinearScale::new((0.0, 100.0), (0.0, 1.0));
        let ticks = s.ticks(5);
        assert_eq!(ticks, vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
    }

    #[test]
    fn ticks_small_domain() {
        let s = LinearScale::new((0.0, 1.0), (0.0, 1.0));
        let ticks = s.ticks(5);
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert!(ticks.len() >= 4);
        for pair in ticks.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn ticks_degenerate_domain_is_empty() {
        let s = LinearScale::new((3.0, 3.0), (0.0, 1.0));
        assert!(s.ticks(5).is_empty());
    }

    #[test]
    fn band_positions_and_bandwidth() {
        let s = BandScale::new(
            vec!["a".into(), "b".into(), "c".into()],
            (0.0, 320.0),
            0.2,
        );
        let step = s.step();
        assert!((step - 100.0).abs() < 1e-4);
        assert!((s.bandwidth() - 80.0).abs() < 1e-4);
        let a = s.position("a").expect("category present");
        let b = s.position("b").expect("category present");
        assert!((b - a - step).abs() < 1e-4);
        assert_eq!(s.position("missing"), None);
    }

    #[test]
    fn band_empty_is_harmless() {
        let s = BandScale::new(vec![], (0.0, 100.0), 0.2);
        assert!(s.is_empty());
        assert_eq!(s.step(), 0.0);
        assert_eq!(s.bandwidth(), 0.0);
    }

    #[test]
    fn point_positions_centered() {
        // Padding 0.5 over n points divides the range into n equal slots
        // with points at slot centers.
        let s = PointScale::new(
            vec!["HP".into(), "Attack".into(), "Defense".into(), "Speed".into()],
            (0.0, 400.0),
            0.5,
        );
        assert!((s.position_at(0) - 50.0).abs() < 1e-4);
        assert!((s.position_at(1) - 150.0).abs() < 1e-4);
        assert!((s.position_at(3) - 350.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn linear_scale_is_monotonic(
            d0 in -1e6f64..1e6,
            span in 1e-3f64..1e6,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let s = LinearScale::new((d0, d0 + span), (0.0, 800.0));
            let (va, vb) = (span.mul_add(a, d0), span.mul_add(b, d0));
            if va < vb {
                prop_assert!(s.scale(va) <= s.scale(vb));
            }
        }

        #[test]
        fn band_positions_stay_in_range(n in 1usize..30) {
            let categories: Vec<String> = (0..n).map(|i| format!("c{i}")).collect();
            let s = BandScale::new(categories, (0.0, 1000.0), 0.2);
            for i in 0..n {
                let x = s.position_at(i);
                prop_assert!(x >= -1e-3);
                prop_assert!(x + s.bandwidth() <= 1000.0 + 1e-3);
            }
        }
    }
}
