use crate::color::Color;
use crate::shape::Point;
use crate::signal::Signal;

/// One diagonal dash segment, in bar-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dash {
    pub from: Point,
    pub to: Point,
}

/// Rounded horizontal bar overlaid with evenly spaced diagonal dash marks.
///
/// The bar body spans the full width at the resolved thickness (explicit
/// height, or 16 layout units when unset), filled with `albedo` and rounded
/// by its own thickness so the ends are pill-shaped. Dash segments are
/// derived values: they own no state and are laid out again from the current
/// `dashes`, `dash_length` and `width` on every evaluation.
#[derive(Clone)]
pub struct DashBar {
    pub x: Signal<f32>,
    pub y: Signal<f32>,
    pub width: Signal<f32>,
    thickness: f32,
    pub albedo: Signal<Color>,
    pub dashes: Signal<f32>,
    pub dash_length: Signal<f32>,
}

impl DashBar {
    /// Create a bar of the given width; a zero height falls back to a
    /// thickness of 16
    pub fn new(width: f32, height: f32) -> Self {
        let thickness = if height == 0.0 { 16.0 } else { height };
        Self {
            x: Signal::value(0.0),
            y: Signal::value(0.0),
            width: Signal::value(width),
            thickness,
            albedo: Signal::value(Color::WHITE),
            dashes: Signal::value(8.0),
            dash_length: Signal::value(50.0),
        }
    }

    /// Resolved bar thickness, used as both corner radius and dash stroke
    /// width
    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    /// Lay out the dash segments from the current parameter values.
    ///
    /// The count is floored once and that value is reused in the per-dash
    /// formula; a count at or below zero yields no segments.
    pub fn segments(&self) -> Vec<Dash> {
        let count = self.dashes.get().floor();
        if count < 1.0 {
            return Vec::new();
        }

        let w = self.width.get();
        let len = self.dash_length.get();
        let n = count as u32;

        (0..n)
            .map(|i| {
                let start_x =
                    (i as f32 / count) * w - w / 2.0 + w / (2.0 * count) + len / 2.0;
                Dash {
                    from: Point::new(start_x, 0.0),
                    to: Point::new(start_x - len, len),
                }
            })
            .collect()
    }
}

impl Default for DashBar {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let bar = DashBar::default();
        assert_eq!(bar.albedo.get(), Color::WHITE);
        assert_eq!(bar.dashes.get(), 8.0);
        assert_eq!(bar.dash_length.get(), 50.0);
    }

    #[test]
    fn test_thickness_fallback() {
        assert_eq!(DashBar::new(600.0, 0.0).thickness(), 16.0);
        assert_eq!(DashBar::new(600.0, 24.0).thickness(), 24.0);
    }

    #[test]
    fn test_single_dash_is_centered() {
        let bar = DashBar::new(600.0, 0.0);
        bar.dashes.set(1.0);

        let segments = bar.segments();
        assert_eq!(segments.len(), 1);

        let dash = segments[0];
        assert_eq!(dash.from, Point::new(25.0, 0.0));
        assert_eq!(dash.to, Point::new(-25.0, 50.0));

        // Midpoint sits on the bar center
        assert_eq!((dash.from.x + dash.to.x) / 2.0, 0.0);
    }

    #[test]
    fn test_spacing_is_width_over_count() {
        let bar = DashBar::new(600.0, 0.0);
        bar.dashes.set(8.0);

        let segments = bar.segments();
        assert_eq!(segments.len(), 8);

        for pair in segments.windows(2) {
            assert!((pair[1].from.x - pair[0].from.x - 75.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_spacing_independent_of_dash_length() {
        let bar = DashBar::new(480.0, 0.0);
        bar.dashes.set(6.0);

        for len in [10.0, 50.0, 120.0] {
            bar.dash_length.set(len);
            let segments = bar.segments();
            for pair in segments.windows(2) {
                assert!((pair[1].from.x - pair[0].from.x - 80.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_zero_dashes_is_empty() {
        let bar = DashBar::new(600.0, 0.0);
        bar.dashes.set(0.0);
        assert!(bar.segments().is_empty());
    }

    #[test]
    fn test_negative_dashes_is_empty() {
        let bar = DashBar::new(600.0, 0.0);
        bar.dashes.set(-3.0);
        assert!(bar.segments().is_empty());
    }

    #[test]
    fn test_fractional_count_floors_once() {
        let bar = DashBar::new(600.0, 0.0);
        bar.dashes.set(2.9);

        let segments = bar.segments();
        assert_eq!(segments.len(), 2);

        // Layout must match an integer count of 2 exactly
        bar.dashes.set(2.0);
        assert_eq!(bar.segments(), segments);
    }

    #[test]
    fn test_segment_length_follows_dash_length() {
        let bar = DashBar::new(600.0, 0.0);
        bar.dash_length.set(30.0);

        for dash in bar.segments() {
            assert!((dash.from.x - dash.to.x - 30.0).abs() < 1e-4);
            assert_eq!(dash.from.y, 0.0);
            assert_eq!(dash.to.y, 30.0);
        }
    }

    #[test]
    fn test_relayout_on_parameter_change() {
        let bar = DashBar::new(600.0, 0.0);
        let before = bar.segments();

        bar.dashes.set(3.0);
        let after = bar.segments();
        assert_ne!(before.len(), after.len());

        // Fill and outer size are untouched by dash parameters
        assert_eq!(bar.albedo.get(), Color::WHITE);
        assert_eq!(bar.width.get(), 600.0);
        assert_eq!(bar.thickness(), 16.0);
    }

    #[test]
    fn test_relayout_on_width_change() {
        let bar = DashBar::new(600.0, 0.0);
        bar.dashes.set(4.0);

        let wide = bar.segments();
        bar.width.set(300.0);
        let narrow = bar.segments();

        assert!((wide[1].from.x - wide[0].from.x - 150.0).abs() < 1e-4);
        assert!((narrow[1].from.x - narrow[0].from.x - 75.0).abs() < 1e-4);
    }
}
