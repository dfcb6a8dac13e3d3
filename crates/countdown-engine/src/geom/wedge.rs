use crate::coords::Vec2;

use super::path::WedgePath;

/// Where every wedge starts: 12 o'clock in screen convention.
pub const START_ANGLE_DEGREES: f64 = 270.0;

/// Builds wedges for one circle.
///
/// Inputs are sanitized instead of rejected so a frame can always be drawn:
/// negative or non-finite radii become 0, fractions are clamped to [0, 1] and
/// non-finite fractions draw an empty wedge. Configuration errors are caught
/// earlier, when the widget is configured.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WedgeBuilder {
    pub center: Vec2,
    pub radius: f32,
    /// Grow the wedge clockwise on screen. Defaults to `true`.
    pub clockwise: bool,
}

impl WedgeBuilder {
    #[inline]
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius, clockwise: true }
    }

    #[inline]
    pub fn clockwise(mut self, clockwise: bool) -> Self {
        self.clockwise = clockwise;
        self
    }

    /// Wedge covering `fraction` of the circle. Only `fraction >= 1` yields a
    /// full circle.
    pub fn build(&self, fraction: f64) -> WedgePath {
        let fraction = if fraction.is_finite() { fraction.clamp(0.0, 1.0) } else { 0.0 };
        self.build_degrees(fraction * 360.0)
    }

    /// Wedge spanning `degrees` from 12 o'clock, clamped to [0, 360].
    pub fn build_degrees(&self, degrees: f64) -> WedgePath {
        let degrees = if degrees.is_finite() { degrees.clamp(0.0, 360.0) } else { 0.0 };
        let radius = if self.radius.is_finite() { f64::from(self.radius.max(0.0)) } else { 0.0 };

        let span = degrees.to_radians();
        let sweep = if self.clockwise { span } else { -span };

        WedgePath::new(
            self.center,
            radius,
            START_ANGLE_DEGREES.to_radians(),
            sweep,
            degrees >= 360.0,
        )
    }
}

/// One-shot form of [`WedgeBuilder::build`].
#[inline]
pub fn build_wedge(center: Vec2, radius: f32, fraction: f64, clockwise: bool) -> WedgePath {
    WedgeBuilder::new(center, radius).clockwise(clockwise).build(fraction)
}
