use kurbo::{Arc, BezPath, Circle, CircleSegment, PathEl, Point};

use crate::coords::Vec2;

/// Curve tolerance, in pixels, used when none is given.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Closed pie-slice path: arc, edge to the center, closing edge.
///
/// Backed by a [`CircleSegment`] with no inner radius. The sweep is signed:
/// positive turns clockwise on screen (+Y down), negative counterclockwise.
/// Values are rebuilt every frame and never mutated after construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WedgePath {
    segment: CircleSegment,
    full: bool,
}

impl WedgePath {
    /// `full` marks a wedge built for the whole cycle; a sweep that merely
    /// rounds to a full turn is still a slice.
    pub(crate) fn new(center: Vec2, radius: f64, start_angle: f64, sweep: f64, full: bool) -> Self {
        let circle = Circle::new(Point::from(center), radius);
        Self { segment: circle.segment(0.0, start_angle, sweep), full }
    }

    #[inline]
    pub fn segment(&self) -> CircleSegment {
        self.segment
    }

    /// The outer arc alone.
    pub fn arc(&self) -> Arc {
        let r = self.segment.outer_radius;
        Arc {
            center: self.segment.center,
            radii: kurbo::Vec2::new(r, r),
            start_angle: self.segment.start_angle,
            sweep_angle: self.segment.sweep_angle,
            x_rotation: 0.0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::from(self.segment.center)
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.segment.outer_radius as f32
    }

    #[inline]
    pub fn arc_start(&self) -> Vec2 {
        Vec2::from(self.point_at(self.segment.start_angle))
    }

    #[inline]
    pub fn arc_end(&self) -> Vec2 {
        Vec2::from(self.point_at(self.segment.start_angle + self.segment.sweep_angle))
    }

    /// Unsigned angular span in degrees, in [0, 360].
    #[inline]
    pub fn sweep_degrees(&self) -> f64 {
        self.segment.sweep_angle.abs().to_degrees()
    }

    #[inline]
    pub fn is_clockwise(&self) -> bool {
        self.segment.sweep_angle >= 0.0
    }

    /// True when the wedge encloses no area (zero sweep or zero radius).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.segment.sweep_angle == 0.0 || self.segment.outer_radius == 0.0
    }

    #[inline]
    pub fn is_full_circle(&self) -> bool {
        self.full
    }

    fn point_at(&self, angle: f64) -> Point {
        self.segment.center + kurbo::Vec2::from_angle(angle) * self.segment.outer_radius
    }

    /// Outline in drawing order: arc start, arc as cubic Béziers, edge to the
    /// center, close.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.point_at(self.segment.start_angle));
        if !self.is_empty() {
            for el in self.arc().append_iter(sanitize_tolerance(tolerance)) {
                path.push(el);
            }
        }
        path.line_to(self.segment.center);
        path.close_path();
        path
    }

    /// Approximates the outline with a polygon.
    ///
    /// The first point is the arc start, the last point is the center.
    pub fn flatten(&self, tolerance: f64) -> Vec<Vec2> {
        let tolerance = sanitize_tolerance(tolerance);
        let mut points = Vec::new();

        kurbo::flatten(self.to_bez_path(tolerance).iter(), tolerance, |el| match el {
            PathEl::MoveTo(p) | PathEl::LineTo(p) => points.push(Vec2::from(p)),
            _ => {}
        });
        points
    }

    /// SVG path data (`d` attribute) for this wedge.
    pub fn to_svg_d(&self) -> String {
        self.to_bez_path(DEFAULT_TOLERANCE).to_svg()
    }
}

fn sanitize_tolerance(tolerance: f64) -> f64 {
    if tolerance.is_finite() && tolerance > 0.0 { tolerance } else { DEFAULT_TOLERANCE }
}

#[cfg(test)]
mod tests {
    use super::*;

    use core::f64::consts::{FRAC_PI_2, PI, TAU};

    const C: Vec2 = Vec2::new(50.0, 50.0);

    fn wedge(sweep: f64) -> WedgePath {
        WedgePath::new(C, 40.0, -FRAC_PI_2, sweep, false)
    }

    #[test]
    fn bez_path_closes_through_center() {
        let w = wedge(FRAC_PI_2);
        let els = w.to_bez_path(0.1).elements().to_vec();
        let n = els.len();

        assert!(matches!(els[0], PathEl::MoveTo(p) if Vec2::from(p).distance(w.arc_start()) < 1e-4));
        assert!(els[1..n - 2].iter().all(|el| matches!(el, PathEl::CurveTo(..))));
        assert_eq!(els[n - 2], PathEl::LineTo(Point::new(50.0, 50.0)));
        assert_eq!(els[n - 1], PathEl::ClosePath);
    }

    #[test]
    fn empty_wedge_has_no_curves() {
        let els = wedge(0.0).to_bez_path(0.1).elements().to_vec();
        assert_eq!(els.len(), 3);
        assert!(!wedge(0.0).to_svg_d().contains('C'));
    }

    #[test]
    fn segment_has_no_inner_radius() {
        let seg = wedge(PI).segment();
        assert_eq!(seg.inner_radius, 0.0);
        assert_eq!(seg.outer_radius, 40.0);
        assert_eq!(seg.sweep_angle, PI);
    }

    #[test]
    fn flatten_starts_on_arc_and_ends_at_center() {
        let pts = wedge(PI).flatten(0.1);
        assert!(pts.len() > 3);
        assert!(pts[0].distance(Vec2::new(50.0, 10.0)) < 1e-3);
        assert_eq!(*pts.last().unwrap(), C);
    }

    #[test]
    fn flatten_stays_within_tolerance_of_circle() {
        let pts = wedge(1.3 * PI).flatten(0.5);
        for p in &pts[..pts.len() - 1] {
            assert!((p.distance(C) - 40.0).abs() <= 0.5, "{p:?}");
        }
    }

    #[test]
    fn flatten_tighter_tolerance_adds_vertices() {
        let coarse = wedge(PI).flatten(2.0).len();
        let fine = wedge(PI).flatten(0.01).len();
        assert!(fine > coarse);
    }

    #[test]
    fn flatten_bad_tolerance_falls_back() {
        assert!(wedge(PI).flatten(f64::NAN).len() > 3);
        assert!(wedge(PI).flatten(-1.0).len() > 3);
    }

    #[test]
    fn counterclockwise_arc_ends_at_nine_oclock() {
        let w = wedge(-FRAC_PI_2);
        assert!(!w.is_clockwise());
        assert!(w.arc_end().distance(Vec2::new(10.0, 50.0)) < 1e-4);
    }

    #[test]
    fn full_turn_returns_to_start() {
        let w = WedgePath::new(C, 40.0, -FRAC_PI_2, TAU, true);
        let pts = w.flatten(0.1);
        let arc_last = pts[pts.len() - 2];
        assert!(arc_last.distance(w.arc_start()) < 1e-3);
        assert!(w.is_full_circle());
    }

    #[test]
    fn svg_is_curves_then_center() {
        let d = wedge(1.5 * PI).to_svg_d();
        assert!(d.starts_with('M'), "{d}");
        assert!(d.contains('C'), "{d}");
        assert!(d.ends_with("L50,50 Z"), "{d}");
    }
}
