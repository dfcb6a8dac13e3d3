use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Midpoint of the rectangle. Widgets center their circle here.
    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    #[test]
    fn center_of_origin_rect() {
        assert_eq!(r(0.0, 0.0, 100.0, 60.0).center(), Vec2::new(50.0, 30.0));
    }

    #[test]
    fn center_respects_origin() {
        assert_eq!(r(10.0, 20.0, 4.0, 8.0).center(), Vec2::new(12.0, 24.0));
    }

    #[test]
    fn center_of_empty_rect_is_origin() {
        assert_eq!(r(7.0, 3.0, 0.0, 0.0).center(), Vec2::new(7.0, 3.0));
    }
}
