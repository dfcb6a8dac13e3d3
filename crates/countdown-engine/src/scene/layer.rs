use crate::geom::WedgePath;
use crate::paint::Color;

use super::RenderSurface;

/// Retained shape layer holding the most recent wedge and its styling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeLayer {
    path: Option<WedgePath>,
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    stroke_width: f32,
    /// Bumped on every `set_path`.
    revision: u64,
}

impl ShapeLayer {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn path(&self) -> Option<&WedgePath> {
        self.path.as_ref()
    }

    #[inline]
    pub fn fill_color(&self) -> Option<Color> {
        self.fill_color
    }

    #[inline]
    pub fn stroke_color(&self) -> Option<Color> {
        self.stroke_color
    }

    #[inline]
    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    /// Number of paths received so far.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Drops the current shape; styling is kept.
    pub fn clear(&mut self) {
        self.path = None;
    }
}

impl RenderSurface for ShapeLayer {
    fn set_path(&mut self, path: WedgePath) {
        self.path = Some(path);
        self.revision = self.revision.wrapping_add(1);
    }

    fn set_fill_color(&mut self, color: Option<Color>) {
        self.fill_color = color;
    }

    fn set_stroke_color(&mut self, color: Option<Color>) {
        self.stroke_color = color;
    }

    fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }
}
