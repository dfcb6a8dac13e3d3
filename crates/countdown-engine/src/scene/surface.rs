use crate::geom::WedgePath;
use crate::paint::Color;

/// Receiver of per-frame wedge updates.
///
/// Each call replaces the corresponding property; a surface shows one wedge
/// at a time and never accumulates shapes.
pub trait RenderSurface {
    fn set_path(&mut self, path: WedgePath);
    fn set_fill_color(&mut self, color: Option<Color>);
    fn set_stroke_color(&mut self, color: Option<Color>);
    fn set_stroke_width(&mut self, width: f32);
}
