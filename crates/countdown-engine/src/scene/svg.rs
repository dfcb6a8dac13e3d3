use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use crate::coords::Vec2;
use crate::paint::Color;

use super::ShapeLayer;

impl ShapeLayer {
    /// Standalone SVG document of `size` logical pixels showing the current wedge.
    pub fn to_svg(&self, size: Vec2) -> String {
        let (w, h) = (size.x.max(0.0), size.y.max(0.0));
        let mut svg = String::new();

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        );

        if let Some(path) = self.path() {
            let _ = write!(svg, r#"  <path d="{}""#, path.to_svg_d());
            write_paint(&mut svg, "fill", self.fill_color());

            match self.stroke_color() {
                Some(color) if self.stroke_width() > 0.0 => {
                    write_paint(&mut svg, "stroke", Some(color));
                    let _ = write!(svg, r#" stroke-width="{}""#, self.stroke_width());
                }
                _ => write_paint(&mut svg, "stroke", None),
            }

            svg.push_str("/>\n");
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Writes [`to_svg`](Self::to_svg) to `path`.
    pub fn write_svg(&self, size: Vec2, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_svg(size))
            .with_context(|| format!("failed to write SVG to {}", path.display()))
    }
}

fn write_paint(svg: &mut String, attr: &str, color: Option<Color>) {
    match color {
        Some(color) => {
            let (hex, opacity) = color.to_hex_rgb();
            let _ = write!(svg, r#" {attr}="{hex}""#);
            if opacity < 1.0 {
                let _ = write!(svg, r#" {attr}-opacity="{opacity:.3}""#);
            }
        }
        None => {
            let _ = write!(svg, r#" {attr}="none""#);
        }
    }
}
