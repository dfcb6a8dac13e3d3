use std::path::Path;

use anyhow::{Context, Result};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};

/// Rasterizes an SVG document onto a `size`×`size` canvas and saves it as PNG.
pub fn write_png(svg: &str, size: u32, path: &Path) -> Result<()> {
    let tree = Tree::from_str(svg, &Options::default()).context("failed to parse generated SVG")?;
    let mut pixmap = Pixmap::new(size.max(1), size.max(1)).context("failed to allocate canvas")?;

    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    pixmap
        .save_png(path)
        .with_context(|| format!("failed to write PNG to {}", path.display()))
}
