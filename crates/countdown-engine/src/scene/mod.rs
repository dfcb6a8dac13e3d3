//! Rendering-surface contract and a reference surface.
//!
//! Responsibilities:
//! - define what a countdown hands to its renderer each frame
//! - provide [`ShapeLayer`], a retained single-shape surface that replaces its
//!   content on every update and can export itself as SVG

mod layer;
mod surface;
mod svg;

pub use layer::ShapeLayer;
pub use surface::RenderSurface;
