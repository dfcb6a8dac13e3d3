//! Coordinate and geometry types shared by the geometry builder, layers and widgets.
//!
//! Canonical space:
//! - Logical pixels
//! - Origin top-left
//! - +X right, +Y down
//!
//! Angles follow the screen convention: 0° points at 3 o'clock and positive
//! angles turn clockwise on screen.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
