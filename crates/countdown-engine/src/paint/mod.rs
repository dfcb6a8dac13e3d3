//! Paint model shared between the widget and rendering surfaces.
//!
//! Only solid colors are needed: a wedge has one fill and one optional stroke.

pub mod color;

pub use color::Color;
