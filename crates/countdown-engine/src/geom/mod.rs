//! Wedge geometry.
//!
//! A wedge is a pie slice: an arc that starts at 12 o'clock, a straight edge
//! back to the circle's center, and a closing edge to the arc's start point.
//! The builder only computes the path; filling and stroking belong to the
//! rendering surface.

mod path;
mod wedge;

pub use path::{WedgePath, DEFAULT_TOLERANCE};
pub use wedge::{build_wedge, WedgeBuilder, START_ANGLE_DEGREES};
