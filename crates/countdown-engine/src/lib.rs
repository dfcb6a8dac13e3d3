//! Countdown engine crate.
//!
//! Owns the renderer-agnostic pieces of a circular countdown: wedge geometry,
//! progress sampling against wall-clock time, and the refresh-source contract
//! that drives per-frame redraws.

pub mod coords;
pub mod error;
pub mod geom;
pub mod logging;
pub mod paint;
pub mod refresh;
pub mod scene;
pub mod time;

pub use error::CountdownError;
