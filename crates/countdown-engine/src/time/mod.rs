//! Time subsystem.
//!
//! - [`ProgressSampler`] / [`sample_progress`]: pure mapping from a wall-clock
//!   instant to the position inside a repeating interval. "Now" is always an
//!   argument, never read implicitly.
//! - [`FrameClock`]: per-loop frame timing used by paced refresh sources.

mod frame_clock;
mod progress;

pub use frame_clock::{FrameClock, FrameTime};
pub use progress::{sample_progress, seconds_since, validate_interval, ProgressSampler};
