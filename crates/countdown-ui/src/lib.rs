//! Circular countdown widget built on `countdown-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use countdown_ui::prelude::*;
//!
//! let layer = Rc::new(RefCell::new(ShapeLayer::new()));
//! let mut countdown = CircularCountdown::with_config(
//!     &layer,
//!     CountdownConfig::default()
//!         .circle_radius(48.0)
//!         .fill_color(Color::from_hex("#3b82f6"))
//!         .interval(30.0),
//! )?;
//! countdown.set_bounds(Rect::new(0.0, 0.0, 96.0, 96.0));
//!
//! let refresh = Rc::new(PacedRefreshSource::default());
//! countdown.attach_refresh_source(refresh.clone());
//! countdown.start();
//! refresh.run_for(Duration::from_secs(5));
//! ```

pub mod config;
pub mod countdown;
mod model;
pub mod redraw;

pub use config::CountdownConfig;
pub use countdown::CircularCountdown;
pub use redraw::{LoopPhase, RedrawLoop, TickOutcome};

/// Everything needed to embed a countdown.
pub mod prelude {
    pub use crate::config::CountdownConfig;
    pub use crate::countdown::CircularCountdown;
    pub use crate::redraw::{LoopPhase, RedrawLoop, TickOutcome};

    pub use countdown_engine::coords::{Rect, Vec2};
    pub use countdown_engine::paint::Color;
    pub use countdown_engine::refresh::{
        ManualRefreshSource, PacedRefreshConfig, PacedRefreshSource, RefreshSource,
    };
    pub use countdown_engine::scene::{RenderSurface, ShapeLayer};
    pub use countdown_engine::CountdownError;

    pub use std::cell::RefCell;
    pub use std::rc::Rc;
    pub use std::time::Duration;
}
