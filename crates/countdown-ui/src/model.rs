use std::cell::RefCell;
use std::rc::Weak;
use std::time::SystemTime;

use countdown_engine::coords::Rect;
use countdown_engine::geom::{WedgeBuilder, WedgePath};
use countdown_engine::paint::Color;
use countdown_engine::scene::RenderSurface;
use countdown_engine::CountdownError;

use crate::config::CountdownConfig;

/// State shared by a widget and its redraw loop.
///
/// The surface is held weakly: the countdown never keeps its renderer alive.
pub(crate) struct CountdownModel {
    pub(crate) config: CountdownConfig,
    pub(crate) bounds: Rect,
    pub(crate) clockwise: bool,
    /// Last drawn angle in degrees.
    pub(crate) angle: f32,
    pub(crate) surface: Weak<RefCell<dyn RenderSurface>>,
    renderer_missing: bool,
}

/// Everything one redraw hands to the surface.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct WedgeFrame {
    pub(crate) path: WedgePath,
    pub(crate) fill_color: Option<Color>,
    pub(crate) stroke_color: Option<Color>,
    pub(crate) stroke_width: f32,
    pub(crate) degrees: f32,
}

impl CountdownModel {
    pub(crate) fn new(config: CountdownConfig, surface: Weak<RefCell<dyn RenderSurface>>) -> Self {
        Self {
            config,
            bounds: Rect::default(),
            clockwise: true,
            angle: 0.0,
            surface,
            renderer_missing: false,
        }
    }

    /// Cycle position at `now`.
    pub(crate) fn sample(&self, now: SystemTime) -> Result<f64, CountdownError> {
        Ok(self.config.sampler()?.sample(now))
    }

    pub(crate) fn frame_for_degrees(&self, degrees: f32) -> WedgeFrame {
        self.frame(self.builder().build_degrees(f64::from(degrees)))
    }

    /// Keeps the sampled fraction in f64 so only a whole cycle draws a full disc.
    pub(crate) fn frame_for_fraction(&self, fraction: f64) -> WedgeFrame {
        self.frame(self.builder().build(fraction))
    }

    fn builder(&self) -> WedgeBuilder {
        WedgeBuilder::new(self.bounds.center(), self.config.circle_radius).clockwise(self.clockwise)
    }

    fn frame(&self, path: WedgePath) -> WedgeFrame {
        WedgeFrame {
            degrees: path.sweep_degrees() as f32,
            path,
            fill_color: self.config.fill_color,
            stroke_color: self.config.stroke_color,
            stroke_width: self.config.stroke_width,
        }
    }

    fn note_renderer(&mut self, available: bool) {
        match (available, self.renderer_missing) {
            (false, false) => log::warn!("countdown renderer unavailable; skipping redraws until it returns"),
            (false, true) => log::debug!("countdown renderer still unavailable; frame skipped"),
            (true, true) => log::debug!("countdown renderer available again"),
            (true, false) => {}
        }
        self.renderer_missing = !available;
    }
}

/// Records `frame` as the current angle and pushes it to the surface.
///
/// Returns `false` when the surface is gone or busy; the frame is dropped and
/// the caller keeps going. No model borrow is held while the surface runs, so
/// the surface may call back into the widget or its loop.
pub(crate) fn present(model: &RefCell<CountdownModel>, frame: WedgeFrame) -> bool {
    let surface = {
        let mut m = model.borrow_mut();
        m.angle = frame.degrees;
        m.surface.upgrade()
    };

    let delivered = surface.is_some_and(|surface| deliver(&surface, frame));
    model.borrow_mut().note_renderer(delivered);
    delivered
}

fn deliver(surface: &RefCell<dyn RenderSurface>, frame: WedgeFrame) -> bool {
    let Ok(mut s) = surface.try_borrow_mut() else {
        return false;
    };

    s.set_path(frame.path);
    s.set_fill_color(frame.fill_color);
    s.set_stroke_color(frame.stroke_color);
    s.set_stroke_width(frame.stroke_width);
    true
}
