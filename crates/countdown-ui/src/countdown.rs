use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::time::SystemTime;

use countdown_engine::coords::{Rect, Vec2};
use countdown_engine::error::{validate_radius, validate_stroke_width};
use countdown_engine::paint::Color;
use countdown_engine::refresh::RefreshSource;
use countdown_engine::scene::{RenderSurface, ShapeLayer};
use countdown_engine::time::validate_interval;
use countdown_engine::CountdownError;

use crate::config::CountdownConfig;
use crate::model::{present, CountdownModel};
use crate::redraw::{LoopPhase, RedrawLoop};

/// Circular wedge countdown.
///
/// Draws a circle of radius `circle_radius` centered in its bounds, filled as a
/// wedge from 12 o'clock to `angle`. Once started, the wedge sweeps once per
/// `interval` seconds, measured from `base_date`.
///
/// # Example
/// ```rust,ignore
/// let layer = Rc::new(RefCell::new(ShapeLayer::new()));
/// let mut countdown = CircularCountdown::new(&layer);
/// countdown.set_circle_radius(24.0)?;
/// countdown.set_fill_color(Color::from_hex("#22c55e"));
/// countdown.set_bounds(Rect::new(0.0, 0.0, 48.0, 48.0));
/// countdown.attach_refresh_source(refresh);
/// countdown.start();
/// ```
pub struct CircularCountdown {
    model: Rc<RefCell<CountdownModel>>,
    redraw: Option<RedrawLoop>,
}

impl CircularCountdown {
    /// Countdown drawing into `surface` with the default configuration.
    pub fn new<S: RenderSurface + 'static>(surface: &Rc<RefCell<S>>) -> Self {
        Self::from_parts(CountdownConfig::default(), downgrade_surface(surface))
    }

    /// Countdown with a validated configuration.
    pub fn with_config<S: RenderSurface + 'static>(
        surface: &Rc<RefCell<S>>,
        config: CountdownConfig,
    ) -> Result<Self, CountdownError> {
        validated(config.validate())?;
        Ok(Self::from_parts(config, downgrade_surface(surface)))
    }

    /// Countdown with no surface yet; frames are skipped until one is set.
    pub fn detached() -> Self {
        let nothing: Weak<RefCell<dyn RenderSurface>> = Weak::<RefCell<ShapeLayer>>::new();
        Self::from_parts(CountdownConfig::default(), nothing)
    }

    fn from_parts(config: CountdownConfig, surface: Weak<RefCell<dyn RenderSurface>>) -> Self {
        Self {
            model: Rc::new(RefCell::new(CountdownModel::new(config, surface))),
            redraw: None,
        }
    }

    /// Redirects drawing to `surface`. The countdown holds it weakly.
    pub fn set_surface<S: RenderSurface + 'static>(&mut self, surface: &Rc<RefCell<S>>) {
        self.model.borrow_mut().surface = downgrade_surface(surface);
    }

    // ── configuration ─────────────────────────────────────────────────────

    pub fn config(&self) -> CountdownConfig {
        self.model.borrow().config.clone()
    }

    /// Replaces the whole configuration. Nothing changes on error.
    pub fn set_config(&mut self, config: CountdownConfig) -> Result<(), CountdownError> {
        validated(config.validate())?;
        self.model.borrow_mut().config = config;
        Ok(())
    }

    pub fn circle_radius(&self) -> f32 {
        self.model.borrow().config.circle_radius
    }

    pub fn set_circle_radius(&mut self, radius: f32) -> Result<(), CountdownError> {
        self.model.borrow_mut().config.circle_radius = validated(validate_radius(radius))?;
        Ok(())
    }

    pub fn fill_color(&self) -> Option<Color> {
        self.model.borrow().config.fill_color
    }

    pub fn set_fill_color(&mut self, color: Option<Color>) {
        self.model.borrow_mut().config.fill_color = color;
    }

    pub fn stroke_color(&self) -> Option<Color> {
        self.model.borrow().config.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Option<Color>) {
        self.model.borrow_mut().config.stroke_color = color;
    }

    pub fn stroke_width(&self) -> f32 {
        self.model.borrow().config.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) -> Result<(), CountdownError> {
        self.model.borrow_mut().config.stroke_width = validated(validate_stroke_width(width))?;
        Ok(())
    }

    /// Cycle length in seconds.
    pub fn interval(&self) -> f64 {
        self.model.borrow().config.interval
    }

    pub fn set_interval(&mut self, seconds: f64) -> Result<(), CountdownError> {
        self.model.borrow_mut().config.interval = validated(validate_interval(seconds))?;
        Ok(())
    }

    pub fn base_date(&self) -> Option<SystemTime> {
        self.model.borrow().config.base_date
    }

    pub fn set_base_date(&mut self, base: Option<SystemTime>) {
        self.model.borrow_mut().config.base_date = base;
    }

    pub fn clockwise(&self) -> bool {
        self.model.borrow().clockwise
    }

    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.model.borrow_mut().clockwise = clockwise;
    }

    // ── layout ────────────────────────────────────────────────────────────

    pub fn bounds(&self) -> Rect {
        self.model.borrow().bounds
    }

    /// Area the circle is centered in.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.model.borrow_mut().bounds = bounds;
    }

    /// The diameter square.
    pub fn preferred_size(&self) -> Vec2 {
        let d = self.circle_radius() * 2.0;
        Vec2::new(d, d)
    }

    // ── drawing ───────────────────────────────────────────────────────────

    /// Angle of the last drawn wedge, in degrees.
    pub fn angle(&self) -> f32 {
        self.model.borrow().angle
    }

    /// Draws a wedge of `degrees` right away, without the refresh loop.
    ///
    /// Meant for static and design-time rendering; a running loop overwrites
    /// it on its next tick. Returns `false` if the surface was unavailable.
    pub fn set_angle(&mut self, degrees: f32) -> bool {
        let frame = self.model.borrow().frame_for_degrees(degrees);
        present(&self.model, frame)
    }

    /// Draws the current angle and, on first use, starts the attached loop.
    pub fn draw(&mut self) -> bool {
        let degrees = self.angle();
        let drawn = self.set_angle(degrees);

        if let Some(redraw) = &self.redraw {
            if redraw.phase() == LoopPhase::Uninitialized {
                redraw.start();
            }
        }
        drawn
    }

    // ── refresh loop ──────────────────────────────────────────────────────

    /// Uses `source` for future ticks. A running loop on a previous source is
    /// stopped; call [`start`](Self::start) to resume on the new one.
    pub fn attach_refresh_source(&mut self, source: Rc<dyn RefreshSource>) {
        if let Some(previous) = self.redraw.take() {
            previous.stop();
        }
        self.redraw = Some(RedrawLoop::new(source, Rc::clone(&self.model)));
    }

    pub fn redraw_loop(&self) -> Option<&RedrawLoop> {
        self.redraw.as_ref()
    }

    /// Starts redrawing every refresh tick. Returns `true` if the loop was
    /// started by this call.
    pub fn start(&mut self) -> bool {
        match &self.redraw {
            Some(redraw) => redraw.start(),
            None => {
                log::warn!("countdown has no refresh source attached; start ignored");
                false
            }
        }
    }

    /// Stops redrawing. Returns `true` if the loop was running.
    pub fn stop(&mut self) -> bool {
        self.redraw.as_ref().is_some_and(RedrawLoop::stop)
    }

    pub fn is_running(&self) -> bool {
        self.redraw.as_ref().is_some_and(RedrawLoop::is_running)
    }
}

impl Drop for CircularCountdown {
    fn drop(&mut self) {
        self.stop();
    }
}

fn downgrade_surface<S: RenderSurface + 'static>(surface: &Rc<RefCell<S>>) -> Weak<RefCell<dyn RenderSurface>> {
    let surface: Rc<RefCell<dyn RenderSurface>> = surface.clone();
    Rc::downgrade(&surface)
}

fn validated<T>(result: Result<T, CountdownError>) -> Result<T, CountdownError> {
    if let Err(e) = &result {
        log::warn!("rejected countdown configuration: {e}");
    }
    result
}
