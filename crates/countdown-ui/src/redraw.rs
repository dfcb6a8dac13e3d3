use std::cell::RefCell;
use std::rc::Rc;
use std::time::SystemTime;

use countdown_engine::refresh::{RefreshSource, RefreshToken, RunMode};
use countdown_engine::CountdownError;

use crate::model::{present, CountdownModel};

/// Lifecycle of a [`RedrawLoop`].
///
/// `Uninitialized → Running ⇄ Stopped`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LoopPhase {
    Uninitialized,
    Running,
    Stopped,
}

/// What a single tick did. Ticks never fail outward; every condition the
/// refresh source could trip over is folded into one of these.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickOutcome {
    /// A wedge was handed to the surface.
    Emitted { fraction: f64 },
    /// The tick belonged to an earlier registration and was discarded.
    Stale,
    /// The loop is not running.
    NotRunning,
    /// The surface is gone or busy; the frame was skipped.
    RendererUnavailable,
    /// The configuration could not be sampled; the frame was skipped.
    InvalidConfig(CountdownError),
}

struct LoopInner {
    phase: LoopPhase,
    token: Option<RefreshToken>,
    source: Rc<dyn RefreshSource>,
    model: Rc<RefCell<CountdownModel>>,
}

impl Drop for LoopInner {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            self.source.unregister(token);
        }
    }
}

/// Per-frame driver: samples progress, builds the wedge and pushes it to the
/// surface on every refresh tick while running.
///
/// Clones share one registration. The registered callback holds the loop
/// weakly, so dropping the last handle unregisters it.
#[derive(Clone)]
pub struct RedrawLoop {
    inner: Rc<RefCell<LoopInner>>,
}

impl RedrawLoop {
    pub(crate) fn new(source: Rc<dyn RefreshSource>, model: Rc<RefCell<CountdownModel>>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(LoopInner {
                phase: LoopPhase::Uninitialized,
                token: None,
                source,
                model,
            })),
        }
    }

    #[inline]
    pub fn phase(&self) -> LoopPhase {
        self.inner.borrow().phase
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase() == LoopPhase::Running
    }

    /// Live registration, if running.
    #[inline]
    pub fn token(&self) -> Option<RefreshToken> {
        self.inner.borrow().token
    }

    /// Registers with the refresh source in [`RunMode::Common`] so ticks keep
    /// arriving during user interaction. Returns `false` if already running.
    pub fn start(&self) -> bool {
        let source = {
            let inner = self.inner.borrow();
            if inner.phase == LoopPhase::Running {
                return false;
            }
            Rc::clone(&inner.source)
        };

        let weak = Rc::downgrade(&self.inner);
        let token = source.register(
            RunMode::Common,
            Box::new(move |token: RefreshToken, now: SystemTime| {
                if let Some(inner) = weak.upgrade() {
                    RedrawLoop { inner }.on_tick(token, now);
                }
            }),
        );

        let mut inner = self.inner.borrow_mut();
        inner.token = Some(token);
        inner.phase = LoopPhase::Running;
        log::debug!("redraw loop started ({token:?})");
        true
    }

    /// Unregisters from the refresh source. Returns `false` if not running.
    ///
    /// Safe to call from inside a tick, including from the surface while it is
    /// receiving that tick's wedge.
    pub fn stop(&self) -> bool {
        let (source, token) = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase != LoopPhase::Running {
                return false;
            }
            inner.phase = LoopPhase::Stopped;
            (Rc::clone(&inner.source), inner.token.take())
        };

        if let Some(token) = token {
            source.unregister(token);
            log::debug!("redraw loop stopped ({token:?})");
        }
        true
    }

    /// Handles one refresh tick delivered for registration `token`.
    pub fn on_tick(&self, token: RefreshToken, now: SystemTime) -> TickOutcome {
        let model = {
            let inner = self.inner.borrow();
            if inner.phase != LoopPhase::Running {
                return TickOutcome::NotRunning;
            }
            if inner.token != Some(token) {
                log::trace!("ignoring stale refresh tick from {token:?}");
                return TickOutcome::Stale;
            }
            Rc::clone(&inner.model)
        };

        let sampled = model.borrow().sample(now);
        let fraction = match sampled {
            Ok(fraction) => fraction,
            Err(e) => {
                log::warn!("countdown frame skipped: {e}");
                return TickOutcome::InvalidConfig(e);
            }
        };

        let frame = model.borrow().frame_for_fraction(fraction);
        if present(&model, frame) {
            TickOutcome::Emitted { fraction }
        } else {
            TickOutcome::RendererUnavailable
        }
    }
}
