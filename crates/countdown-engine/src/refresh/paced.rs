use std::cell::RefCell;
use std::time::{Duration, Instant};

use crate::time::{FrameClock, FrameTime};

use super::registry::CallbackRegistry;
use super::{RefreshCallback, RefreshSource, RefreshToken, RunMode};

/// Paced refresh configuration.
#[derive(Debug, Clone)]
pub struct PacedRefreshConfig {
    /// Target frames per second. Clamped to [1, 1000].
    pub frames_per_second: f32,
}

impl PacedRefreshConfig {
    pub fn frame_period(&self) -> Duration {
        let fps = if self.frames_per_second.is_finite() {
            self.frames_per_second.clamp(1.0, 1000.0)
        } else {
            60.0
        };
        Duration::from_secs_f64(1.0 / fps as f64)
    }
}

impl Default for PacedRefreshConfig {
    fn default() -> Self {
        Self { frames_per_second: 60.0 }
    }
}

/// Refresh source that paces frames on the calling thread.
///
/// There is no display to synchronize with, so every frame counts as
/// interactive and all run modes fire. The loop runs only inside the `run_*`
/// calls; between them the source is idle.
pub struct PacedRefreshSource {
    registry: CallbackRegistry,
    clock: RefCell<FrameClock>,
    period: Duration,
}

impl PacedRefreshSource {
    pub fn new(config: PacedRefreshConfig) -> Self {
        Self {
            registry: CallbackRegistry::default(),
            clock: RefCell::new(FrameClock::new()),
            period: config.frame_period(),
        }
    }

    #[inline]
    pub fn frame_period(&self) -> Duration {
        self.period
    }

    pub fn registration_count(&self) -> usize {
        self.registry.len()
    }

    /// Runs exactly `frames` frames.
    pub fn run_frames(&self, frames: u64) {
        if frames == 0 {
            return;
        }
        let mut left = frames;
        self.run_while(|_| {
            left = left.saturating_sub(1);
            left > 0
        });
    }

    /// Runs frames until `duration` of monotonic time has passed.
    pub fn run_for(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        self.run_while(|ft| ft.now < deadline);
    }

    /// Runs frames until `keep_going` returns false. `keep_going` is asked after
    /// each frame's callbacks have run; the frame count is returned.
    pub fn run_while(&self, mut keep_going: impl FnMut(&FrameTime) -> bool) -> u64 {
        self.clock.borrow_mut().reset();
        let mut frames = 0;

        loop {
            let ft = self.clock.borrow_mut().tick();
            let fired = self.registry.dispatch(ft.wall, |_| true);
            frames += 1;

            if ft.frame_index % 60 == 0 {
                log::trace!("frame {} dt={:.4}s callbacks={fired}", ft.frame_index, ft.dt);
            }

            if !keep_going(&ft) {
                return frames;
            }

            let next = ft.now + self.period;
            let now = Instant::now();
            if next > now {
                std::thread::sleep(next - now);
            }
        }
    }
}

impl Default for PacedRefreshSource {
    fn default() -> Self {
        Self::new(PacedRefreshConfig::default())
    }
}

impl RefreshSource for PacedRefreshSource {
    fn register(&self, mode: RunMode, callback: RefreshCallback) -> RefreshToken {
        self.registry.register(mode, callback)
    }

    fn unregister(&self, token: RefreshToken) {
        self.registry.unregister(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::rc::Rc;

    fn fast() -> PacedRefreshSource {
        PacedRefreshSource::new(PacedRefreshConfig { frames_per_second: 1000.0 })
    }

    #[test]
    fn frame_period_follows_rate() {
        let cfg = PacedRefreshConfig { frames_per_second: 50.0 };
        assert_eq!(cfg.frame_period(), Duration::from_millis(20));
    }

    #[test]
    fn frame_period_clamps_bad_rates() {
        assert_eq!(PacedRefreshConfig { frames_per_second: 0.0 }.frame_period(), Duration::from_secs(1));
        assert_eq!(
            PacedRefreshConfig { frames_per_second: f32::NAN }.frame_period(),
            PacedRefreshConfig::default().frame_period()
        );
    }

    #[test]
    fn run_frames_fires_once_per_frame() {
        let source = fast();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        source.register(RunMode::Default, Box::new(move |_, _| h.set(h.get() + 1)));

        source.run_frames(5);
        assert_eq!(hits.get(), 5);
    }

    #[test]
    fn run_while_reports_frame_count() {
        let source = fast();
        let frames = source.run_while(|ft| ft.frame_index < 2);
        assert_eq!(frames, 3);
    }

    #[test]
    fn callback_can_stop_itself_mid_run() {
        let source = Rc::new(fast());
        let own = Rc::new(Cell::new(None::<RefreshToken>));
        let hits = Rc::new(Cell::new(0));

        let (weak, o, h) = (Rc::downgrade(&source), Rc::clone(&own), Rc::clone(&hits));
        let token = source.register(
            RunMode::Common,
            Box::new(move |_, _| {
                h.set(h.get() + 1);
                if h.get() == 2 {
                    if let (Some(src), Some(tok)) = (weak.upgrade(), o.get()) {
                        src.unregister(tok);
                    }
                }
            }),
        );
        own.set(Some(token));

        source.run_frames(6);
        assert_eq!(hits.get(), 2);
        assert_eq!(source.registration_count(), 0);
    }
}
