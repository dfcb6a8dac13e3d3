use std::time::SystemTime;

use super::registry::CallbackRegistry;
use super::{RefreshCallback, RefreshSource, RefreshToken, RunMode};

/// Refresh source driven by explicit calls instead of a display.
///
/// Used by tests and by hosts that already own a frame loop and only need to
/// forward its ticks.
#[derive(Default)]
pub struct ManualRefreshSource {
    registry: CallbackRegistry,
}

impl ManualRefreshSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers one frame while the host loop is idle: every registration fires.
    pub fn fire(&self, now: SystemTime) -> usize {
        self.registry.dispatch(now, |_| true)
    }

    /// Delivers one frame during user interaction: only [`RunMode::Common`]
    /// registrations fire.
    pub fn fire_interacting(&self, now: SystemTime) -> usize {
        self.registry.dispatch(now, RunMode::fires_during_interaction)
    }

    pub fn registration_count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_registered(&self, token: RefreshToken) -> bool {
        self.registry.is_registered(token)
    }
}

impl RefreshSource for ManualRefreshSource {
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

    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::time::{Duration, UNIX_EPOCH};

    fn counter() -> (Rc<Cell<u32>>, RefreshCallback) {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        (hits, Box::new(move |_, _| h.set(h.get() + 1)))
    }

    #[test]
    fn fires_registered_callbacks_with_time_and_token() {
        let source = ManualRefreshSource::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        let token = source.register(RunMode::Common, Box::new(move |tok: RefreshToken, now: SystemTime| s.borrow_mut().push((tok, now))));

        let now = UNIX_EPOCH + Duration::from_secs(42);
        assert_eq!(source.fire(now), 1);
        assert_eq!(*seen.borrow(), vec![(token, now)]);
    }

    #[test]
    fn tokens_are_never_reused() {
        let source = ManualRefreshSource::new();
        let a = source.register(RunMode::Default, Box::new(|_, _| {}));
        source.unregister(a);
        let b = source.register(RunMode::Default, Box::new(|_, _| {}));
        assert_ne!(a, b);
    }

    #[test]
    fn unregistered_callback_stops_firing() {
        let source = ManualRefreshSource::new();
        let (hits, cb) = counter();
        let token = source.register(RunMode::Common, cb);

        source.fire(UNIX_EPOCH);
        source.unregister(token);
        source.fire(UNIX_EPOCH);

        assert_eq!(hits.get(), 1);
        assert_eq!(source.registration_count(), 0);
    }

    #[test]
    fn unregister_unknown_token_is_ignored() {
        let source = ManualRefreshSource::new();
        source.unregister(RefreshToken::from_raw(99));
        assert_eq!(source.registration_count(), 0);
    }

    #[test]
    fn interaction_only_fires_common_mode() {
        let source = ManualRefreshSource::new();
        let (idle_hits, idle_cb) = counter();
        let (common_hits, common_cb) = counter();
        source.register(RunMode::Default, idle_cb);
        source.register(RunMode::Common, common_cb);

        assert_eq!(source.fire_interacting(UNIX_EPOCH), 1);
        assert_eq!(idle_hits.get(), 0);
        assert_eq!(common_hits.get(), 1);

        assert_eq!(source.fire(UNIX_EPOCH), 2);
        assert_eq!(idle_hits.get(), 1);
    }

    #[test]
    fn callback_may_unregister_itself() {
        let source = Rc::new(ManualRefreshSource::new());
        let own = Rc::new(Cell::new(None::<RefreshToken>));
        let hits = Rc::new(Cell::new(0));

        let (weak, o, h) = (Rc::downgrade(&source), Rc::clone(&own), Rc::clone(&hits));
        let token = source.register(
            RunMode::Common,
            Box::new(move |_, _| {
                h.set(h.get() + 1);
                if let (Some(src), Some(tok)) = (weak.upgrade(), o.get()) {
                    src.unregister(tok);
                }
            }),
        );
        own.set(Some(token));

        assert_eq!(source.fire(UNIX_EPOCH), 1);
        assert_eq!(source.fire(UNIX_EPOCH), 0);
        assert_eq!(hits.get(), 1);
        assert!(!source.is_registered(token));
    }

    #[test]
    fn callback_unregistering_a_later_one_suppresses_it() {
        let source = Rc::new(ManualRefreshSource::new());
        let victim = Rc::new(Cell::new(None::<RefreshToken>));

        let (weak, v) = (Rc::downgrade(&source), Rc::clone(&victim));
        source.register(
            RunMode::Common,
            Box::new(move |_, _| {
                if let (Some(src), Some(tok)) = (weak.upgrade(), v.get()) {
                    src.unregister(tok);
                }
            }),
        );
        let (hits, cb) = counter();
        victim.set(Some(source.register(RunMode::Common, cb)));

        assert_eq!(source.fire(UNIX_EPOCH), 1);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn registration_during_dispatch_waits_for_next_frame() {
        let source = Rc::new(ManualRefreshSource::new());
        let (hits, late_cb) = counter();
        let late = RefCell::new(Some(late_cb));

        let weak = Rc::downgrade(&source);
        source.register(
            RunMode::Common,
            Box::new(move |_, _| {
                if let (Some(src), Some(cb)) = (weak.upgrade(), late.borrow_mut().take()) {
                    src.register(RunMode::Common, cb);
                }
            }),
        );

        assert_eq!(source.fire(UNIX_EPOCH), 1);
        assert_eq!(hits.get(), 0);
        assert_eq!(source.fire(UNIX_EPOCH), 2);
        assert_eq!(hits.get(), 1);
    }
}
