use std::cell::RefCell;
use std::rc::Rc;
use std::time::SystemTime;

use super::{RefreshCallback, RefreshToken, RunMode};

struct Entry {
    token: RefreshToken,
    mode: RunMode,
    // Shared so a dispatch in flight keeps the closure alive even if the
    // callback unregisters itself.
    callback: Rc<RefCell<RefreshCallback>>,
}

#[derive(Default)]
struct RegistryState {
    next_id: u64,
    entries: Vec<Entry>,
}

/// Registration table shared by the concrete refresh sources.
///
/// No `RefCell` borrow is held while a callback runs, so callbacks may freely
/// register and unregister.
#[derive(Default)]
pub(crate) struct CallbackRegistry {
    state: RefCell<RegistryState>,
}

impl CallbackRegistry {
    pub(crate) fn register(&self, mode: RunMode, callback: RefreshCallback) -> RefreshToken {
        let mut state = self.state.borrow_mut();
        let token = RefreshToken::from_raw(state.next_id);
        state.next_id += 1;
        state.entries.push(Entry {
            token,
            mode,
            callback: Rc::new(RefCell::new(callback)),
        });

        log::trace!("refresh callback registered: {token:?} ({mode:?})");
        token
    }

    pub(crate) fn unregister(&self, token: RefreshToken) -> bool {
        let mut state = self.state.borrow_mut();
        let before = state.entries.len();
        state.entries.retain(|e| e.token != token);
        let removed = state.entries.len() != before;

        if removed {
            log::trace!("refresh callback unregistered: {token:?}");
        }
        removed
    }

    pub(crate) fn is_registered(&self, token: RefreshToken) -> bool {
        self.state.borrow().entries.iter().any(|e| e.token == token)
    }

    pub(crate) fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    /// Fires every registration whose mode passes `fires`. Returns how many ran.
    ///
    /// Registrations removed by an earlier callback of the same dispatch are
    /// skipped; registrations added during the dispatch wait for the next one.
    pub(crate) fn dispatch(&self, now: SystemTime, fires: impl Fn(RunMode) -> bool) -> usize {
        let snapshot: Vec<(RefreshToken, Rc<RefCell<RefreshCallback>>)> = self
            .state
            .borrow()
            .entries
            .iter()
            .filter(|e| fires(e.mode))
            .map(|e| (e.token, Rc::clone(&e.callback)))
            .collect();

        let mut fired = 0;
        for (token, callback) in snapshot {
            if !self.is_registered(token) {
                continue;
            }

            match callback.try_borrow_mut() {
                Ok(mut f) => {
                    (*f)(token, now);
                    fired += 1;
                }
                Err(_) => log::warn!("refresh callback {token:?} re-entered its own dispatch; skipped"),
            }
        }
        fired
    }
}
