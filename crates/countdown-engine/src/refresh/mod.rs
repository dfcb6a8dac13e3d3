//! Display-refresh sources.
//!
//! A refresh source invokes registered callbacks once per displayed frame with
//! the wall-clock time of that frame. It is the only clock the redraw loop sees,
//! so any periodic primitive (vsync callback, animation frame, paced thread)
//! can stand behind it.
//!
//! Sources are confined to the thread that created them (they are `!Send`);
//! callbacks run on that thread, one at a time, and may register or unregister
//! (including themselves) while running.

mod manual;
mod paced;
mod registry;

pub use manual::ManualRefreshSource;
pub use paced::{PacedRefreshConfig, PacedRefreshSource};

use std::time::SystemTime;

/// Identifies one registration. Tokens are never reused by a source, so a
/// token from an earlier registration never matches a later one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct RefreshToken(u64);

impl RefreshToken {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Which run-loop activity a registration fires during.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Fires only while the host loop is idle.
    #[default]
    Default,
    /// Fires during every activity, including active user interaction.
    Common,
}

impl RunMode {
    /// Whether a registration in this mode fires while the user is interacting.
    #[inline]
    pub fn fires_during_interaction(self) -> bool {
        matches!(self, RunMode::Common)
    }
}

/// Per-frame callback. Receives the token of the registration being fired and
/// the frame's wall-clock time.
pub type RefreshCallback = Box<dyn FnMut(RefreshToken, SystemTime)>;

/// Capability to receive a callback on every display refresh.
pub trait RefreshSource {
    /// Registers `callback`; it fires once per frame until unregistered.
    fn register(&self, mode: RunMode, callback: RefreshCallback) -> RefreshToken;

    /// Removes a registration. Unknown or already removed tokens are ignored.
    fn unregister(&self, token: RefreshToken);
}
