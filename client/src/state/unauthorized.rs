//! Once-per-episode guard for the global 401 policy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Several requests can be in flight when a token expires, and each of them
//! comes back 401. Only the first may clear the session and navigate to the
//! login screen; the rest must be no-ops. The guard re-arms when a new
//! session is adopted.

#[cfg(test)]
#[path = "unauthorized_test.rs"]
mod unauthorized_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug, Default)]
pub struct UnauthorizedGuard {
    tripped: Arc<AtomicBool>,
}

impl UnauthorizedGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trip the guard. Returns `true` only for the caller that tripped it.
    pub fn trip(&self) -> bool {
        !self.tripped.swap(true, Ordering::AcqRel)
    }

    /// Run `action` if this call is the one that trips the guard.
    pub fn run_once(&self, action: impl FnOnce()) -> bool {
        if self.trip() {
            action();
            true
        } else {
            false
        }
    }

    pub fn rearm(&self) {
        self.tripped.store(false, Ordering::Release);
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped.load(Ordering::Acquire)
    }
}
