//! Mount-liveness flag for async page loads.
//!
//! A page creates one `Liveness` on mount and retires it on cleanup. Async
//! tasks check it before writing results so a late response never touches
//! state owned by an unmounted page. Requests themselves are not cancelled.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// Create a flag that retires when the current reactive owner is cleaned up.
    pub fn for_component() -> Self {
        let liveness = Self::new();
        let on_drop = liveness.clone();
        leptos::prelude::on_cleanup(move || on_drop.retire());
        liveness
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn retire(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while still mounted. Returns whether it ran.
    pub fn guard(&self, apply: impl FnOnce()) -> bool {
        if self.is_alive() {
            apply();
            true
        } else {
            false
        }
    }

    /// Run `task` in the background and pass its output to `apply` if the
    /// owner is still mounted when it resolves.
    ///
    /// Tasks only run in the browser; during SSR the page renders its
    /// loading state and the task is dropped.
    pub fn spawn_guarded<T, F, A>(&self, task: F, apply: A)
    where
        T: 'static,
        F: Future<Output = T> + 'static,
        A: FnOnce(T) + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            let liveness = self.clone();
            leptos::task::spawn_local(async move {
                let output = task.await;
                liveness.guard(move || apply(output));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        drop((task, apply));
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
