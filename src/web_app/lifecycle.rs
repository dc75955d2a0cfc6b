// web_app/lifecycle.rs - Screen liveness tracking
//
// A page that starts an async fetch on mount hands a `Liveness` clone to the
// task and ends it on cleanup. Results arriving afterwards are dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Liveness {
    live: Arc<AtomicBool>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Mark the owning screen as gone. Idempotent.
    pub fn end(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Run `apply` with `value` only while the screen is still mounted.
    /// Returns whether the value was delivered.
    pub fn deliver<T>(&self, value: T, apply: impl FnOnce(T)) -> bool {
        if self.is_live() {
            apply(value);
            true
        } else {
            tracing::debug!("Discarding result for an unmounted screen");
            false
        }
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}
