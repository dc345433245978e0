//! Disposal tracking for controllers with requests in flight.
//!
//! A view that goes away while a request is pending marks its controller
//! disposed. When the response arrives the controller sees the flag and
//! drops the result: no state writes, toasts or navigation.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Owned by a controller; reports whether its view was disposed.
#[derive(Debug, Default)]
pub struct Lifetime {
    disposed: Arc<AtomicBool>,
}

impl Lifetime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Handle the view keeps to dispose the controller.
    #[must_use]
    pub fn handle(&self) -> DisposeHandle {
        DisposeHandle {
            disposed: Arc::clone(&self.disposed),
        }
    }
}

/// Held by the view side; marks the controller disposed.
#[derive(Debug, Clone)]
pub struct DisposeHandle {
    disposed: Arc<AtomicBool>,
}

impl DisposeHandle {
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }
}
