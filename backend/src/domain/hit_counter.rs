//! Process-wide counter of instrumented static-asset requests.

use std::sync::atomic::{AtomicI64, Ordering};

/// Atomic request counter shared between the instrumentation middleware and
/// the admin handlers.
///
/// The counter is owned explicitly and handed out through `Arc`; nothing in
/// the crate keeps it in a global.
///
/// # Examples
/// ```
/// use chirpy::domain::HitCounter;
///
/// let hits = HitCounter::new();
/// hits.increment();
/// hits.increment();
/// assert_eq!(hits.load(), 2);
/// hits.reset();
/// assert_eq!(hits.load(), 0);
/// ```
#[derive(Debug, Default)]
pub struct HitCounter {
    hits: AtomicI64,
}

impl HitCounter {
    /// Create a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one instrumented request and return the new total.
    pub fn increment(&self) -> i64 {
        self.hits.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current total.
    #[must_use]
    pub fn load(&self) -> i64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Zero the counter.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
    }
}
