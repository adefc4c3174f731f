use std::sync::atomic::{AtomicU64, Ordering};

/// Generation number taken when a flow starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic request fence.
///
/// A generation stays live until something at least as new has been
/// rendered, or a reset settles everything issued so far. A newer request
/// that fails never renders, so it does not supersede older ones.
#[derive(Debug, Default)]
pub struct RequestFence {
    issued: AtomicU64,
    settled: AtomicU64,
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> Generation {
        Generation(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Settle every generation issued so far without rendering anything.
    pub fn invalidate(&self) {
        let issued = self.issued.load(Ordering::SeqCst);
        self.settled.fetch_max(issued, Ordering::SeqCst);
    }

    pub fn is_current(&self, generation: Generation) -> bool {
        generation.0 > self.settled.load(Ordering::SeqCst)
    }

    /// Claim the screen for `generation`. Fails if a newer generation has
    /// already rendered or a reset came after it was issued.
    pub fn commit(&self, generation: Generation) -> bool {
        self.settled
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |settled| {
                (generation.0 > settled).then_some(generation.0)
            })
            .is_ok()
    }
}
