//! Request generations
//!
//! A listing can be refetched while an earlier fetch is still in flight. Each
//! fetch takes a [`Ticket`] and only the newest ticket may apply its result.

use std::sync::atomic::{AtomicU64, Ordering};

/// Handed out to each fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

/// Monotonic counter of started fetches.
#[derive(Debug, Default)]
pub struct RequestGeneration {
    latest: AtomicU64,
}

impl RequestGeneration {
    /// Create a counter with no fetch started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fetch, superseding every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel).wrapping_add(1))
    }

    /// Whether no fetch has started since `ticket` was handed out.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_ticket_is_current() {
        let generation = RequestGeneration::new();
        let ticket = generation.begin();

        assert!(generation.is_current(ticket));
    }

    #[test]
    fn newer_fetch_supersedes_older() {
        let generation = RequestGeneration::new();
        let first = generation.begin();
        let second = generation.begin();

        assert!(!generation.is_current(first));
        assert!(generation.is_current(second));
        assert!(first < second);
    }
}
