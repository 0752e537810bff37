//! Sequence numbering so only the freshest response is applied.
//!
//! Requests take a number when they are created. A response, success or
//! failure, is applied only if its number is the highest seen so far;
//! responses to superseded requests that arrive late are discarded.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic request numbering plus the high-water mark of answered requests.
#[derive(Debug, Default)]
pub struct SequenceGate {
    issued: AtomicU64,
    seen: AtomicU64,
}

impl SequenceGate {
    /// Create a gate. Sequence numbers start at 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next sequence number for a new request.
    pub fn next(&self) -> u64 {
        self.issued.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Record a response for `seq`. Returns `true` if it is the freshest seen
    /// and should be applied, `false` if it is stale. Failed responses go
    /// through here too, so they supersede older requests still in flight.
    pub fn accept(&self, seq: u64) -> bool {
        self.seen.fetch_max(seq, Ordering::AcqRel) < seq
    }

    /// Highest sequence number issued so far.
    #[must_use]
    pub fn last_issued(&self) -> u64 {
        self.issued.load(Ordering::Relaxed)
    }

    /// Highest sequence number answered so far.
    #[must_use]
    pub fn last_seen(&self) -> u64 {
        self.seen.load(Ordering::Acquire)
    }

    /// Whether the newest request has been answered.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.last_seen() == self.last_issued()
    }
}
