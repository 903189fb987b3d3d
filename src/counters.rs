//! Request counters
//!
//! Process-lifetime totals reported by `/status`. Both counters start at zero
//! and are only ever incremented.

use std::sync::atomic::{AtomicU64, Ordering};

/// Shared request/error totals
#[derive(Debug, Default)]
pub struct RequestCounters {
    total_requests: AtomicU64,
    error_count: AtomicU64,
}

/// Point-in-time copy of the counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub total_requests: u64,
    pub error_count: u64,
}

impl RequestCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an inbound request, returning the new total
    pub fn record_request(&self) -> u64 {
        self.total_requests.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Count an error response, returning the new total
    pub fn record_error(&self) -> u64 {
        self.error_count.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            total_requests: self.total_requests.load(Ordering::SeqCst),
            error_count: self.error_count.load(Ordering::SeqCst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_starts_at_zero() {
        let counters = RequestCounters::new();
        assert_eq!(
            counters.snapshot(),
            CounterSnapshot {
                total_requests: 0,
                error_count: 0
            }
        );
    }

    #[test]
    fn test_record_returns_new_total() {
        let counters = RequestCounters::new();
        assert_eq!(counters.record_request(), 1);
        assert_eq!(counters.record_request(), 2);
        assert_eq!(counters.record_error(), 1);
        assert_eq!(counters.snapshot().total_requests, 2);
        assert_eq!(counters.snapshot().error_count, 1);
    }

    #[test]
    fn test_concurrent_increments_are_not_lost() {
        let counters = Arc::new(RequestCounters::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let counters = Arc::clone(&counters);
                std::thread::spawn(move || {
                    for _ in 0..1000 {
                        counters.record_request();
                        counters.record_error();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = counters.snapshot();
        assert_eq!(snapshot.total_requests, 8000);
        assert_eq!(snapshot.error_count, 8000);
    }
}
