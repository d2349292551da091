//! Cooperative cancellation signals polled at chunk boundaries.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio_util::sync::CancellationToken;

/// A caller-owned flag that a long-running scan polls between chunks.
///
/// Polling is the only interaction: the scanner never resets or waits on
/// the signal, so any number of scans may share one.
pub trait CancelSignal: Send + Sync {
    /// Whether the scan should stop at the next chunk boundary.
    fn is_cancelled(&self) -> bool;
}

impl CancelSignal for CancellationToken {
    fn is_cancelled(&self) -> bool {
        CancellationToken::is_cancelled(self)
    }
}

impl CancelSignal for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Acquire)
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for &T {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

impl<T: CancelSignal + ?Sized> CancelSignal for Arc<T> {
    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_flag_is_observed() {
        let flag = Arc::new(AtomicBool::new(false));
        assert!(!flag.is_cancelled());
        flag.store(true, Ordering::Release);
        assert!(flag.is_cancelled());
    }

    #[test]
    fn child_tokens_observe_parent_cancellation() {
        let parent = CancellationToken::new();
        let child = parent.child_token();
        let signal: &dyn CancelSignal = &child;
        assert!(!signal.is_cancelled());
        parent.cancel();
        assert!(signal.is_cancelled());
    }
}
