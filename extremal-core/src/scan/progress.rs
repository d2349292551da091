//! Progress notifications emitted after every completed chunk.

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};

/// Snapshot of how far a scan has come.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanProgress {
    /// Elements examined so far.
    pub processed: usize,
    /// Length of the sequence being scanned.
    pub total: usize,
}

impl ScanProgress {
    /// Snapshot after `processed` of `total` elements.
    pub fn new(processed: usize, total: usize) -> Self {
        Self { processed, total }
    }

    /// Completed fraction in `[0.0, 1.0]`; an empty total counts as done.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.processed as f64 / self.total as f64
        }
    }

    /// [`ScanProgress::fraction`] scaled to `[0.0, 100.0]`.
    pub fn percent(&self) -> f64 {
        self.fraction() * 100.0
    }

    /// Every element has been examined.
    pub fn is_complete(&self) -> bool {
        self.processed >= self.total
    }
}

/// Receives progress synchronously from inside the scan loop.
///
/// Sinks are infallible. A sink that panics unwinds through the scan and
/// the scan never completes, so keep reporting cheap and total.
pub trait ProgressSink: Send {
    /// Called once per completed chunk.
    fn report(&mut self, progress: ScanProgress);
}

impl<F> ProgressSink for F
where
    F: FnMut(ScanProgress) + Send,
{
    fn report(&mut self, progress: ScanProgress) {
        self(progress)
    }
}

impl ProgressSink for watch::Sender<ScanProgress> {
    fn report(&mut self, progress: ScanProgress) {
        // Keep the latest value even when nobody is subscribed yet.
        self.send_replace(progress);
    }
}

impl ProgressSink for mpsc::UnboundedSender<ScanProgress> {
    fn report(&mut self, progress: ScanProgress) {
        // A dropped receiver only means nobody is listening any more.
        let _ = self.send(progress);
    }
}
