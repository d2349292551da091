use std::{fmt, num::NonZeroUsize};

use super::{
    cancel::CancelSignal,
    progress::ProgressSink,
    yield_point::{TokioYield, YieldPoint},
};

/// Elements examined per chunk unless overridden.
pub const DEFAULT_CHUNK_SIZE: NonZeroUsize = NonZeroUsize::new(10_000).unwrap();

/// Chunks larger than this are followed by a cooperative yield.
pub const DEFAULT_YIELD_THRESHOLD: usize = 1_000;

/// Per-call knobs for the chunked scanners.
///
/// The lifetime lets sinks and signals borrow from the caller's stack; an
/// options value is consumed by exactly one scan.
pub struct ScanOptions<'o> {
    pub(crate) chunk_size: NonZeroUsize,
    pub(crate) yield_threshold: usize,
    pub(crate) progress: Option<Box<dyn ProgressSink + 'o>>,
    pub(crate) cancel: Option<Box<dyn CancelSignal + 'o>>,
    pub(crate) yield_point: Box<dyn YieldPoint + 'o>,
}

impl Default for ScanOptions<'_> {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            yield_threshold: DEFAULT_YIELD_THRESHOLD,
            progress: None,
            cancel: None,
            yield_point: Box::new(TokioYield),
        }
    }
}

impl fmt::Debug for ScanOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanOptions")
            .field("chunk_size", &self.chunk_size)
            .field("yield_threshold", &self.yield_threshold)
            .field("has_progress", &self.progress.is_some())
            .field("has_cancel", &self.cancel.is_some())
            .finish()
    }
}

impl<'o> ScanOptions<'o> {
    /// Same as [`ScanOptions::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Elements examined between cancellation polls.
    pub fn chunk_size(mut self, chunk_size: NonZeroUsize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Chunk sizes strictly above `threshold` yield after every chunk.
    pub fn yield_threshold(mut self, threshold: usize) -> Self {
        self.yield_threshold = threshold;
        self
    }

    /// Reports progress to `sink` after every chunk.
    pub fn on_progress<P>(mut self, sink: P) -> Self
    where
        P: ProgressSink + 'o,
    {
        self.progress = Some(Box::new(sink));
        self
    }

    /// Polls `signal` before every chunk.
    pub fn cancel_with<C>(mut self, signal: C) -> Self
    where
        C: CancelSignal + 'o,
    {
        self.cancel = Some(Box::new(signal));
        self
    }

    /// Replaces the default [`TokioYield`].
    pub fn yield_with<Y>(mut self, point: Y) -> Self
    where
        Y: YieldPoint + 'o,
    {
        self.yield_point = Box::new(point);
        self
    }

    /// [`ScanOptions::yield_with`] for an already boxed yield point.
    pub fn yield_with_boxed(mut self, point: Box<dyn YieldPoint + 'o>) -> Self {
        self.yield_point = point;
        self
    }

    /// Configured chunk size.
    pub fn chunk_size_value(&self) -> NonZeroUsize {
        self.chunk_size
    }

    /// Configured yield threshold.
    pub fn yield_threshold_value(&self) -> usize {
        self.yield_threshold
    }

    /// Whether this configuration suspends between chunks.
    pub fn yields_between_chunks(&self) -> bool {
        self.chunk_size.get() > self.yield_threshold
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|signal| signal.is_cancelled())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::NoYield;

    #[test]
    fn defaults_match_documented_constants() {
        let options = ScanOptions::default();
        assert_eq!(options.chunk_size_value().get(), 10_000);
        assert_eq!(options.yield_threshold_value(), 1_000);
        assert!(options.yields_between_chunks());
        assert!(!options.is_cancelled());
    }

    #[test]
    fn small_chunks_do_not_yield() {
        let options = ScanOptions::new()
            .chunk_size(NonZeroUsize::new(1_000).unwrap())
            .yield_with(NoYield);
        assert!(!options.yields_between_chunks());
    }
}
