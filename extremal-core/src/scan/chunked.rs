//! Chunked extremum scan.
//!
//! The sequence is walked in contiguous slices of `chunk_size`. Each slice is
//! preceded by a poll of the cancellation signal and followed by a progress
//! report and, for large chunks, a cooperative yield. One loop serves every
//! direction; the tracker it feeds decides what "better" means.

use std::fmt;

use serde::Serialize;
use tracing::{Instrument, debug, debug_span, trace};

use super::{
    comparable::Comparable,
    options::ScanOptions,
    progress::ScanProgress,
    tracker::{Direction, MinMaxTracker, SingleTracker, Tracker},
};
use crate::error::{Result, ScanError};

/// Winning element of a scan.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ScanResult<'a, T: ?Sized> {
    /// The extremal element, borrowed from the scanned sequence.
    pub value: &'a T,
    /// Index of `value`; the smallest such index when several tie.
    pub index: usize,
    /// Elements examined when the result was produced.
    pub processed: usize,
}

impl<T: ?Sized> Clone for ScanResult<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for ScanResult<'_, T> {}

impl<T: fmt::Display + ?Sized> fmt::Display for ScanResult<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at index {} ({} examined)",
            self.value, self.index, self.processed
        )
    }
}

/// Both extrema, found in a single pass.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MinMax<'a, T: ?Sized> {
    /// Smallest element.
    pub min: ScanResult<'a, T>,
    /// Largest element.
    pub max: ScanResult<'a, T>,
}

impl<T: ?Sized> Clone for MinMax<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for MinMax<'_, T> {}

/// Finds the minimum or maximum of `items` in chunks.
///
/// Fails with [`ScanError::EmptyInput`] before any work when `items` is
/// empty, and with [`ScanError::Aborted`] when the configured cancel signal
/// is observed at a chunk boundary. On ties the earliest index wins.
pub async fn scan_extremum<'a, T>(
    items: &'a [T],
    direction: Direction,
    options: ScanOptions<'_>,
) -> Result<ScanResult<'a, T>>
where
    T: Comparable,
{
    scan_extremum_by_key(items, direction, options, |item: &'a T| item.key()).await
}

/// [`scan_extremum`] with an explicit key projection.
pub async fn scan_extremum_by_key<'a, T, K, F>(
    items: &'a [T],
    direction: Direction,
    options: ScanOptions<'_>,
    key: F,
) -> Result<ScanResult<'a, T>>
where
    F: Fn(&'a T) -> K,
    K: PartialOrd,
{
    let Some(first) = items.first() else {
        debug!(target: "scan::summary", %direction, "refusing to scan empty sequence");
        return Err(ScanError::EmptyInput);
    };

    let span = debug_span!(
        "scan_extremum",
        %direction,
        total = items.len(),
        chunk_size = options.chunk_size.get()
    );

    let mut tracker = SingleTracker::seeded(direction, first, key(first));
    let processed = drive(items, &mut tracker, &key, options)
        .instrument(span)
        .await?;

    let best = tracker.best;
    debug!(
        target: "scan::summary",
        %direction,
        index = best.index,
        processed,
        "scan complete"
    );

    Ok(ScanResult {
        value: best.value,
        index: best.index,
        processed,
    })
}

/// Finds both extrema of `items` in one chunked pass.
///
/// Produces the same results as two separate [`scan_extremum`] calls while
/// touching every element once.
pub async fn scan_min_max<'a, T>(
    items: &'a [T],
    options: ScanOptions<'_>,
) -> Result<MinMax<'a, T>>
where
    T: Comparable,
{
    scan_min_max_by_key(items, options, |item: &'a T| item.key()).await
}

/// [`scan_min_max`] with an explicit key projection.
pub async fn scan_min_max_by_key<'a, T, K, F>(
    items: &'a [T],
    options: ScanOptions<'_>,
    key: F,
) -> Result<MinMax<'a, T>>
where
    F: Fn(&'a T) -> K,
    K: PartialOrd + Clone,
{
    let Some(first) = items.first() else {
        debug!(target: "scan::summary", direction = "both", "refusing to scan empty sequence");
        return Err(ScanError::EmptyInput);
    };

    let span = debug_span!(
        "scan_min_max",
        total = items.len(),
        chunk_size = options.chunk_size.get()
    );

    let mut tracker = MinMaxTracker::seeded(first, key(first));
    let processed = drive(items, &mut tracker, &key, options)
        .instrument(span)
        .await?;

    debug!(
        target: "scan::summary",
        min_index = tracker.min.index,
        max_index = tracker.max.index,
        processed,
        "scan complete"
    );

    Ok(MinMax {
        min: ScanResult {
            value: tracker.min.value,
            index: tracker.min.index,
            processed,
        },
        max: ScanResult {
            value: tracker.max.value,
            index: tracker.max.index,
            processed,
        },
    })
}

/// Shared chunk loop. Returns the number of elements examined.
///
/// Element 0 seeds the tracker and is offered again here; strict
/// comparisons make that a no-op.
async fn drive<'a, T, K, F, R>(
    items: &'a [T],
    tracker: &mut R,
    key: &F,
    mut options: ScanOptions<'_>,
) -> Result<usize>
where
    F: Fn(&'a T) -> K,
    R: Tracker<'a, T, K>,
{
    let total = items.len();
    let chunk_size = options.chunk_size.get();
    let yields = options.yields_between_chunks();
    let mut processed = 0usize;

    for chunk in items.chunks(chunk_size) {
        if options.is_cancelled() {
            debug!(target: "scan::abort", processed, total, "cancellation observed");
            return Err(ScanError::Aborted { processed });
        }

        let offset = processed;
        for (position, item) in chunk.iter().enumerate() {
            tracker.observe(offset + position, item, key(item));
        }
        processed += chunk.len();

        trace!(target: "scan::chunk", processed, total, "chunk complete");

        if let Some(sink) = options.progress.as_mut() {
            sink.report(ScanProgress::new(processed, total));
        }

        if yields {
            options.yield_point.yield_now().await;
        }
    }

    Ok(processed)
}
