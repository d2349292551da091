//! Blocking wrappers around the chunked scanners.
//!
//! These drive the async scan on the current thread with
//! [`futures::executor::block_on`] and swap the configured yield point for
//! [`NoYield`], so they work outside any runtime. Cancellation and progress
//! still behave exactly as in the async versions; the signal just has to be
//! flipped from another thread or from inside the progress sink.

use futures::executor::block_on;

use super::{
    chunked::{MinMax, ScanResult, scan_extremum, scan_min_max},
    comparable::Comparable,
    options::ScanOptions,
    tracker::Direction,
    yield_point::NoYield,
};
use crate::error::Result;

/// Blocking [`scan_extremum`].
pub fn scan_extremum_blocking<'a, T: Comparable>(
    items: &'a [T],
    direction: Direction,
    options: ScanOptions<'_>,
) -> Result<ScanResult<'a, T>> {
    block_on(scan_extremum(items, direction, options.yield_with(NoYield)))
}

/// Blocking [`scan_min_max`].
pub fn scan_min_max_blocking<'a, T: Comparable>(
    items: &'a [T],
    options: ScanOptions<'_>,
) -> Result<MinMax<'a, T>> {
    block_on(scan_min_max(items, options.yield_with(NoYield)))
}
