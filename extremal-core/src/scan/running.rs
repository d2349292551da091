//! Streaming "best so far" adapters.
//!
//! Both adapters consume their source in one forward pass and emit the
//! first element followed by every element that strictly improves on the
//! running best. Only the last emitted value is final. Restarting means
//! building a new adapter over a fresh source.

use futures::{Stream, StreamExt};

use super::{comparable::Comparable, tracker::Direction};
use crate::error::{Result, ScanError};

/// Iterator returned by [`running_extremum`].
#[derive(Debug)]
pub struct RunningExtremum<I: Iterator> {
    source: I,
    direction: Direction,
    best: I::Item,
    emitted_first: bool,
}

/// Wraps `source` so that iterating yields each new best value.
///
/// The first element is pulled eagerly so an empty source fails here with
/// [`ScanError::EmptyInput`] instead of producing an empty iterator.
pub fn running_extremum<I>(source: I, direction: Direction) -> Result<RunningExtremum<I::IntoIter>>
where
    I: IntoIterator,
    I::Item: Comparable + Clone,
{
    let mut source = source.into_iter();
    let best = source.next().ok_or(ScanError::EmptyInput)?;
    Ok(RunningExtremum {
        source,
        direction,
        best,
        emitted_first: false,
    })
}

impl<I> RunningExtremum<I>
where
    I: Iterator,
    I::Item: Comparable + Clone,
{
    /// Best value seen so far.
    pub fn best(&self) -> &I::Item {
        &self.best
    }

    /// Drains the rest of the source and returns the final best value.
    pub fn finish(mut self) -> I::Item {
        while self.next().is_some() {}
        self.best
    }
}

impl<I> Iterator for RunningExtremum<I>
where
    I: Iterator,
    I::Item: Comparable + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.emitted_first {
            self.emitted_first = true;
            return Some(self.best.clone());
        }

        for candidate in self.source.by_ref() {
            if self.direction.prefers(&candidate.key(), &self.best.key()) {
                self.best = candidate;
                return Some(self.best.clone());
            }
        }
        None
    }
}

/// Async counterpart of [`running_extremum`] over any [`Stream`].
///
/// An empty source produces a single `Err(ScanError::EmptyInput)`.
pub fn running_extremum_stream<S>(
    source: S,
    direction: Direction,
) -> impl Stream<Item = Result<S::Item>>
where
    S: Stream,
    S::Item: Comparable + Clone,
{
    async_stream::try_stream! {
        futures::pin_mut!(source);

        let first = source.next().await;
        let mut best = first.ok_or(ScanError::EmptyInput)?;
        yield best.clone();

        while let Some(candidate) = source.next().await {
            if direction.prefers(&candidate.key(), &best.key()) {
                best = candidate;
                yield best.clone();
            }
        }
    }
}
