//! Single-pass synchronous search for small inputs.
//!
//! No chunking, progress or cancellation: these helpers simply walk the
//! slice once with the same tie-breaking as the chunked scanner.

use super::{
    comparable::Comparable,
    tracker::{Direction, SingleTracker, Tracker},
};
use crate::error::{Result, ScanError};

/// Returns the first element with the extremal key for `direction`.
pub fn find_extremum<T: Comparable>(items: &[T], direction: Direction) -> Result<&T> {
    find_extremum_by_key(items, direction, |item| item.key())
}

/// [`find_extremum`] with an explicit key projection.
pub fn find_extremum_by_key<'a, T, K, F>(
    items: &'a [T],
    direction: Direction,
    key: F,
) -> Result<&'a T>
where
    F: Fn(&'a T) -> K,
    K: PartialOrd,
{
    let (first, rest) = items.split_first().ok_or(ScanError::EmptyInput)?;
    let mut tracker = SingleTracker::seeded(direction, first, key(first));
    for (offset, item) in rest.iter().enumerate() {
        tracker.observe(offset + 1, item, key(item));
    }
    Ok(tracker.best.value)
}

/// First largest element.
pub fn find_max<T: Comparable>(items: &[T]) -> Result<&T> {
    find_extremum(items, Direction::Max)
}

/// First smallest element.
pub fn find_min<T: Comparable>(items: &[T]) -> Result<&T> {
    find_extremum(items, Direction::Min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert_eq!(find_max(&[1, 4, 233, 2, 34]), Ok(&233));
        assert_eq!(find_min(&[1, 4, 233, -1, 34]), Ok(&-1));
    }

    #[test]
    fn strings() {
        let fruits = ["apple", "banana", "cherry"];
        assert_eq!(find_max(&fruits), Ok(&"cherry"));
        assert_eq!(find_min(&fruits), Ok(&"apple"));
    }

    #[test]
    fn empty_slice_is_rejected() {
        let empty: &[u8] = &[];
        assert_eq!(find_max(empty), Err(ScanError::EmptyInput));
        assert_eq!(find_min(empty), Err(ScanError::EmptyInput));
    }

    #[test]
    fn ties_return_first_occurrence() {
        let pairs = [(1, 'a'), (3, 'b'), (3, 'c'), (0, 'd')];
        let best = find_extremum_by_key(&pairs, Direction::Max, |p| p.0).unwrap();
        assert_eq!(best.1, 'b');
    }
}
