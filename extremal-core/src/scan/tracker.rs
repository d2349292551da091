//! Running-best bookkeeping shared by every scan flavour.
//!
//! The chunked, synchronous and streaming scanners all reduce to "offer each
//! element to a tracker". Direction only changes the comparison, so the
//! trackers are generic over it instead of duplicating the loop bodies.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which extremum a scan is looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Smallest key wins.
    Min,
    /// Largest key wins.
    Max,
}

impl Direction {
    /// Returns `true` when `candidate` should replace `incumbent`.
    ///
    /// Comparisons are strict, so on ties the earlier element is kept.
    #[inline]
    pub fn prefers<K: PartialOrd + ?Sized>(self, candidate: &K, incumbent: &K) -> bool {
        match self {
            Direction::Min => candidate < incumbent,
            Direction::Max => candidate > incumbent,
        }
    }

    /// Lowercase name, as used in logs and JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Min => "min",
            Direction::Max => "max",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current best element, its index and its cached key.
#[derive(Debug)]
pub(crate) struct Best<'a, T: ?Sized, K> {
    pub value: &'a T,
    pub index: usize,
    pub key: K,
}

impl<'a, T: ?Sized, K: PartialOrd> Best<'a, T, K> {
    pub fn new(value: &'a T, index: usize, key: K) -> Self {
        Self { value, index, key }
    }

    /// Replaces the incumbent when `direction` strictly prefers `key`.
    #[inline]
    pub fn offer(&mut self, direction: Direction, index: usize, value: &'a T, key: K) -> bool {
        if direction.prefers(&key, &self.key) {
            *self = Best { value, index, key };
            true
        } else {
            false
        }
    }
}

/// Strategy fed one element at a time by the scan loops.
pub(crate) trait Tracker<'a, T: ?Sized, K> {
    fn observe(&mut self, index: usize, value: &'a T, key: K);
}

/// Tracks a single direction.
#[derive(Debug)]
pub(crate) struct SingleTracker<'a, T: ?Sized, K> {
    pub direction: Direction,
    pub best: Best<'a, T, K>,
}

impl<'a, T: ?Sized, K: PartialOrd> SingleTracker<'a, T, K> {
    pub fn seeded(direction: Direction, first: &'a T, key: K) -> Self {
        Self {
            direction,
            best: Best::new(first, 0, key),
        }
    }
}

impl<'a, T: ?Sized, K: PartialOrd> Tracker<'a, T, K> for SingleTracker<'a, T, K> {
    #[inline]
    fn observe(&mut self, index: usize, value: &'a T, key: K) {
        self.best.offer(self.direction, index, value, key);
    }
}

/// Tracks both directions from one key projection per element.
#[derive(Debug)]
pub(crate) struct MinMaxTracker<'a, T: ?Sized, K> {
    pub min: Best<'a, T, K>,
    pub max: Best<'a, T, K>,
}

impl<'a, T: ?Sized, K: PartialOrd + Clone> MinMaxTracker<'a, T, K> {
    pub fn seeded(first: &'a T, key: K) -> Self {
        Self {
            min: Best::new(first, 0, key.clone()),
            max: Best::new(first, 0, key),
        }
    }
}

impl<'a, T: ?Sized, K: PartialOrd + Clone> Tracker<'a, T, K> for MinMaxTracker<'a, T, K> {
    #[inline]
    fn observe(&mut self, index: usize, value: &'a T, key: K) {
        if Direction::Min.prefers(&key, &self.min.key) {
            self.min = Best::new(value, index, key.clone());
        }
        if Direction::Max.prefers(&key, &self.max.key) {
            self.max = Best::new(value, index, key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_is_strict() {
        assert!(Direction::Max.prefers(&3, &2));
        assert!(!Direction::Max.prefers(&2, &2));
        assert!(Direction::Min.prefers(&1, &2));
        assert!(!Direction::Min.prefers(&2, &2));
    }

    #[test]
    fn nan_never_displaces() {
        assert!(!Direction::Max.prefers(&f64::NAN, &1.0));
        assert!(!Direction::Min.prefers(&f64::NAN, &1.0));
    }

    #[test]
    fn min_max_tracker_keeps_first_occurrence() {
        let values = [3, 1, 4, 1, 5, 9, 2, 9];
        let mut tracker = MinMaxTracker::seeded(&values[0], values[0]);
        for (index, value) in values.iter().enumerate().skip(1) {
            tracker.observe(index, value, *value);
        }
        assert_eq!(tracker.min.index, 1);
        assert_eq!(tracker.max.index, 5);
    }

    #[test]
    fn direction_serializes_lowercase() {
        let json = serde_json::to_string(&Direction::Max).unwrap();
        assert_eq!(json, "\"max\"");
        assert_eq!(Direction::Min.to_string(), "min");
    }
}
