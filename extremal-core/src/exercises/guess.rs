//! Number-guessing oracle and a bisecting solver for it.
//!
//! The oracle only answers "higher", "lower" or "correct"; reading guesses
//! from a terminal is left to the caller.

use std::{cmp::Ordering, fmt};

use rand::Rng;
use serde::Serialize;
use tracing::trace;

use crate::error::ExerciseError;

/// Answer to a single guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Hint {
    /// The secret is above the guess.
    Higher,
    /// The secret is below the guess.
    Lower,
    /// The guess was the secret.
    Correct,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hint::Higher => f.write_str("Higher number please!"),
            Hint::Lower => f.write_str("Lower number please!"),
            Hint::Correct => f.write_str("Congrats!!"),
        }
    }
}

/// Oracle holding a secret in an inclusive range and counting guesses.
#[derive(Clone, Debug)]
pub struct GuessGame {
    low: i64,
    high: i64,
    secret: i64,
    guesses: u32,
}

impl GuessGame {
    /// Fails when the range is empty or does not contain `secret`.
    pub fn new(low: i64, high: i64, secret: i64) -> Result<Self, ExerciseError> {
        if low > high {
            return Err(ExerciseError::EmptyRange { low, high });
        }
        if !(low..=high).contains(&secret) {
            return Err(ExerciseError::SecretOutOfRange { secret, low, high });
        }
        Ok(Self {
            low,
            high,
            secret,
            guesses: 0,
        })
    }

    /// Draws the secret uniformly from `low..=high`.
    pub fn random(low: i64, high: i64) -> Result<Self, ExerciseError> {
        if low > high {
            return Err(ExerciseError::EmptyRange { low, high });
        }
        let secret = rand::rng().random_range(low..=high);
        Self::new(low, high, secret)
    }

    /// Inclusive bounds the secret was drawn from.
    pub fn range(&self) -> (i64, i64) {
        (self.low, self.high)
    }

    /// Guesses made so far.
    pub fn guesses(&self) -> u32 {
        self.guesses
    }

    /// Every call counts as a guess, including out-of-range ones.
    pub fn guess(&mut self, value: i64) -> Hint {
        self.guesses += 1;
        match value.cmp(&self.secret) {
            Ordering::Greater => Hint::Lower,
            Ordering::Less => Hint::Higher,
            Ordering::Equal => Hint::Correct,
        }
    }
}

/// Solves `game` by halving the candidate range after every hint.
///
/// Returns the guesses in the order they were made; the last one is always
/// the secret. Needs at most `ceil(log2(high - low + 2))` guesses.
pub fn bisect(game: &mut GuessGame) -> Vec<i64> {
    let (mut low, mut high) = game.range();
    let mut trail = Vec::new();

    while low <= high {
        // Widen so ranges spanning most of i64 cannot overflow.
        let mid = ((i128::from(low) + i128::from(high)) / 2) as i64;
        trail.push(mid);
        let hint = game.guess(mid);
        trace!(guess = mid, ?hint, "bisect step");
        match hint {
            Hint::Correct => break,
            Hint::Higher => low = mid + 1,
            Hint::Lower => high = mid - 1,
        }
    }

    trail
}
