use std::fmt;

use serde::Serialize;

/// One FizzBuzz entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum FizzBuzz {
    /// Divisible by 3 only.
    Fizz,
    /// Divisible by 5 only.
    Buzz,
    /// Divisible by 15.
    FizzBuzz,
    /// Neither; printed as-is.
    Number(u64),
}

impl FizzBuzz {
    /// Classifies a single number.
    pub fn classify(n: u64) -> Self {
        match (n % 3, n % 5) {
            (0, 0) => FizzBuzz::FizzBuzz,
            (0, _) => FizzBuzz::Fizz,
            (_, 0) => FizzBuzz::Buzz,
            _ => FizzBuzz::Number(n),
        }
    }
}

impl fmt::Display for FizzBuzz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FizzBuzz::Fizz => f.write_str("Fizz"),
            FizzBuzz::Buzz => f.write_str("Buzz"),
            FizzBuzz::FizzBuzz => f.write_str("FizzBuzz"),
            FizzBuzz::Number(n) => write!(f, "{n}"),
        }
    }
}

/// FizzBuzz sequence for `1..=upto`.
pub fn fizzbuzz(upto: u64) -> impl Iterator<Item = FizzBuzz> {
    (1..=upto).map(FizzBuzz::classify)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_fifteen() {
        let rendered: Vec<String> = fizzbuzz(15).map(|v| v.to_string()).collect();
        assert_eq!(
            rendered,
            [
                "1", "2", "Fizz", "4", "Buzz", "Fizz", "7", "8", "Fizz", "Buzz", "11", "Fizz",
                "13", "14", "FizzBuzz"
            ]
        );
    }

    #[test]
    fn zero_length_sequence() {
        assert_eq!(fizzbuzz(0).count(), 0);
    }
}
