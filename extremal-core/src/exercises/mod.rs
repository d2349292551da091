//! Small classic exercises.
//!
//! Each module is self-contained; none of them share state with the
//! scanners beyond the crate's error type.

pub mod brackets;
/// Arbitrary-precision and checked factorials
pub mod factorial;
/// FizzBuzz classification and sequence
pub mod fizzbuzz;
pub mod guess;
/// Normalised and exact palindrome checks
pub mod palindrome;
/// Character-wise string reversal
pub mod reverse;

pub use brackets::{check_brackets, is_balanced};
pub use factorial::{checked_factorial, factorial, factorial_recursive};
pub use fizzbuzz::{FizzBuzz, fizzbuzz};
pub use guess::{GuessGame, Hint, bisect};
pub use palindrome::{is_exact_palindrome, is_palindrome};
pub use reverse::reverse_string;
