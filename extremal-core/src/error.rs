use thiserror::Error;

/// Failures raised by the extremum scanners.
///
/// Both variants are terminal for the call that produced them; callers that
/// want a retry re-invoke the scan with a fresh cancellation signal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The input held no elements, so there is no extremum to report.
    #[error("cannot find min/max of an empty sequence")]
    EmptyInput,

    /// A cancellation request was observed at a chunk boundary.
    #[error("scan aborted after {processed} elements")]
    Aborted {
        /// Elements fully examined before the abort took effect.
        processed: usize,
    },
}

impl ScanError {
    /// Whether the scan stopped because of a cancellation request.
    pub fn is_aborted(&self) -> bool {
        matches!(self, ScanError::Aborted { .. })
    }
}

/// Result type for the scanners.
pub type Result<T> = std::result::Result<T, ScanError>;

/// Failures raised by the [`crate::exercises`] helpers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExerciseError {
    /// A closing bracket that does not match the innermost open one.
    #[error("unexpected '{found}' at byte {offset}")]
    UnexpectedCloser {
        /// Byte offset of the closer.
        offset: usize,
        /// The offending closer.
        found: char,
        /// Closer that would have matched the innermost open bracket.
        expected: Option<char>,
    },

    /// Input ended with an opener still on the stack.
    #[error("'{opener}' at byte {offset} is never closed")]
    Unclosed {
        /// Byte offset of the opener.
        offset: usize,
        /// The unmatched opener.
        opener: char,
    },

    /// `low` is greater than `high`.
    #[error("empty range: {low} > {high}")]
    EmptyRange {
        /// Requested lower bound.
        low: i64,
        /// Requested upper bound.
        high: i64,
    },

    /// The secret does not lie inside the guessing range.
    #[error("secret {secret} lies outside {low}..={high}")]
    SecretOutOfRange {
        /// Rejected secret.
        secret: i64,
        /// Inclusive lower bound.
        low: i64,
        /// Inclusive upper bound.
        high: i64,
    },
}
