//! # Extremal Core
//!
//! Core library for finding the minimum and maximum of large in-memory
//! sequences without monopolising a cooperative scheduler.
//!
//! ## Overview
//!
//! - **Chunked scanning**: [`scan::scan_extremum`] and [`scan::scan_min_max`]
//!   walk a slice in bounded chunks, reporting progress after each chunk and
//!   polling a cancellation signal at every chunk boundary.
//! - **Injectable scheduling**: yielding between chunks goes through a
//!   [`scan::YieldPoint`], so the same routine runs on tokio, inside a
//!   blocking executor, or fully synchronously in tests.
//! - **Streaming**: [`scan::running_extremum`] and
//!   [`scan::running_extremum_stream`] emit every new "best so far" value from
//!   an iterator or async stream.
//! - **Exercises**: [`exercises`] bundles a few classic small problems
//!   (bracket balance, palindromes, FizzBuzz, factorials, a bisecting
//!   number-guess solver).
//!
//! ## Examples
//!
//! ```no_run
//! use extremal_core::scan::{Direction, ScanOptions, scan_extremum};
//!
//! async fn largest(readings: &[f64]) -> Result<usize, Box<dyn std::error::Error>> {
//!     let result = scan_extremum(readings, Direction::Max, ScanOptions::default()).await?;
//!     println!("max {} at {}", result.value, result.index);
//!     Ok(result.index)
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Error types shared across the crate
pub mod error;

/// Chunked, cancelable extremum scanning
pub mod scan;

/// Classic beginner exercises
pub mod exercises;

pub use error::{ExerciseError, Result, ScanError};
