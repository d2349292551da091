//! Extremum scan modules.
//!
//! The chunked scanner, its synchronous and streaming siblings, and the
//! small seams they are driven through (cancellation, progress, yielding)
//! all live here. Downstream crates import from `extremal_core::scan::*`.

pub mod blocking;
pub mod cancel;
pub mod chunked;
pub mod comparable;
/// Per-scan tuning and hooks
pub mod options;
pub mod progress;
pub mod running;
pub mod search;
pub mod tracker;
pub mod yield_point;

pub use cancel::CancelSignal;
pub use chunked::{
    MinMax, ScanResult, scan_extremum, scan_extremum_by_key, scan_min_max,
    scan_min_max_by_key,
};
pub use comparable::Comparable;
pub use options::{DEFAULT_CHUNK_SIZE, DEFAULT_YIELD_THRESHOLD, ScanOptions};
pub use progress::{ProgressSink, ScanProgress};
pub use running::{RunningExtremum, running_extremum, running_extremum_stream};
pub use search::{find_extremum, find_extremum_by_key, find_max, find_min};
pub use tracker::Direction;
pub use yield_point::{NoYield, SleepYield, TokioYield, YieldMode, YieldPoint};
