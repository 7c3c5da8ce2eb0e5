//! chronospan - half-open time interval algebra
//!
//! Value types for spans `[start, end)` over UTC instants, with membership,
//! containment, overlap, adjacency and subtraction, plus an interval
//! collection compared as a multiset.

pub mod interval;
pub mod units;

pub use interval::{Interval, IntervalError, Intervals, Relation};
pub use units::{to_quantity, TimeUnit};

/// Instant type bounding every interval.
pub type Instant = chrono::DateTime<chrono::Utc>;
