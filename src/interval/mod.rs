//! Half-open time intervals and their algebra.
//!
//! An [`Interval`] is a span `[start, end)` between two UTC instants. It
//! supports membership, containment, overlap and adjacency tests, and
//! subtraction into an [`Intervals`] collection.

mod error;
mod intervals;
mod relation;
mod span;


pub use error::IntervalError;
pub use intervals::Intervals;
pub use relation::Relation;
pub use span::Interval;
