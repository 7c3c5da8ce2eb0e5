//! Half-open time interval `[start, end)`.

use std::fmt::Display;
use std::ops::Sub;

use chrono::{DateTime, SecondsFormat, TimeDelta, Utc};
use qtty::Quantity;

use super::error::IntervalError;
use super::intervals::Intervals;
use super::relation::Relation;
use crate::units::{to_quantity, TimeUnit};

/// Time span bounded by a start instant that belongs to the interval and an
/// end instant that does not.
///
/// ```text
///   |----------i----------[
/// start                  end
///
/// i.includes(start) == true
/// i.includes(end)   == false
/// ```
///
/// Intervals are ordered by start, then by end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Creates interval `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end`. Use [`Interval::try_new`] to validate
    /// untrusted bounds instead.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        assert!(
            start <= end,
            "Interval start must be <= end (start: {start}, end: {end})"
        );
        Self { start, end }
    }

    /// Creates interval `[start, end)`, rejecting `start > end`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::{TimeDelta, Utc};
    /// use chronospan::{Interval, IntervalError};
    ///
    /// let now = Utc::now();
    /// let later = now + TimeDelta::hours(1);
    /// assert!(Interval::try_new(now, later).is_ok());
    /// assert_eq!(
    ///     Interval::try_new(later, now),
    ///     Err(IntervalError::StartAfterEnd { start: later, end: now })
    /// );
    /// ```
    pub fn try_new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, IntervalError> {
        if start > end {
            return Err(IntervalError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates interval `[start, start + duration)`.
    ///
    /// # Panics
    ///
    /// Panics if `duration` is negative, or if `start + duration` falls
    /// outside the range chrono can represent.
    pub fn with_duration(start: DateTime<Utc>, duration: TimeDelta) -> Self {
        let end = start
            .checked_add_signed(duration)
            .unwrap_or_else(|| {
                panic!("Interval end overflows (start: {start}, duration: {duration})")
            });
        Self::new(start, end)
    }

    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Returns the duration as a quantity of time unit `U`.
    ///
    /// ```rust
    /// use chrono::{TimeDelta, Utc};
    /// use chronospan::Interval;
    /// use qtty::Hour;
    ///
    /// let i = Interval::with_duration(Utc::now(), TimeDelta::minutes(90));
    /// assert!((i.duration_in::<Hour>().value() - 1.5).abs() < 1e-12);
    /// ```
    pub fn duration_in<U: TimeUnit>(&self) -> Quantity<U> {
        to_quantity(self.duration())
    }

    /// Returns true for a zero-length interval, which includes no instant.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `start <= instant < end`.
    ///
    /// ```text
    /// interval:      |------------i------------[
    /// instant:            |
    /// ```
    pub fn includes(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Returns true if `other` lies within this interval, boundaries included.
    /// Every interval engulfs itself.
    ///
    /// ```text
    /// interval:      |------------i------------[
    /// other:              |---other---[
    /// ```
    pub fn engulfs(&self, other: &Interval) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Returns true if the two intervals share at least one instant.
    ///
    /// Sharing opposite boundaries is not enough: `[a, b)` and `[b, c)` do
    /// not overlap. A zero-length interval `[t, t)` does not overlap an
    /// identical one, nor an interval it only touches at a boundary, but it
    /// does overlap any interval with `start < t < end`.
    ///
    /// ```text
    /// interval:      |------------i------------[
    /// other:                         |----other---[
    /// other:    |----other----[
    /// other:             |---other---[
    /// other:      |-------------other-------------[
    /// ```
    pub fn overlaps(&self, other: &Interval) -> bool {
        !(other.end <= self.start || other.start >= self.end)
    }

    /// Returns true if `other` starts where this interval ends, or ends where
    /// it starts.
    ///
    /// ```text
    /// interval:           |----------i----------[
    /// other:                                    |--other--[
    /// other:    |--other--[
    /// ```
    pub fn is_contiguous(&self, other: &Interval) -> bool {
        self.end == other.start || self.start == other.end
    }

    /// Classifies where `other` sits relative to this interval.
    pub fn relation(&self, other: &Interval) -> Relation {
        Relation::classify(self, other)
    }

    /// Removes `other` from this interval, leaving zero, one or two pieces.
    ///
    /// ```text
    /// interval:      |------------i------------[
    /// other:                    |------other------[
    /// output:        |----i'----[
    /// other:                 |--other--[
    /// output:        |--i'---[         |--i"---[
    /// ```
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::{TimeDelta, Utc};
    /// use chronospan::{Interval, Intervals};
    ///
    /// let t = Utc::now();
    /// let day = Interval::new(t, t + TimeDelta::hours(8));
    /// let lunch = Interval::new(t + TimeDelta::hours(4), t + TimeDelta::hours(5));
    ///
    /// let free = day.subtract(&lunch);
    /// assert_eq!(
    ///     free,
    ///     Intervals::from(vec![
    ///         Interval::new(t + TimeDelta::hours(5), t + TimeDelta::hours(8)),
    ///         Interval::new(t, t + TimeDelta::hours(4)),
    ///     ])
    /// );
    /// ```
    pub fn subtract(&self, other: &Interval) -> Intervals {
        let relation = self.relation(other);
        tracing::trace!(base = %self, other = %other, ?relation, "subtracting interval");

        // Every branch keeps start <= end, so pieces skip re-validation.
        let mut pieces = Intervals::with_capacity(relation.remainder_count());
        match relation {
            Relation::Covered => {}
            Relation::Disjoint => pieces.push(*self),
            Relation::SharesStart | Relation::OverlapsStart => {
                pieces.push(Self::unchecked(other.end, self.end));
            }
            Relation::SharesEnd | Relation::OverlapsEnd => {
                pieces.push(Self::unchecked(self.start, other.start));
            }
            Relation::Interior => {
                pieces.push(Self::unchecked(self.start, other.start));
                pieces.push(Self::unchecked(other.end, self.end));
            }
        }
        pieces
    }

    const fn unchecked(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

impl Sub for Interval {
    type Output = Intervals;

    fn sub(self, other: Interval) -> Intervals {
        self.subtract(&other)
    }
}

impl Sub<&Interval> for &Interval {
    type Output = Intervals;

    fn sub(self, other: &Interval) -> Intervals {
        self.subtract(other)
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Interval{{start: {}, end: {}, duration: {}}}",
            self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.end.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.duration()
        )
    }
}
