//! An unordered collection of intervals compared as a multiset.
//!
//! [`Intervals`] wraps a `Vec<Interval>` without imposing any order or
//! disjointness invariant. Equality is canonical: two collections are equal
//! when they hold the same intervals with the same multiplicities, whatever
//! their order. Comparison sorts private copies, so operands are never
//! reordered.

use std::fmt::Display;
use std::ops::{Deref, DerefMut};

use chrono::TimeDelta;

use super::span::Interval;

/// Sequence of intervals; duplicates allowed, order not significant for `==`.
#[derive(Debug, Clone, Default)]
pub struct Intervals(Vec<Interval>);

// ─────────────────────────────────────────────────────────────────────
// Constructors
// ─────────────────────────────────────────────────────────────────────

impl Intervals {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates an empty collection with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }
}

// ─────────────────────────────────────────────────────────────────────
// Mutation and access
// ─────────────────────────────────────────────────────────────────────

impl Intervals {
    pub fn push(&mut self, interval: Interval) {
        self.0.push(interval);
    }

    /// Sorts in place by start, then end.
    pub fn sort(&mut self) {
        self.0.sort_unstable();
    }

    /// Returns a copy sorted by start, then end.
    pub fn sorted(&self) -> Intervals {
        let mut copy = self.clone();
        copy.sort();
        copy
    }

    /// Sum of the durations of all intervals. Overlaps are counted twice.
    pub fn total_duration(&self) -> TimeDelta {
        self.0
            .iter()
            .fold(TimeDelta::zero(), |acc, interval| acc + interval.duration())
    }

    pub fn into_inner(self) -> Vec<Interval> {
        self.0
    }

    pub fn as_slice(&self) -> &[Interval] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Canonical equality
// ─────────────────────────────────────────────────────────────────────

impl Intervals {
    /// Compares two collections regardless of order, respecting duplicates.
    ///
    /// Neither operand is reordered.
    ///
    /// ```rust
    /// use chrono::{TimeDelta, Utc};
    /// use chronospan::{Interval, Intervals};
    ///
    /// let t = Utc::now();
    /// let a = Interval::new(t, t + TimeDelta::hours(1));
    /// let b = Interval::new(t + TimeDelta::hours(2), t + TimeDelta::hours(3));
    ///
    /// let left = Intervals::from(vec![a, b]);
    /// let right = Intervals::from(vec![b, a]);
    /// assert!(left.canonical_eq(&right));
    /// assert_eq!(left[0], a);
    /// assert!(!left.canonical_eq(&Intervals::from(vec![a, b, b])));
    /// ```
    pub fn canonical_eq(&self, other: &Intervals) -> bool {
        if self.len() != other.len() {
            tracing::trace!(
                left = self.len(),
                right = other.len(),
                "interval collections differ in length"
            );
            return false;
        }
        let left = self.sorted();
        let right = other.sorted();
        left.iter().zip(right.iter()).all(|(l, r)| l == r)
    }
}

impl PartialEq for Intervals {
    fn eq(&self, other: &Self) -> bool {
        self.canonical_eq(other)
    }
}

impl Eq for Intervals {}

// ─────────────────────────────────────────────────────────────────────
// Slice access
// ─────────────────────────────────────────────────────────────────────

impl Deref for Intervals {
    type Target = [Interval];

    fn deref(&self) -> &[Interval] {
        &self.0
    }
}

/// No invariant to protect, so slice mutation (`swap`, `shuffle`, ...) is open.
impl DerefMut for Intervals {
    fn deref_mut(&mut self) -> &mut [Interval] {
        &mut self.0
    }
}

impl AsRef<[Interval]> for Intervals {
    fn as_ref(&self) -> &[Interval] {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────
// Conversions
// ─────────────────────────────────────────────────────────────────────

impl From<Vec<Interval>> for Intervals {
    fn from(vec: Vec<Interval>) -> Self {
        Self(vec)
    }
}

impl From<Interval> for Intervals {
    fn from(interval: Interval) -> Self {
        Self(vec![interval])
    }
}

impl FromIterator<Interval> for Intervals {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Interval> for Intervals {
    fn extend<I: IntoIterator<Item = Interval>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Intervals {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Intervals {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Display for Intervals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, interval) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", interval)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use rand::seq::SliceRandom;

    fn t(offset_secs: i64) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap() + TimeDelta::seconds(offset_secs)
    }

    fn iv(start: i64, end: i64) -> Interval {
        Interval::new(t(start), t(end))
    }

    /// Nine intervals around `[0, 3600)`, each endpoint shifted by `-d`, `0` or `+d`.
    fn around(d: i64) -> Intervals {
        let (s, e) = (0, 3600);
        Intervals::from(vec![
            iv(s, e),
            iv(s, e - d),
            iv(s, e + d),
            iv(s - d, e),
            iv(s + d, e),
            iv(s - d, e - d),
            iv(s + d, e + d),
            iv(s - d, e + d),
            iv(s + d, e - d),
        ])
    }

    // ── Construction ──────────────────────────────────────────────────

    #[test]
    fn test_new_is_empty() {
        let set = Intervals::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Intervals::default().is_empty());
    }

    #[test]
    fn test_from_single_interval() {
        let set = Intervals::from(iv(0, 10));
        assert_eq!(set.len(), 1);
        assert_eq!(set[0], iv(0, 10));
    }

    #[test]
    fn test_from_vec_keeps_order_and_duplicates() {
        let set = Intervals::from(vec![iv(20, 30), iv(0, 10), iv(20, 30)]);
        assert_eq!(set.as_slice(), &[iv(20, 30), iv(0, 10), iv(20, 30)]);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut set: Intervals = vec![iv(0, 10)].into_iter().collect();
        set.extend(vec![iv(5, 20)]);
        set.push(iv(30, 40));
        assert_eq!(set.into_inner(), vec![iv(0, 10), iv(5, 20), iv(30, 40)]);
    }

    // ── Ordering ──────────────────────────────────────────────────────

    #[test]
    fn test_sort_by_start_then_end() {
        let mut set = Intervals::from(vec![iv(5, 9), iv(0, 10), iv(0, 4)]);
        set.sort();
        assert_eq!(set.as_slice(), &[iv(0, 4), iv(0, 10), iv(5, 9)]);
    }

    #[test]
    fn test_sorted_leaves_receiver_untouched() {
        let set = Intervals::from(vec![iv(5, 9), iv(0, 10)]);
        let sorted = set.sorted();
        assert_eq!(set[0], iv(5, 9));
        assert_eq!(sorted[0], iv(0, 10));
    }

    #[test]
    fn test_swap_through_slice() {
        let mut set = Intervals::from(vec![iv(0, 1), iv(2, 3)]);
        set.swap(0, 1);
        assert_eq!(set[0], iv(2, 3));
    }

    // ── Canonical equality ────────────────────────────────────────────

    #[test]
    fn test_equal_to_identical_collection() {
        assert_eq!(around(1), around(1));
    }

    #[test]
    fn test_equal_after_any_shuffle() {
        let reference = around(1);
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let mut shuffled = around(1);
            shuffled.shuffle(&mut rng);
            assert_eq!(reference, shuffled, "{} != {}", reference, shuffled);
        }
    }

    #[test]
    fn test_not_equal_when_shifted_differently() {
        let reference = around(1);
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let mut other = around(60);
            other.shuffle(&mut rng);
            assert_ne!(reference, other);
        }
    }

    #[test]
    fn test_not_equal_on_length_mismatch() {
        let subset: Intervals = around(1).iter().take(3).copied().collect();
        assert_ne!(around(1), subset);
        assert!(!subset.canonical_eq(&around(1)));
    }

    #[test]
    fn test_multiplicity_matters() {
        let a = Intervals::from(vec![iv(0, 10), iv(0, 10), iv(20, 30)]);
        let b = Intervals::from(vec![iv(0, 10), iv(20, 30), iv(20, 30)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_empty_collections_are_equal() {
        assert_eq!(Intervals::new(), Intervals::default());
    }

    #[test]
    fn test_comparison_does_not_reorder_operands() {
        let left = Intervals::from(vec![iv(20, 30), iv(0, 10)]);
        let right = Intervals::from(vec![iv(0, 10), iv(20, 30)]);
        assert!(left.canonical_eq(&right));
        assert_eq!(left.as_slice(), &[iv(20, 30), iv(0, 10)]);
        assert_eq!(right.as_slice(), &[iv(0, 10), iv(20, 30)]);
    }

    // ── Aggregates ────────────────────────────────────────────────────

    #[test]
    fn test_total_duration_sums_members() {
        let set = Intervals::from(vec![iv(0, 10), iv(5, 20), iv(30, 30)]);
        assert_eq!(set.total_duration(), TimeDelta::seconds(25));
        assert_eq!(Intervals::new().total_duration(), TimeDelta::zero());
    }

    // ── Display ───────────────────────────────────────────────────────

    #[test]
    fn test_display_format() {
        let set = Intervals::from(vec![iv(0, 3600), iv(7200, 7260)]);
        assert_eq!(
            set.to_string(),
            "[Interval{start: 2024-03-01T08:00:00Z, end: 2024-03-01T09:00:00Z, duration: PT3600S}, \
             Interval{start: 2024-03-01T10:00:00Z, end: 2024-03-01T10:01:00Z, duration: PT60S}]"
        );
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Intervals::new().to_string(), "[]");
    }

    // ── Iteration ─────────────────────────────────────────────────────

    #[test]
    fn test_into_iter_owned_and_borrowed() {
        let set = Intervals::from(vec![iv(0, 10), iv(20, 30)]);
        assert_eq!((&set).into_iter().count(), 2);
        let collected: Vec<_> = set.into_iter().collect();
        assert_eq!(collected.len(), 2);
    }
}
