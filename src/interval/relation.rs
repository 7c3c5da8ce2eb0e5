//! Classification of how one interval sits relative to another.
//!
//! Subtraction dispatches on a [`Relation`] computed once from the four
//! endpoints, so every boundary comparison lives in [`Relation::classify`].

use std::cmp::Ordering;

use super::span::Interval;

/// Position of an `other` interval relative to a `base` interval.
///
/// Variants are listed in the priority order used by [`Relation::classify`]:
/// an exact match is reported as [`Relation::Covered`] even though the base
/// also engulfs it.
///
/// ```text
/// base:                |------------base------------[
/// Covered:           |--------------other-------------[
/// Disjoint:                                         |--other--[
/// SharesStart:         |--other--[
/// SharesEnd:                              |--other--[
/// Interior:                 |--other--[
/// OverlapsStart:  |--other--[
/// OverlapsEnd:                                |--other--[
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `other` equals or engulfs `base`: nothing of `base` survives.
    Covered,
    /// `other` lies entirely before or after `base`; touching counts as disjoint.
    Disjoint,
    /// `base` engulfs `other` and both start together.
    SharesStart,
    /// `base` engulfs `other` and both end together.
    SharesEnd,
    /// `other` lies strictly inside `base`, touching neither boundary.
    Interior,
    /// `other` crosses the start of `base` only.
    OverlapsStart,
    /// `other` crosses the end of `base` only.
    OverlapsEnd,
}

impl Relation {
    /// Classifies `other` against `base`.
    pub fn classify(base: &Interval, other: &Interval) -> Self {
        if other.engulfs(base) {
            return Relation::Covered;
        }
        if other.end() <= base.start() || other.start() >= base.end() {
            return Relation::Disjoint;
        }
        if base.engulfs(other) {
            return match (
                other.start().cmp(&base.start()),
                other.end().cmp(&base.end()),
            ) {
                (Ordering::Equal, _) => Relation::SharesStart,
                (_, Ordering::Equal) => Relation::SharesEnd,
                _ => Relation::Interior,
            };
        }
        if other.start() < base.start() {
            Relation::OverlapsStart
        } else {
            Relation::OverlapsEnd
        }
    }

    /// Number of pieces left after removing `other` from `base`.
    pub const fn remainder_count(self) -> usize {
        match self {
            Relation::Covered => 0,
            Relation::Interior => 2,
            Relation::Disjoint
            | Relation::SharesStart
            | Relation::SharesEnd
            | Relation::OverlapsStart
            | Relation::OverlapsEnd => 1,
        }
    }
}
