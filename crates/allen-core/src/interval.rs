//! The `Interval<T>` value type -- a closed range over an ordered domain.
//!
//! Bounds are normalized at construction: whichever argument is smaller
//! becomes the lesser bound, so `lesser <= greater` holds for every value of
//! the type and construction never fails. An interval with equal bounds is
//! *empty*: a single point with zero extent. Empty intervals are legal
//! inputs everywhere; see [`relate`](crate::relation::relate) for how they
//! classify at boundaries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::relation::{relate, Relation};

/// A closed interval `[lesser, greater]` over an ordered domain `T`.
///
/// Immutable once built. Freely copyable/shareable when `T` is; it carries
/// no state beyond the two bounds.
///
/// The derived `PartialOrd`/`Ord` is the lexicographic order on the
/// normalized `(lesser, greater)` pair. It exists so intervals can live in
/// sorted collections; it says nothing about the 13 qualitative relations,
/// which [`relate`] computes.
///
/// Serialized as a `(lesser, greater)` pair; deserializing runs the input
/// back through [`Interval::new`], so the normalization invariant survives
/// the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "(T, T)", into = "(T, T)")]
#[serde(bound(serialize = "T: Serialize + Clone", deserialize = "T: Deserialize<'de> + Ord"))]
pub struct Interval<T> {
    lesser: T,
    greater: T,
}

impl<T: Ord> Interval<T> {
    /// Builds the interval spanning `a` and `b`, in whichever order they
    /// arrive.
    ///
    /// Total for any `Ord` domain: equal arguments produce a valid empty
    /// interval rather than an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use allen_core::Interval;
    ///
    /// let iv = Interval::new(7, 3);
    /// assert_eq!(*iv.lesser(), 3);
    /// assert_eq!(*iv.greater(), 7);
    /// ```
    pub fn new(a: T, b: T) -> Self {
        if a <= b {
            Self {
                lesser: a,
                greater: b,
            }
        } else {
            Self {
                lesser: b,
                greater: a,
            }
        }
    }

    /// The interval covering exactly one value: `[value, value]`.
    ///
    /// Point intervals are [empty](Interval::is_empty).
    pub fn point(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            lesser: value.clone(),
            greater: value,
        }
    }

    /// The lesser bound.
    pub fn lesser(&self) -> &T {
        &self.lesser
    }

    /// The greater bound.
    pub fn greater(&self) -> &T {
        &self.greater
    }

    /// Consumes the interval, returning `(lesser, greater)`.
    ///
    /// This is the inverse of [`Interval::new`] up to normalization:
    /// `Interval::new(a, b).into_pair()` is `(min(a, b), max(a, b))`, not
    /// necessarily `(a, b)`.
    pub fn into_pair(self) -> (T, T) {
        (self.lesser, self.greater)
    }

    /// `true` when the bounds coincide -- a single point with zero extent.
    pub fn is_empty(&self) -> bool {
        self.lesser == self.greater
    }

    /// `true` when the bounds differ.
    pub fn is_non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// `self` ends strictly before `other` begins, with a gap between.
    ///
    /// ```rust
    /// use allen_core::Interval;
    ///
    /// assert!(Interval::new(1, 2).is_before(&Interval::new(3, 7)));
    /// ```
    pub fn is_before(&self, other: &Self) -> bool {
        relate(self, other) == Relation::Before
    }

    /// `self` ends exactly where `other` begins.
    pub fn meets(&self, other: &Self) -> bool {
        relate(self, other) == Relation::Meets
    }

    /// `self` starts first and the two intervals overlap without either
    /// containing the other.
    pub fn overlaps(&self, other: &Self) -> bool {
        relate(self, other) == Relation::Overlaps
    }

    /// `self` starts before `other` and they end together.
    pub fn is_finished_by(&self, other: &Self) -> bool {
        relate(self, other) == Relation::FinishedBy
    }

    /// `other` lies strictly inside `self`.
    pub fn contains(&self, other: &Self) -> bool {
        relate(self, other) == Relation::Contains
    }

    /// The two intervals start together and `self` ends first.
    pub fn starts(&self, other: &Self) -> bool {
        relate(self, other) == Relation::Starts
    }

    /// Both bounds coincide.
    pub fn is_equal_to(&self, other: &Self) -> bool {
        relate(self, other) == Relation::Equal
    }

    /// The two intervals start together and `self` ends last.
    pub fn is_started_by(&self, other: &Self) -> bool {
        relate(self, other) == Relation::StartedBy
    }

    /// `self` lies strictly inside `other`. The converse of
    /// [`contains`](Interval::contains).
    pub fn is_during(&self, other: &Self) -> bool {
        relate(self, other) == Relation::During
    }

    /// `self` starts after `other` and they end together.
    pub fn finishes(&self, other: &Self) -> bool {
        relate(self, other) == Relation::Finishes
    }

    /// `other` starts first and the two intervals overlap without either
    /// containing the other.
    pub fn is_overlapped_by(&self, other: &Self) -> bool {
        relate(self, other) == Relation::OverlappedBy
    }

    /// `other` ends exactly where `self` begins.
    pub fn is_met_by(&self, other: &Self) -> bool {
        relate(self, other) == Relation::MetBy
    }

    /// `self` begins strictly after `other` ends, with a gap between.
    pub fn is_after(&self, other: &Self) -> bool {
        relate(self, other) == Relation::After
    }
}

impl<T: Ord> From<(T, T)> for Interval<T> {
    /// Normalizing conversion; equivalent to [`Interval::new`].
    fn from((a, b): (T, T)) -> Self {
        Self::new(a, b)
    }
}

impl<T> From<Interval<T>> for (T, T) {
    fn from(interval: Interval<T>) -> Self {
        (interval.lesser, interval.greater)
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lesser, self.greater)
    }
}
