//! Relation classification -- which of Allen's 13 relations holds between
//! two intervals.
//!
//! [`relate`] compares the four endpoint pairs of two intervals and resolves
//! the resulting `Ordering` quadruple against a fixed decision table. The
//! table is total: every pair of intervals lands in exactly one relation,
//! and [`Relation::inverse`] maps each relation to the one that holds with
//! the arguments swapped.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseRelationError;
use crate::interval::Interval;

/// One of the 13 qualitative relations between two intervals `x` and `y`.
///
/// The variants are mutually exclusive and exhaustive: [`relate`] produces
/// exactly one of them for any pair. Asymmetric variants come in inverse
/// pairs (Before/After, Meets/MetBy, Overlaps/OverlappedBy, Starts/StartedBy,
/// Finishes/FinishedBy, Contains/During); `Equal` is its own inverse.
///
/// The variant docs below illustrate each relation against the reference
/// interval `[3, 7]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Relation {
    /// `x` ends strictly before `y` begins, with a gap: `[1,2]` vs `[3,7]`.
    Before,
    /// `x` ends exactly where `y` begins: `[2,3]` vs `[3,7]`.
    Meets,
    /// `x` starts first and the two overlap, neither containing the other:
    /// `[2,4]` vs `[3,7]`.
    Overlaps,
    /// `x` starts first and they end together: `[2,7]` vs `[3,7]`.
    FinishedBy,
    /// `y` lies strictly inside `x`: `[2,8]` vs `[3,7]`.
    Contains,
    /// They start together and `x` ends first: `[3,4]` vs `[3,7]`.
    Starts,
    /// Both bounds coincide: `[3,7]` vs `[3,7]`.
    Equal,
    /// They start together and `x` ends last: `[3,8]` vs `[3,7]`.
    StartedBy,
    /// `x` lies strictly inside `y`: `[4,6]` vs `[3,7]`.
    During,
    /// `x` starts after `y` and they end together: `[6,7]` vs `[3,7]`.
    Finishes,
    /// `y` starts first and the two overlap, neither containing the other:
    /// `[6,8]` vs `[3,7]`.
    OverlappedBy,
    /// `y` ends exactly where `x` begins: `[7,8]` vs `[3,7]`.
    MetBy,
    /// `x` begins strictly after `y` ends, with a gap: `[8,9]` vs `[3,7]`.
    After,
}

impl Relation {
    /// All 13 relations, in declaration order.
    pub const ALL: [Relation; 13] = [
        Relation::Before,
        Relation::Meets,
        Relation::Overlaps,
        Relation::FinishedBy,
        Relation::Contains,
        Relation::Starts,
        Relation::Equal,
        Relation::StartedBy,
        Relation::During,
        Relation::Finishes,
        Relation::OverlappedBy,
        Relation::MetBy,
        Relation::After,
    ];

    /// The relation seen from the other interval's side: if `r` holds
    /// between `x` and `y`, then `r.inverse()` holds between `y` and `x`.
    ///
    /// Inversion is an involution: `r.inverse().inverse() == r`.
    ///
    /// ```rust
    /// use allen_core::Relation;
    ///
    /// assert_eq!(Relation::Meets.inverse(), Relation::MetBy);
    /// assert_eq!(Relation::Finishes.inverse(), Relation::FinishedBy);
    /// assert_eq!(Relation::Equal.inverse(), Relation::Equal);
    /// ```
    #[must_use]
    pub const fn inverse(self) -> Relation {
        match self {
            Relation::Before => Relation::After,
            Relation::Meets => Relation::MetBy,
            Relation::Overlaps => Relation::OverlappedBy,
            Relation::FinishedBy => Relation::Finishes,
            Relation::Contains => Relation::During,
            Relation::Starts => Relation::StartedBy,
            Relation::Equal => Relation::Equal,
            Relation::StartedBy => Relation::Starts,
            Relation::During => Relation::Contains,
            Relation::Finishes => Relation::FinishedBy,
            Relation::OverlappedBy => Relation::Overlaps,
            Relation::MetBy => Relation::Meets,
            Relation::After => Relation::Before,
        }
    }

    /// The stable lower-snake name used by `Display` and `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Relation::Before => "before",
            Relation::Meets => "meets",
            Relation::Overlaps => "overlaps",
            Relation::FinishedBy => "finished_by",
            Relation::Contains => "contains",
            Relation::Starts => "starts",
            Relation::Equal => "equal",
            Relation::StartedBy => "started_by",
            Relation::During => "during",
            Relation::Finishes => "finishes",
            Relation::OverlappedBy => "overlapped_by",
            Relation::MetBy => "met_by",
            Relation::After => "after",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Relation {
    type Err = ParseRelationError;

    /// Parses the names produced by `Display` (`"before"`, `"met_by"`, ...).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Relation::ALL
            .into_iter()
            .find(|relation| relation.name() == s)
            .ok_or_else(|| ParseRelationError(s.to_string()))
    }
}

/// Classifies how `x` relates to `y`.
///
/// Computes the four endpoint comparisons
///
/// ```text
/// ll = x.lesser  cmp y.lesser
/// lg = x.lesser  cmp y.greater
/// gl = x.greater cmp y.lesser
/// gg = x.greater cmp y.greater
/// ```
///
/// and resolves the quadruple against a fixed decision table with
/// first-match semantics. Total and deterministic for any `Ord` domain;
/// O(1), no arithmetic on `T`.
///
/// # Empty intervals
///
/// Single-point intervals classify by the same table, and the arm order
/// decides the boundary cases. A point sitting on the lesser bound of a
/// non-empty interval *overlaps* it (not "starts", not "meets"): the point's
/// greater bound equals the other interval's lesser bound, and that row of
/// the table wins first. Symmetrically, a point on the greater bound is
/// *overlapped by* the interval. This may be surprising but is part of the
/// contract; callers rely on it.
///
/// ```rust
/// use allen_core::{relate, Interval, Relation};
///
/// let window = Interval::new(3, 7);
/// assert_eq!(relate(&Interval::point(3), &window), Relation::Overlaps);
/// assert_eq!(relate(&Interval::point(7), &window), Relation::OverlappedBy);
/// ```
pub fn relate<T: Ord>(x: &Interval<T>, y: &Interval<T>) -> Relation {
    use std::cmp::Ordering::{Equal, Greater, Less};

    let ll = x.lesser().cmp(y.lesser());
    let lg = x.lesser().cmp(y.greater());
    let gl = x.greater().cmp(y.lesser());
    let gg = x.greater().cmp(y.greater());

    // Arm order is load-bearing. The rows are not disjoint, and the empty
    // interval policy documented above depends on the earlier rows winning.
    // Do not reorder or "simplify" this table.
    match (ll, lg, gl, gg) {
        (Equal, _, _, Equal) => Relation::Equal,
        (_, _, Less, _) => Relation::Before,
        (Less, _, Equal, Less) => Relation::Meets,
        (_, _, Equal, _) => Relation::Overlaps,
        (Greater, Equal, _, Greater) => Relation::MetBy,
        (_, Equal, _, _) => Relation::OverlappedBy,
        (_, Greater, _, _) => Relation::After,
        (Less, _, _, Less) => Relation::Overlaps,
        (Less, _, _, Equal) => Relation::FinishedBy,
        (Less, _, _, Greater) => Relation::Contains,
        (Equal, _, _, Less) => Relation::Starts,
        (Equal, _, _, Greater) => Relation::StartedBy,
        (Greater, _, _, Less) => Relation::During,
        (Greater, _, _, Equal) => Relation::Finishes,
        (Greater, _, _, Greater) => Relation::OverlappedBy,
    }
}
