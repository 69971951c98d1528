//! Tests for relation classification, inversion, and the relation names.
//!
//! The classification cases all run against the reference interval `[3, 7]`,
//! one case per relation, plus the four single-point boundary cases whose
//! outcomes are fixed by the decision table's row order.

use allen_core::{relate, Interval, Relation};

/// The reference interval every classification case compares against.
fn reference() -> Interval<i32> {
    Interval::new(3, 7)
}

#[test]
fn one_case_per_relation_against_reference() {
    // (x, expected relation of x to [3,7])
    let cases = [
        ((1, 2), Relation::Before),
        ((2, 3), Relation::Meets),
        ((2, 4), Relation::Overlaps),
        ((2, 7), Relation::FinishedBy),
        ((2, 8), Relation::Contains),
        ((3, 4), Relation::Starts),
        ((3, 7), Relation::Equal),
        ((3, 8), Relation::StartedBy),
        ((4, 6), Relation::During),
        ((6, 7), Relation::Finishes),
        ((6, 8), Relation::OverlappedBy),
        ((7, 8), Relation::MetBy),
        ((8, 9), Relation::After),
    ];

    for ((a, b), expected) in cases {
        let x = Interval::new(a, b);
        assert_eq!(
            relate(&x, &reference()),
            expected,
            "[{a},{b}] vs [3,7] should be {expected}"
        );
    }
}

#[test]
fn every_relation_is_reachable() {
    // The table above covers each variant exactly once.
    let cases = [
        (1, 2),
        (2, 3),
        (2, 4),
        (2, 7),
        (2, 8),
        (3, 4),
        (3, 7),
        (3, 8),
        (4, 6),
        (6, 7),
        (6, 8),
        (7, 8),
        (8, 9),
    ];
    let seen: std::collections::HashSet<Relation> = cases
        .into_iter()
        .map(|(a, b)| relate(&Interval::new(a, b), &reference()))
        .collect();
    assert_eq!(seen.len(), 13, "the 13 cases should hit 13 distinct relations");
}

#[test]
fn point_on_lesser_bound_overlaps() {
    // A zero-extent interval sitting on the lesser bound is Overlaps,
    // not Starts or Meets. The decision table's row order fixes this.
    assert_eq!(
        relate(&Interval::point(3), &reference()),
        Relation::Overlaps
    );
}

#[test]
fn point_on_greater_bound_is_overlapped_by() {
    assert_eq!(
        relate(&Interval::point(7), &reference()),
        Relation::OverlappedBy
    );
}

#[test]
fn interval_against_point_on_its_lesser_bound() {
    // Swapped direction of point_on_lesser_bound_overlaps.
    assert_eq!(
        relate(&reference(), &Interval::point(3)),
        Relation::OverlappedBy
    );
}

#[test]
fn interval_against_point_on_its_greater_bound() {
    assert_eq!(
        relate(&reference(), &Interval::point(7)),
        Relation::Overlaps
    );
}

#[test]
fn equal_empty_intervals_are_equal() {
    assert_eq!(
        relate(&Interval::point(5), &Interval::point(5)),
        Relation::Equal
    );
}

#[test]
fn distinct_empty_intervals_are_before_and_after() {
    let p3 = Interval::point(3);
    let p7 = Interval::point(7);
    assert_eq!(relate(&p3, &p7), Relation::Before);
    assert_eq!(relate(&p7, &p3), Relation::After);
}

#[test]
fn inversion_pairs() {
    use Relation::*;
    let pairs = [
        (Before, After),
        (Meets, MetBy),
        (Overlaps, OverlappedBy),
        (FinishedBy, Finishes),
        (Contains, During),
        (Starts, StartedBy),
        (Equal, Equal),
    ];
    for (relation, inverse) in pairs {
        assert_eq!(relation.inverse(), inverse, "{relation} should invert to {inverse}");
        assert_eq!(inverse.inverse(), relation, "{inverse} should invert to {relation}");
    }
}

#[test]
fn inversion_is_an_involution() {
    for relation in Relation::ALL {
        assert_eq!(relation.inverse().inverse(), relation);
    }
}

#[test]
fn all_lists_each_variant_once() {
    let seen: std::collections::HashSet<Relation> = Relation::ALL.into_iter().collect();
    assert_eq!(seen.len(), 13);
}

#[test]
fn display_and_fromstr_agree() {
    for relation in Relation::ALL {
        let name = relation.to_string();
        let parsed: Relation = name.parse().expect("display name should parse");
        assert_eq!(parsed, relation, "{name} should parse back to {relation:?}");
    }
}

#[test]
fn fromstr_rejects_unknown_names() {
    let err = "sideways".parse::<Relation>().unwrap_err();
    assert_eq!(err.0, "sideways");

    // Parsing is exact: no case folding, no variant-style names.
    assert!("Before".parse::<Relation>().is_err());
    assert!("".parse::<Relation>().is_err());
}

#[test]
fn relation_serializes_as_variant_name() {
    let json = serde_json::to_string(&Relation::OverlappedBy).unwrap();
    assert_eq!(json, "\"OverlappedBy\"");
    let back: Relation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Relation::OverlappedBy);
}
