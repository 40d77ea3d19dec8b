// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for the Half-Open Overlap Relation
//!
//! The conflict check hinges on one relation: two half-open intervals
//! `[start, end)` overlap iff `a.start < b.end && a.end > b.start`. These
//! tests prove the relation's structural properties for arbitrary
//! minute-granularity windows.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use room_booking::domain::TimeRange;

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 19, 0, 0, 0).unwrap()
}

/// Arbitrary well-formed range as minute offsets from a fixed base
fn time_range() -> impl Strategy<Value = TimeRange> {
    (0i64..10_000, 1i64..600).prop_map(|(start_min, len_min)| {
        TimeRange::new(
            base() + Duration::minutes(start_min),
            base() + Duration::minutes(start_min + len_min),
        )
        .expect("generated range is well-formed")
    })
}

proptest! {
    /// Overlap is symmetric
    #[test]
    fn prop_overlap_is_symmetric(a in time_range(), b in time_range()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    /// Every range overlaps itself
    #[test]
    fn prop_overlap_is_reflexive(a in time_range()) {
        prop_assert!(a.overlaps(&a));
    }

    /// A range that starts exactly where another ends never overlaps it
    #[test]
    fn prop_touching_ranges_do_not_overlap(a in time_range(), len in 1i64..600) {
        let after = TimeRange::new(a.end(), a.end() + Duration::minutes(len)).unwrap();
        prop_assert!(!a.overlaps(&after));
        prop_assert!(!after.overlaps(&a));
    }

    /// Containment implies overlap
    #[test]
    fn prop_contained_range_overlaps(a in time_range()) {
        let midpoint = a.start() + (a.end() - a.start()) / 2;
        let inner = TimeRange::new(a.start(), midpoint + Duration::seconds(1)).unwrap();
        prop_assert!(a.overlaps(&inner));
        prop_assert!(a.contains(inner.start()));
    }

    /// Ranges separated by a gap never overlap
    #[test]
    fn prop_disjoint_ranges_do_not_overlap(
        a in time_range(),
        gap in 1i64..1_000,
        len in 1i64..600,
    ) {
        let later = TimeRange::new(
            a.end() + Duration::minutes(gap),
            a.end() + Duration::minutes(gap + len),
        )
        .unwrap();
        prop_assert!(!a.overlaps(&later));
    }

    /// `contains` agrees with the half-open convention at both boundaries
    #[test]
    fn prop_contains_is_half_open(a in time_range()) {
        prop_assert!(a.contains(a.start()));
        prop_assert!(!a.contains(a.end()));
    }
}
