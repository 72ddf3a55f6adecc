/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Tests for `ScoreRange` — the leaf storage unit.

use score_range_tree::ScoreRange;

#[test]
fn test_bound_widening_is_idempotent() {
    let mut range = ScoreRange::new();
    range.add(1, 10.0);
    range.add(2, 30.0);
    let (min, max) = (range.min_val(), range.max_val());

    // Re-inserting scores already inside the bounds never moves them.
    range.add(3, 20.0);
    range.add(4, 10.0);
    range.add(5, 30.0);
    assert_eq!(range.min_val(), min);
    assert_eq!(range.max_val(), max);
}

#[test]
fn test_split_halves_carry_midpoint_bounds() {
    let mut range = ScoreRange::new();
    for id in 1..=100u64 {
        range.add(id, id as f64);
    }
    assert_eq!(range.min_val(), 1.0);
    assert_eq!(range.max_val(), 100.0);

    let (below, at_or_above) = range.split();
    let mid = (1.0 + 100.0) / 2.0;
    assert_eq!(below.min_val(), 1.0);
    assert_eq!(below.max_val(), mid);
    assert_eq!(at_or_above.min_val(), mid);
    assert_eq!(at_or_above.max_val(), 100.0);
}

#[test]
fn test_split_reproduces_entry_set() {
    let mut range = ScoreRange::new();
    for id in 1..=200u64 {
        range.add(id, (id % 50) as f64);
    }

    let (below, at_or_above) = range.split();
    let mut ids: Vec<u64> = below
        .iter()
        .chain(at_or_above.iter())
        .map(|e| e.doc_id)
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=200).collect::<Vec<_>>());

    // Distinct counters are seeded from the partitions, not inherited.
    assert_eq!(below.distinct() + at_or_above.distinct(), 200);
}

#[test]
fn test_duplicate_adds_bump_counter_but_not_entries() {
    let mut range = ScoreRange::new();
    range.add(1, 5.0);
    range.add(1, 5.0);
    range.add(1, 5.0);

    // The counter is a split-trigger hint, not a verified count.
    assert_eq!(range.distinct(), 3);
    assert_eq!(range.iter().count(), 1);
}

#[test]
fn test_overlap_predicates() {
    let mut range = ScoreRange::new();
    range.add(1, 10.0);
    range.add(2, 20.0);

    assert!(range.overlaps(15.0, 25.0));
    assert!(range.overlaps(0.0, 10.0));
    assert!(!range.overlaps(20.5, 30.0));
    assert!(range.contained_in(0.0, 100.0));
    assert!(!range.contained_in(15.0, 100.0));
}
