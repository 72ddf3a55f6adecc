/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Property-based tests for the score range tree using `proptest`.

#[cfg(not(miri))]
mod proptests {
    use score_range_tree::{DocTree, ScoreRange, ScoreRangeTree};

    proptest::proptest! {
        #[test]
        fn prop_find_range_matches_model(
            // Unique doc ids with arbitrary scores; enough entries to cross
            // the split threshold in some cases.
            entries in proptest::collection::btree_map(
                0u64..100_000,
                -1000.0f64..1000.0,
                1..1500,
            ),
            raw_bounds in (-1200.0f64..1200.0, -1200.0f64..1200.0),
        ) {
            let (a, b) = raw_bounds;
            let (min, max) = if a <= b { (a, b) } else { (b, a) };

            let mut tree = ScoreRangeTree::new();
            for (&id, &score) in &entries {
                tree.add(id, score);
            }

            // BTreeMap iteration is id-ascending, so the expectation is
            // already sorted.
            let expected: Vec<u64> = entries
                .iter()
                .filter(|&(_, &score)| score >= min && score <= max)
                .map(|(&id, _)| id)
                .collect();
            let got: Vec<u64> = tree.find_range(min, max).map(|e| e.doc_id).collect();
            proptest::prop_assert_eq!(got, expected);
        }

        #[test]
        fn prop_walker_yields_every_id_once_ascending(
            ids in proptest::collection::hash_set(0u64..100_000, 1..500)
        ) {
            let mut tree = DocTree::new();
            for &id in &ids {
                tree.insert(id, 0.0);
            }

            let walked: Vec<u64> = tree.iter().map(|e| e.doc_id).collect();
            let mut expected: Vec<u64> = ids.into_iter().collect();
            expected.sort_unstable();
            proptest::prop_assert_eq!(walked, expected);
        }

        #[test]
        fn prop_split_is_lossless(
            entries in proptest::collection::btree_map(
                0u64..100_000,
                -500.0f64..500.0,
                1..400,
            )
        ) {
            let mut range = ScoreRange::new();
            for (&id, &score) in &entries {
                range.add(id, score);
            }

            let (below, at_or_above) = range.split();
            let mid = (range.min_val() + range.max_val()) / 2.0;
            proptest::prop_assert!(below.iter().all(|e| e.score < mid));
            proptest::prop_assert!(at_or_above.iter().all(|e| e.score >= mid));

            // Union of the halves reproduces the pre-split set exactly.
            let mut merged: Vec<(u64, f64)> = below
                .iter()
                .chain(at_or_above.iter())
                .map(|e| (e.doc_id, e.score))
                .collect();
            merged.sort_by_key(|&(id, _)| id);
            let original: Vec<(u64, f64)> =
                entries.iter().map(|(&id, &score)| (id, score)).collect();
            proptest::prop_assert_eq!(merged, original);
        }

        #[test]
        fn prop_first_write_wins_in_one_range(
            // Few distinct ids and plenty of repeats, well below the split
            // threshold so everything stays in one range (duplicate ids
            // across ranges would violate the insertion precondition).
            writes in proptest::collection::vec(
                (0u64..50, -100.0f64..100.0),
                1..500,
            )
        ) {
            let mut tree = ScoreRangeTree::new();
            let mut model: std::collections::BTreeMap<u64, f64> =
                std::collections::BTreeMap::new();
            for &(id, score) in &writes {
                tree.add(id, score);
                model.entry(id).or_insert(score);
            }

            let got: Vec<(u64, f64)> = tree
                .find_range(f64::NEG_INFINITY, f64::INFINITY)
                .map(|e| (e.doc_id, e.score))
                .collect();
            let expected: Vec<(u64, f64)> =
                model.iter().map(|(&id, &score)| (id, score)).collect();
            proptest::prop_assert_eq!(got, expected);
        }
    }
}
