/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Merged, score-filtered iteration over the ranges collected by a query.

use crate::doc_tree::{DocEntry, InOrderIter};
use crate::range::ScoreRange;

/// Yields the entries of a set of [`ScoreRange`]s as one globally sorted
/// stream, ascending by document id, filtered by score against the query
/// bounds.
///
/// # Algorithm
///
/// One lazy walker per range, each holding its current head entry. Every step
/// picks the smallest head document id across all non-exhausted walkers,
/// advances only that walker, and yields the entry if its score lies in
/// `[min, max]` (collected ranges may be wider than the query). A linear
/// min-scan is enough here: the number of ranges stays small relative to the
/// entries per range.
///
/// Ids are unique across ranges by construction, so ties cannot occur.
pub struct MergedRangeIter<'a> {
    cursors: Vec<RangeCursor<'a>>,
    min: f64,
    max: f64,
}

/// A range's walker plus its current head entry.
struct RangeCursor<'a> {
    head: Option<DocEntry>,
    entries: InOrderIter<'a>,
}

impl<'a> RangeCursor<'a> {
    fn new(range: &'a ScoreRange) -> Self {
        let mut entries = range.iter();
        let head = entries.next();
        Self { head, entries }
    }

    /// Takes the current head and pulls up the next entry behind it.
    fn advance(&mut self) -> Option<DocEntry> {
        let current = self.head.take();
        self.head = self.entries.next();
        current
    }
}

impl<'a> MergedRangeIter<'a> {
    /// Creates a merge over `ranges`, yielding only entries whose score lies
    /// in `[min, max]`. An empty range set yields an immediately exhausted
    /// iterator.
    pub(crate) fn new(ranges: Vec<&'a ScoreRange>, min: f64, max: f64) -> Self {
        Self {
            cursors: ranges.into_iter().map(RangeCursor::new).collect(),
            min,
            max,
        }
    }
}

impl Iterator for MergedRangeIter<'_> {
    type Item = DocEntry;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (_, idx) = self
                .cursors
                .iter()
                .enumerate()
                .filter_map(|(idx, cursor)| cursor.head.map(|entry| (entry.doc_id, idx)))
                .min_by_key(|&(doc_id, _)| doc_id)?;

            let entry = self.cursors[idx].advance()?;
            if entry.score >= self.min && entry.score <= self.max {
                return Some(entry);
            }
        }
    }
}
