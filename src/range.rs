/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Score range storage for the score range tree.

use crate::doc_tree::{DocTree, InOrderIter};
use crate::DocId;

/// A score range is the leaf-level storage unit of the score range tree.
///
/// It owns a [`DocTree`] of `(doc_id, score)` entries together with the
/// `[min, max]` score bounds it promises to hold. Bounds are widened
/// opportunistically on insert and never shrunk.
#[derive(Debug)]
pub struct ScoreRange {
    /// The entries, ordered by document id.
    docs: DocTree,
    /// The minimum score stored in this range.
    min_val: f64,
    /// The maximum score stored in this range.
    max_val: f64,
    /// Insertions accepted into this range, including duplicates. Used purely
    /// as the split trigger; a placeholder for a real distinct-value
    /// estimator.
    distinct: usize,
}

impl ScoreRange {
    /// Creates a new empty score range.
    ///
    /// An empty range carries inverted infinity bounds so that the first
    /// insert establishes the true bounds and an empty range never overlaps
    /// any query.
    #[must_use]
    pub fn new() -> Self {
        Self {
            docs: DocTree::new(),
            min_val: f64::INFINITY,
            max_val: f64::NEG_INFINITY,
            distinct: 0,
        }
    }

    /// Builds a range around an existing tree of entries. Used when splitting,
    /// where the bounds are dictated by the split point rather than observed.
    fn from_parts(docs: DocTree, min_val: f64, max_val: f64) -> Self {
        Self {
            distinct: docs.size(),
            docs,
            min_val,
            max_val,
        }
    }

    /// Adds a `(doc_id, score)` entry to this range.
    ///
    /// Widens the bounds to include `score` and bumps the split-trigger
    /// counter. An id already present in this range is a no-op apart from the
    /// counter (first write wins).
    pub fn add(&mut self, doc_id: DocId, score: f64) {
        self.distinct += 1;
        self.docs.insert(doc_id, score);

        if score < self.min_val {
            self.min_val = score;
        }
        if score > self.max_val {
            self.max_val = score;
        }
    }

    /// Splits this range at the midpoint of its bounds into two fresh ranges.
    ///
    /// The first gets bounds `[min, mid]` and the entries with `score < mid`;
    /// the second gets `[mid, max]` and the rest. Each side's `distinct`
    /// counter is seeded from its partition's size, not inherited. If every
    /// entry shares one score the below side comes back empty, a valid
    /// terminal state.
    #[must_use]
    pub fn split(&self) -> (ScoreRange, ScoreRange) {
        let mid = (self.min_val + self.max_val) / 2.0;
        let (below, at_or_above) = self.docs.split(mid);

        (
            Self::from_parts(below, self.min_val, mid),
            Self::from_parts(at_or_above, mid, self.max_val),
        )
    }

    /// Returns a lazy iterator over the entries, ascending by document id.
    #[must_use]
    pub fn iter(&self) -> InOrderIter<'_> {
        self.docs.iter()
    }

    /// Returns true if this range overlaps `[min, max]`.
    ///
    /// An empty range overlaps nothing; its inverted infinity bounds alone do
    /// not guarantee that for infinite query bounds.
    #[must_use]
    pub fn overlaps(&self, min: f64, max: f64) -> bool {
        !self.is_empty() && min <= self.max_val && max >= self.min_val
    }

    /// Returns true if this range is completely contained within `[min, max]`.
    #[must_use]
    pub fn contained_in(&self, min: f64, max: f64) -> bool {
        self.min_val >= min && self.max_val <= max
    }

    /// The minimum score this range promises to hold.
    #[must_use]
    pub const fn min_val(&self) -> f64 {
        self.min_val
    }

    /// The maximum score this range promises to hold.
    #[must_use]
    pub const fn max_val(&self) -> f64 {
        self.max_val
    }

    /// The split-trigger counter: insertions accepted, duplicates included.
    #[must_use]
    pub const fn distinct(&self) -> usize {
        self.distinct
    }

    /// Returns true if this range holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl Default for ScoreRange {
    fn default() -> Self {
        Self::new()
    }
}
