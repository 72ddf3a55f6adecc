/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! ScoreRangeTree - the top-level score-partitioning structure.

use crate::iterator::MergedRangeIter;
use crate::node::ScoreTreeNode;
use crate::range::ScoreRange;
use crate::DocId;

/// A binary tree over score thresholds with adaptive range bucketing.
///
/// The tree starts as a single terminal node wrapping an empty [`ScoreRange`]
/// and subdivides buckets in place as they fill, so the partitioning adapts to
/// the score distribution. There is no rebalancing pass: an adversarial score
/// order can degrade lookups to linear in the number of splits, an accepted
/// tradeoff at this structure's scale.
///
/// All mutation and reads assume external mutual exclusion; a split discards
/// the old range, so leaf references collected by a query must not outlive a
/// concurrent insert.
#[derive(Debug)]
pub struct ScoreRangeTree {
    /// Root node, exclusively owning the whole structure.
    root: ScoreTreeNode,
    /// Add calls routed into the tree. Duplicate-id no-ops are counted, so
    /// this is a hint like the per-range counters.
    num_entries: usize,
    /// Number of terminal nodes.
    num_leaves: usize,
}

impl ScoreRangeTree {
    /// Maximum number of accepted entries in a range before it is split.
    pub const MAX_RANGE_SIZE: usize = 1000;

    /// Creates a new empty tree: one terminal node wrapping an empty range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: ScoreTreeNode::leaf(),
            num_entries: 0,
            num_leaves: 1,
        }
    }

    /// The number of add calls this tree has received (a hint; duplicate ids
    /// are counted even though they are stored once).
    #[must_use]
    pub const fn num_entries(&self) -> usize {
        self.num_entries
    }

    /// The number of terminal nodes in the tree.
    #[must_use]
    pub const fn num_leaves(&self) -> usize {
        self.num_leaves
    }

    /// Returns a reference to the root node.
    #[must_use]
    pub const fn root(&self) -> &ScoreTreeNode {
        &self.root
    }

    /// Adds a `(doc_id, score)` entry to the tree.
    ///
    /// Routes by score to the owning range and inserts there; an id already
    /// present in that range is silently ignored (first write wins). If the
    /// range outgrows [`Self::MAX_RANGE_SIZE`] it is split synchronously, at
    /// most once per call.
    ///
    /// Each id must be added through one tree root only once: the query path
    /// assumes ids are unique across ranges and does not deduplicate.
    pub fn add(&mut self, doc_id: DocId, score: f64) {
        let split = self.root.add(doc_id, score);
        self.num_entries += 1;
        if split {
            // A split replaces one leaf with two.
            self.num_leaves += 1;
        }
    }

    /// Collects the ranges whose score bounds may intersect `[min, max]`.
    ///
    /// Walks a "min path" and a "max path" from the root with the routing
    /// rule, descending their shared prefix once. After the paths diverge,
    /// every right sibling skipped while the min path branches left qualifies
    /// wholesale, as does every left sibling skipped while the max path
    /// branches right; those subtrees are expanded depth-first into their
    /// ranges. Both paths' terminal ranges are included. Cost is proportional
    /// to tree height plus the number of qualifying ranges.
    ///
    /// Collected ranges may be wider than the query; consumers filter each
    /// entry's actual score. Ranges that cannot intersect the query at all
    /// (including empty ones) are pruned here: the terminal leaf of a path
    /// can sit wholly outside the bounds, e.g. when the query lies below
    /// every stored score.
    #[must_use]
    pub fn find(&self, min: f64, max: f64) -> Vec<&ScoreRange> {
        let mut ranges: Vec<&ScoreRange> = Vec::with_capacity(8);
        // Scratch stack of wholesale-qualifying subtrees awaiting expansion.
        let mut stack: Vec<&ScoreTreeNode> = Vec::with_capacity(8);

        // Descend the shared prefix of the two paths.
        let mut node = &self.root;
        let (mut vmin, mut vmax) = loop {
            match node {
                ScoreTreeNode::Internal {
                    split_value,
                    left,
                    right,
                } => {
                    let min_goes_left = min < *split_value;
                    let max_goes_left = max < *split_value;
                    if min_goes_left != max_goes_left {
                        // Diverged; for a well-formed query the min path
                        // continues left and the max path right.
                        break if min_goes_left {
                            (&**left, &**right)
                        } else {
                            (&**right, &**left)
                        };
                    }
                    node = if min_goes_left { left } else { right };
                }
                ScoreTreeNode::Leaf(range) => {
                    // The paths never diverged; the shared terminal range is
                    // collected exactly once.
                    Self::push_range(&mut ranges, range, min, max);
                    return ranges;
                }
            }
        };

        // Min path: every right sibling skipped while still branching left
        // holds only scores >= the split value, all inside the query.
        loop {
            match vmin {
                ScoreTreeNode::Internal {
                    split_value,
                    left,
                    right,
                } => {
                    if min < *split_value {
                        stack.push(right);
                        vmin = left;
                    } else {
                        vmin = right;
                    }
                }
                ScoreTreeNode::Leaf(range) => {
                    Self::push_range(&mut ranges, range, min, max);
                    break;
                }
            }
        }

        // Max path, mirrored: left siblings skipped while branching right.
        loop {
            match vmax {
                ScoreTreeNode::Internal {
                    split_value,
                    left,
                    right,
                } => {
                    if max >= *split_value {
                        stack.push(left);
                        vmax = right;
                    } else {
                        vmax = left;
                    }
                }
                ScoreTreeNode::Leaf(range) => {
                    Self::push_range(&mut ranges, range, min, max);
                    break;
                }
            }
        }

        // Expand the wholesale-collected subtrees depth-first.
        while let Some(node) = stack.pop() {
            match node {
                ScoreTreeNode::Internal { left, right, .. } => {
                    stack.push(left);
                    stack.push(right);
                }
                ScoreTreeNode::Leaf(range) => Self::push_range(&mut ranges, range, min, max),
            }
        }

        ranges
    }

    /// Collects `range` if it can intersect the query. Empty ranges overlap
    /// nothing, so they are skipped by the same check.
    fn push_range<'a>(ranges: &mut Vec<&'a ScoreRange>, range: &'a ScoreRange, min: f64, max: f64) {
        if range.overlaps(min, max) {
            ranges.push(range);
        }
    }

    /// Answers the range query `[min, max]`: all document ids whose inserted
    /// score lies in the bounds, ascending by id.
    ///
    /// The returned iterator merges the collected ranges lazily and filters
    /// each entry's score, since collected ranges may be wider than the query.
    /// An inverted query (`min > max`) yields nothing.
    #[must_use]
    pub fn find_range(&self, min: f64, max: f64) -> MergedRangeIter<'_> {
        MergedRangeIter::new(self.find(min, max), min, max)
    }
}

impl Default for ScoreRangeTree {
    fn default() -> Self {
        Self::new()
    }
}
