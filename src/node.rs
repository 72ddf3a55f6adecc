/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! ScoreTreeNode - a node in the score range tree.

use crate::range::ScoreRange;
use crate::tree::ScoreRangeTree;
use crate::DocId;

/// A node in the score range tree: either an internal routing node or a
/// terminal node owning one [`ScoreRange`].
///
/// The routing rule is `score < split_value` goes left, else right. The same
/// rule drives insertion and range queries; the two must never diverge or
/// entries become unreachable.
#[derive(Debug)]
pub enum ScoreTreeNode {
    /// Routing node. Exclusively owns both children.
    Internal {
        /// Scores strictly below this threshold route left.
        split_value: f64,
        /// Child covering scores `< split_value`.
        left: Box<ScoreTreeNode>,
        /// Child covering scores `>= split_value`.
        right: Box<ScoreTreeNode>,
    },
    /// Terminal node. Exclusively owns its range.
    Leaf(ScoreRange),
}

impl ScoreTreeNode {
    /// Creates a new terminal node wrapping an empty range.
    #[must_use]
    pub fn leaf() -> Self {
        Self::Leaf(ScoreRange::new())
    }

    /// Returns true if this is a terminal node.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns this node's range, if it is a terminal node.
    #[must_use]
    pub const fn range(&self) -> Option<&ScoreRange> {
        match self {
            Self::Leaf(range) => Some(range),
            Self::Internal { .. } => None,
        }
    }

    /// Adds a value to the subtree rooted at this node, splitting the target
    /// leaf in place if it outgrows the threshold.
    ///
    /// Returns true if a split occurred. A single add triggers at most one
    /// split: the fresh children start below threshold.
    pub(crate) fn add(&mut self, doc_id: DocId, score: f64) -> bool {
        match &mut *self {
            Self::Internal {
                split_value,
                left,
                right,
            } => {
                if score < *split_value {
                    left.add(doc_id, score)
                } else {
                    right.add(doc_id, score)
                }
            }
            Self::Leaf(range) => {
                range.add(doc_id, score);
                let needs_split = range.distinct() > ScoreRangeTree::MAX_RANGE_SIZE;
                if needs_split {
                    self.split_leaf();
                }
                needs_split
            }
        }
    }

    /// Converts this terminal node into an internal node in place.
    ///
    /// The old range is split at the midpoint of its bounds and discarded; the
    /// split value is the below-half's upper bound, so the routing rule sends
    /// future inserts to the same side the existing entries went.
    fn split_leaf(&mut self) {
        let Self::Leaf(range) = &*self else {
            debug_assert!(false, "split_leaf called on an internal node");
            return;
        };

        let (below, at_or_above) = range.split();
        let split_value = below.max_val();

        *self = Self::Internal {
            split_value,
            left: Box::new(Self::Leaf(below)),
            right: Box::new(Self::Leaf(at_or_above)),
        };
    }
}
