/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! Per-range document storage: an unbalanced binary search tree keyed by
//! document id, plus the lazy in-order iterator that drives splits and
//! range-query output.

use std::cmp::Ordering;

use crate::DocId;

/// A single `(document id, score)` entry yielded by traversal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocEntry {
    /// The document identifier.
    pub doc_id: DocId,
    /// The score the document was first inserted with.
    pub score: f64,
}

#[derive(Debug)]
struct DocTreeNode {
    doc_id: DocId,
    score: f64,
    left: Option<Box<DocTreeNode>>,
    right: Option<Box<DocTreeNode>>,
}

/// An unbalanced binary search tree of [`DocEntry`]s, ordered by document id.
///
/// Document ids are the unique key; scores tag along and carry no ordering
/// invariant. Insertion is first-write-wins: an id that is already present is
/// silently ignored and its original score retained. The tree is never
/// rebalanced: entries arrive in effectively random id order in practice,
/// and each tree is capped by the range split threshold anyway.
#[derive(Debug, Default)]
pub struct DocTree {
    root: Option<Box<DocTreeNode>>,
    /// Insert calls observed, duplicates included. A size hint, not an exact
    /// cardinality.
    size: usize,
}

impl DocTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of insert calls this tree has received.
    ///
    /// Duplicate-id no-ops are counted too, so this is only a hint. It is
    /// exact for trees built from unique ids, which is what split rebuilds
    /// rely on when seeding the `distinct` counters of fresh ranges.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the tree holds no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Inserts `(doc_id, score)`, keeping ids unique.
    ///
    /// If `doc_id` is already present this is a no-op apart from the size
    /// hint: the existing score wins.
    pub fn insert(&mut self, doc_id: DocId, score: f64) {
        self.size += 1;

        let mut slot = &mut self.root;
        while let Some(node) = slot {
            match doc_id.cmp(&node.doc_id) {
                Ordering::Equal => return,
                Ordering::Less => slot = &mut node.left,
                Ordering::Greater => slot = &mut node.right,
            }
        }
        *slot = Some(Box::new(DocTreeNode {
            doc_id,
            score,
            left: None,
            right: None,
        }));
    }

    /// Partitions the entries into two fresh trees by score: entries with
    /// `score < split_point` go into the first tree, the rest into the second.
    ///
    /// Both halves are rebuilt by re-inserting every entry in walk order, so
    /// each is a valid id-ordered tree. This is O(n log n) rather than a
    /// structural split; splits are rare enough that simplicity wins.
    #[must_use]
    pub fn split(&self, split_point: f64) -> (DocTree, DocTree) {
        let mut below = DocTree::new();
        let mut at_or_above = DocTree::new();

        for entry in self.iter() {
            if entry.score < split_point {
                below.insert(entry.doc_id, entry.score);
            } else {
                at_or_above.insert(entry.doc_id, entry.score);
            }
        }

        (below, at_or_above)
    }

    /// Returns a lazy in-order iterator over the entries, ascending by
    /// document id.
    #[must_use]
    pub fn iter(&self) -> InOrderIter<'_> {
        InOrderIter::new(self.root.as_deref())
    }
}

/// Lazy in-order traversal over a [`DocTree`], ascending by document id.
///
/// Traversal state is reified as an explicit stack of pending-ancestor frames
/// instead of native recursion, so advancing is a bounded step and frames are
/// released as soon as their subtree is exhausted. Single-pass: there is no
/// rewind.
#[derive(Debug)]
pub struct InOrderIter<'a> {
    /// Nodes whose own entry is still pending; the left subtree of each has
    /// already been scheduled.
    stack: Vec<&'a DocTreeNode>,
}

impl<'a> InOrderIter<'a> {
    fn new(root: Option<&'a DocTreeNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    /// Schedules `node` and every left descendant below it. The deepest one
    /// ends up on top of the stack and is emitted next.
    fn push_left_spine(&mut self, mut node: Option<&'a DocTreeNode>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl Iterator for InOrderIter<'_> {
    type Item = DocEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(DocEntry {
            doc_id: node.doc_id,
            score: node.score,
        })
    }
}
