/*
 * Copyright (c) 2006-Present, Redis Ltd.
 * All rights reserved.
 *
 * Licensed under your choice of the Redis Source Available License 2.0
 * (RSALv2); or (b) the Server Side Public License v1 (SSPLv1); or (c) the
 * GNU Affero General Public License v3 (AGPLv3).
*/

//! ScoreRangeTree - a score-partitioned index over `(document id, score)` pairs.
//!
//! This crate provides a secondary index structure for numeric attributes
//! (relevance scores, timestamps, prices). It stores `(doc_id, score)` pairs
//! and answers range queries of the form "all documents whose score lies in
//! `[min, max]`", returned in ascending document-id order.
//!
//! # Overview
//!
//! The index is a binary tree over score thresholds. Each leaf owns a
//! [`ScoreRange`]: a bounded bucket of entries stored in a small BST keyed by
//! document id. When a bucket accumulates more than
//! [`ScoreRangeTree::MAX_RANGE_SIZE`] entries it is split in place at the
//! midpoint of its score bounds, so the partitioning adapts to the score
//! distribution without any offline rebuild.
//!
//! Range queries collect the leaves whose bounds may intersect the query and
//! merge their entries into one globally sorted stream, filtering each entry's
//! actual score against the query bounds.
//!
//! # Example
//!
//! ```
//! use score_range_tree::ScoreRangeTree;
//!
//! let mut tree = ScoreRangeTree::new();
//! tree.add(1, 10.0);
//! tree.add(2, 5.0);
//! tree.add(3, 50.0);
//!
//! let ids: Vec<u64> = tree.find_range(0.0, 20.0).map(|e| e.doc_id).collect();
//! assert_eq!(ids, vec![1, 2]);
//! ```
//!
//! # Caveats
//!
//! The structure is single-writer and provides no internal synchronization;
//! callers sharing it across threads must serialize access externally. A
//! document id must be inserted through the tree root only once: duplicate
//! ids are silently ignored within a bucket, but the merge path does not
//! deduplicate across buckets.

mod doc_tree;
mod iterator;
mod node;
mod range;
mod tree;

pub use doc_tree::{DocEntry, DocTree, InOrderIter};
pub use iterator::MergedRangeIter;
pub use node::ScoreTreeNode;
pub use range::ScoreRange;
pub use tree::ScoreRangeTree;

/// Document identifier type used throughout the index.
pub type DocId = u64;
