//! Huffman tree construction.
//!
//! Nodes live in an arena (`Vec<Node>`) and refer to each other by index,
//! which keeps the parent/child links of a bidirectional tree in plain owned
//! data. The tree retains its leaf ids in first-occurrence symbol order so
//! code derivation can walk each leaf upward without searching.
//!
//! # Algorithm
//!
//! 1. Seed a min-priority queue with one leaf per unique symbol
//!    (weight = occurrence count).
//! 2. While more than one node is eligible: pop the two lowest-weight nodes
//!    (first popped becomes the left child), create an internal node with the
//!    summed weight, link both directions, push it back.
//! 3. The last remaining node is the root.
//!
//! # Tie-break
//!
//! Equal-weight nodes are extracted first-inserted-first: every queue entry
//! carries a monotonically increasing insertion sequence number that breaks
//! weight ties. This makes the exact code assignment reproducible for a
//! given input; prefix-freeness and code lengths do not depend on it.
//!
//! # Degenerate shapes
//!
//! - Zero unique symbols: the tree has no root.
//! - One unique symbol: the root *is* the lone leaf and has no parent, so
//!   its upward walk is empty. The code table layer assigns the trivial
//!   1-bit code in that case.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::symbols::SymbolCensus;

/// Index of a node within its tree's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u32);

impl NodeId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// A single tree node: a leaf carrying a symbol, or an internal merge node.
///
/// Internal nodes always have exactly two children; leaves have none.
/// `parent` is set once by the builder and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Node {
    /// The symbol for a leaf, `None` for an internal node.
    pub symbol: Option<u8>,

    /// Occurrence count for a leaf, sum of child weights for an internal node.
    pub weight: u64,

    /// Parent link (`None` only for the root).
    pub parent: Option<NodeId>,

    /// Left child (the lower-weight node of the merge).
    pub left: Option<NodeId>,

    /// Right child.
    pub right: Option<NodeId>,
}

impl Node {
    fn leaf(symbol: u8, weight: u64) -> Self {
        Self {
            symbol: Some(symbol),
            weight,
            parent: None,
            left: None,
            right: None,
        }
    }

    fn internal(weight: u64, left: NodeId, right: NodeId) -> Self {
        Self {
            symbol: None,
            weight,
            parent: None,
            left: Some(left),
            right: Some(right),
        }
    }

    /// Whether this node carries a symbol.
    pub fn is_leaf(&self) -> bool {
        self.symbol.is_some()
    }
}

/// Priority queue entry: ordered by weight, then by insertion sequence.
/// `seq` is unique per entry, so the `id` field never decides an ordering.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct QueueEntry {
    weight: u64,
    seq: u64,
    id: NodeId,
}

/// A complete Huffman tree for one input.
///
/// Owns all nodes through the arena. `leaves` is a non-owning index list in
/// first-occurrence symbol order.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    leaves: Vec<NodeId>,
}

impl Tree {
    /// Build the tree for a census of symbol counts.
    ///
    /// Only symbols with count > 0 (the census unique set) become leaves.
    pub fn build(census: &SymbolCensus) -> Self {
        let unique = census.unique();

        // A tree of n leaves has exactly n - 1 internal nodes.
        let mut nodes: Vec<Node> = Vec::with_capacity(unique.len().saturating_mul(2));
        let mut leaves = Vec::with_capacity(unique.len());
        let mut eligible = BinaryHeap::with_capacity(unique.len());
        let mut seq = 0u64;

        for &symbol in unique {
            let id = NodeId(nodes.len() as u32);
            nodes.push(Node::leaf(symbol, census.count(symbol)));
            leaves.push(id);
            eligible.push(Reverse(QueueEntry {
                weight: census.count(symbol),
                seq,
                id,
            }));
            seq += 1;
        }

        while eligible.len() > 1 {
            // Length checked above, both pops succeed.
            let Reverse(lo) = eligible.pop().unwrap();
            let Reverse(next) = eligible.pop().unwrap();

            let weight = lo.weight + next.weight;
            let parent_id = NodeId(nodes.len() as u32);
            nodes.push(Node::internal(weight, lo.id, next.id));

            nodes[lo.id.index()].parent = Some(parent_id);
            nodes[next.id.index()].parent = Some(parent_id);

            eligible.push(Reverse(QueueEntry {
                weight,
                seq,
                id: parent_id,
            }));
            seq += 1;
        }

        let root = eligible.pop().map(|Reverse(entry)| entry.id);

        Self {
            nodes,
            root,
            leaves,
        }
    }

    /// The root node id, or `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Leaf ids in first-occurrence symbol order.
    pub fn leaves(&self) -> &[NodeId] {
        &self.leaves
    }

    /// Look up a node by id.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Total node count (leaves plus internal nodes).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.node(current).parent {
            depth += 1;
            current = parent;
        }
        depth
    }
}
