//! Types for the suffix tree arena
//!
//! Nodes refer to each other only by their position in the arena. A node
//! stores the label of the edge entering it as a `(start, length)` window
//! into the tree's input.

use crate::edge_map::EdgeMap;
use serde::{Deserialize, Serialize};

/// Position of a node in the arena
pub type NodeIndex = usize;

/// Index of the root node, always the first node in the arena
pub const ROOT: NodeIndex = 0;

/// Sentinel for "no child" and "suffix link not set"
pub const NO_NODE: NodeIndex = NodeIndex::MAX;

/// Length of a leaf edge during construction: extends to the end of the
/// input consumed so far. Never survives finalization.
pub const OPEN: usize = usize::MAX;

/// A node together with the edge that enters it from its parent.
#[derive(Debug, Clone)]
pub struct Node<M> {
    pub(crate) start: usize,
    pub(crate) length: usize,
    pub(crate) suffix_link: NodeIndex,
    pub(crate) children: M,
}

impl<M: EdgeMap> Node<M> {
    pub(crate) fn new(start: usize, length: usize, config: &M::Config) -> Self {
        Self {
            start,
            length,
            suffix_link: NO_NODE,
            children: M::new(config),
        }
    }

    /// Offset into the input where this node's edge label begins
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of symbols on the edge entering this node (0 for the root)
    pub fn length(&self) -> usize {
        self.length
    }

    /// Node representing this node's string minus its first symbol.
    ///
    /// `None` for leaves and the root.
    pub fn suffix_link(&self) -> Option<NodeIndex> {
        (self.suffix_link != NO_NODE).then_some(self.suffix_link)
    }

    /// Child reached by the edge starting with `symbol`
    pub fn child(&self, symbol: &M::Symbol) -> Option<NodeIndex> {
        self.children.get_child(symbol)
    }

    /// Indices of all children (order unspecified)
    pub fn children(&self) -> Vec<NodeIndex> {
        self.children.children()
    }

    /// Number of children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// The underlying edge map
    pub fn edges(&self) -> &M {
        &self.children
    }

    pub(crate) fn is_open(&self) -> bool {
        self.length == OPEN
    }
}

/// Summary of a built tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TreeStats {
    /// Number of input symbols
    pub text_len: usize,
    /// Total nodes including the root
    pub node_count: usize,
    /// Nodes without children (the root is never counted)
    pub leaf_count: usize,
    /// Non-root nodes with children
    pub internal_count: usize,
    /// Longest root-to-leaf path, in edges
    pub max_depth: usize,
}
