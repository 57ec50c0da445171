//! Online suffix tree construction (Ukkonen's algorithm)
//!
//! The builder consumes one symbol per phase. Between phases it keeps the
//! active point: a node plus the number of trailing symbols (`remaining`)
//! that still have to be inserted as explicit suffixes. Leaves are created
//! with an open-ended length, so extending every existing leaf by the new
//! symbol costs nothing; their real lengths are fixed by the finalizer.

use super::finalize::close_leaves;
use super::reader::SuffixTree;
use super::types::*;
use super::verify::check_arena;
use crate::edge_map::EdgeMap;
use crate::error::{TreeError, TreeResult};

/// Incremental builder for a [`SuffixTree`]
pub struct TreeBuilder<M: EdgeMap> {
    config: M::Config,
    /// Every symbol consumed so far
    text: Vec<M::Symbol>,
    /// Node arena, root first
    nodes: Vec<Node<M>>,
    /// Node the active point hangs from
    active_node: NodeIndex,
    /// Symbols between the active node and the insertion point,
    /// counting the symbol of the current phase
    remaining: usize,
}

impl<M: EdgeMap> TreeBuilder<M> {
    /// Create a builder, rejecting unusable edge-map configuration
    pub fn new(config: M::Config) -> TreeResult<Self> {
        Self::with_capacity(config, 0)
    }

    /// Create a builder sized for `capacity` input symbols
    pub fn with_capacity(config: M::Config, capacity: usize) -> TreeResult<Self> {
        M::check_config(&config)?;

        // A tree over n symbols has at most 2n nodes
        let mut nodes = Vec::with_capacity(capacity.saturating_mul(2).max(1));
        nodes.push(Node::new(0, 0, &config));

        Ok(Self {
            config,
            text: Vec::with_capacity(capacity),
            nodes,
            active_node: ROOT,
            remaining: 0,
        })
    }

    /// Append one symbol and run the phase that inserts all its suffixes.
    ///
    /// Symbols the edge map cannot index are rejected before the tree is
    /// touched.
    pub fn push(&mut self, symbol: M::Symbol) -> TreeResult<()> {
        M::check_symbol(&self.config, self.text.len(), &symbol)?;
        self.push_checked(symbol)
    }

    /// Append every symbol from `symbols`, stopping at the first error
    pub fn extend<I>(&mut self, symbols: I) -> TreeResult<()>
    where
        I: IntoIterator<Item = M::Symbol>,
    {
        for symbol in symbols {
            self.push(symbol)?;
        }
        Ok(())
    }

    /// Number of symbols consumed
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Nodes allocated so far, including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Symbols consumed so far
    pub fn text(&self) -> &[M::Symbol] {
        &self.text
    }

    /// Fix every leaf length, check the arena and freeze the tree
    pub fn finish(self) -> TreeResult<SuffixTree<M>> {
        let (text, mut nodes) = self.into_parts();
        close_leaves(&text, &mut nodes)?;
        check_arena(&text, &nodes)?;
        Ok(SuffixTree::from_parts(text, nodes))
    }

    pub(crate) fn push_checked(&mut self, symbol: M::Symbol) -> TreeResult<()> {
        self.text.push(symbol);
        self.remaining += 1;
        self.run_phase()
    }

    pub(crate) fn into_parts(self) -> (Vec<M::Symbol>, Vec<Node<M>>) {
        (self.text, self.nodes)
    }

    fn run_phase(&mut self) -> TreeResult<()> {
        let len = self.text.len();
        let appended = len - 1;
        // Internal node created earlier in this phase, waiting for its link
        let mut pending_link: Option<NodeIndex> = None;

        while self.remaining > 0 {
            let child = self.canonicalize(len);
            let at = len - self.remaining;

            match child {
                None => {
                    let leaf = self.add_node(at, OPEN);
                    let symbol = self.text[at].clone();
                    self.nodes[self.active_node].children.set_child(symbol, leaf);
                    if let Some(node) = pending_link.take() {
                        self.nodes[node].suffix_link = self.active_node;
                    }
                }
                Some(child) => {
                    let offset = self.remaining - 1;
                    let existing = self.nodes[child].start + offset;
                    if self.text[existing] == self.text[appended] {
                        // Already present implicitly, and so is every
                        // shorter suffix of this phase
                        if let Some(node) = pending_link.take() {
                            self.nodes[node].suffix_link = self.active_node;
                        }
                        return Ok(());
                    }

                    let internal = self.split(child, at, offset)?;
                    if let Some(node) = pending_link.replace(internal) {
                        self.nodes[node].suffix_link = internal;
                    }
                }
            }

            self.advance()?;
        }

        Ok(())
    }

    /// Skip-count down from the active node until the insertion point lies
    /// on the edge into the returned child (or at the active node itself
    /// when there is no such child).
    fn canonicalize(&mut self, len: usize) -> Option<NodeIndex> {
        loop {
            let symbol = &self.text[len - self.remaining];
            let child = self.nodes[self.active_node].children.get_child(symbol)?;
            let length = self.nodes[child].length;
            if self.remaining <= length {
                return Some(child);
            }
            self.remaining -= length;
            self.active_node = child;
        }
    }

    /// Split the edge into `child` after `offset` symbols and hang a new
    /// leaf for the appended symbol off the new internal node.
    fn split(&mut self, child: NodeIndex, at: usize, offset: usize) -> TreeResult<NodeIndex> {
        let appended = self.text.len() - 1;
        let Node { start, length, .. } = self.nodes[child];

        debug_assert!(offset > 0, "split at offset 0 of node {}", child);
        if offset == 0 {
            return Err(TreeError::EmptyEdge {
                node: self.nodes.len(),
            });
        }

        let shrunk = if length == OPEN {
            OPEN
        } else {
            debug_assert!(length > offset, "split past the end of node {}", child);
            match length.checked_sub(offset) {
                Some(shrunk) if shrunk > 0 => shrunk,
                _ => return Err(TreeError::EmptyEdge { node: child }),
            }
        };

        let internal = self.add_node(start, offset);
        let leaf = self.add_node(appended, OPEN);

        let old = &mut self.nodes[child];
        old.start = start + offset;
        old.length = shrunk;

        let split_symbol = self.text[at].clone();
        self.nodes[self.active_node]
            .children
            .set_child(split_symbol, internal);

        let existing_symbol = self.text[start + offset].clone();
        let appended_symbol = self.text[appended].clone();
        let edges = &mut self.nodes[internal].children;
        edges.set_child(existing_symbol, child);
        edges.set_child(appended_symbol, leaf);

        Ok(internal)
    }

    /// Move the active point to the next shorter suffix
    fn advance(&mut self) -> TreeResult<()> {
        if self.active_node == ROOT {
            self.remaining -= 1;
            return Ok(());
        }

        let link = self.nodes[self.active_node].suffix_link;
        debug_assert_ne!(link, NO_NODE, "node {} has no suffix link", self.active_node);
        if link == NO_NODE {
            return Err(TreeError::UnresolvedSuffixLink {
                node: self.active_node,
            });
        }
        self.active_node = link;
        Ok(())
    }

    fn add_node(&mut self, start: usize, length: usize) -> NodeIndex {
        let index = self.nodes.len();
        self.nodes.push(Node::new(start, length, &self.config));
        index
    }
}
