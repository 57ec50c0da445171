//! Read-only suffix tree
//!
//! A [`SuffixTree`] only exists after construction, finalization and the
//! consistency check have all succeeded. It has no mutating methods, so
//! sharing one across threads needs no synchronization.

use super::builder::TreeBuilder;
use super::types::*;
use crate::edge_map::{ArrayConfig, ArrayEdgeMap, EdgeMap, HashEdgeMap};
use crate::error::{TreeError, TreeResult};

/// Suffix tree over bytes with one array slot per byte value
pub type ByteSuffixTree = SuffixTree<ArrayEdgeMap<u8>>;

/// Suffix tree over any hashable symbol type
pub type HashSuffixTree<S> = SuffixTree<HashEdgeMap<S>>;

/// Finalized, immutable suffix tree
pub struct SuffixTree<M: EdgeMap> {
    /// Private copy of the input; edge labels point into it
    text: Vec<M::Symbol>,
    /// Node arena, root first
    nodes: Vec<Node<M>>,
}

impl<M: EdgeMap> SuffixTree<M> {
    /// Build a tree over `input`.
    ///
    /// The configuration and every symbol are validated before any node is
    /// created.
    pub fn build<I>(input: I, config: M::Config) -> TreeResult<Self>
    where
        I: IntoIterator<Item = M::Symbol>,
    {
        M::check_config(&config)?;

        let text: Vec<M::Symbol> = input.into_iter().collect();
        for (position, symbol) in text.iter().enumerate() {
            M::check_symbol(&config, position, symbol)?;
        }

        let mut builder = TreeBuilder::with_capacity(config, text.len())?;
        for symbol in text {
            builder.push_checked(symbol)?;
        }
        builder.finish()
    }

    pub(crate) fn from_parts(text: Vec<M::Symbol>, nodes: Vec<Node<M>>) -> Self {
        Self { text, nodes }
    }

    /// Total number of nodes, including the root
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node at `index`
    pub fn get_node(&self, index: NodeIndex) -> TreeResult<&Node<M>> {
        self.nodes.get(index).ok_or(TreeError::NodeOutOfBounds {
            index,
            node_count: self.nodes.len(),
        })
    }

    /// Child of `index` whose edge starts with `symbol`
    pub fn get_child(&self, index: NodeIndex, symbol: &M::Symbol) -> TreeResult<Option<NodeIndex>> {
        Ok(self.get_node(index)?.child(symbol))
    }

    /// All children of `index` (order depends on the edge-map strategy)
    pub fn get_children(&self, index: NodeIndex) -> TreeResult<Vec<NodeIndex>> {
        Ok(self.get_node(index)?.children())
    }

    pub fn root(&self) -> &Node<M> {
        &self.nodes[ROOT]
    }

    /// All nodes in arena order
    pub fn nodes(&self) -> &[Node<M>] {
        &self.nodes
    }

    /// The indexed input
    pub fn text(&self) -> &[M::Symbol] {
        &self.text
    }

    /// Number of input symbols
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Symbols on the edge entering `index` (empty for the root)
    pub fn label(&self, index: NodeIndex) -> TreeResult<&[M::Symbol]> {
        let node = self.get_node(index)?;
        Ok(&self.text[node.start..node.start + node.length])
    }

    /// True if `index` is a non-root node without children
    pub fn is_leaf(&self, index: NodeIndex) -> TreeResult<bool> {
        let node = self.get_node(index)?;
        Ok(index != ROOT && node.children.is_empty())
    }

    /// Suffix link of `index`, `None` for leaves and the root
    pub fn suffix_link(&self, index: NodeIndex) -> TreeResult<Option<NodeIndex>> {
        let node = self.get_node(index)?;
        if index == ROOT {
            return Ok(None);
        }
        Ok(node.suffix_link())
    }

    /// Indices of all leaves in arena order
    pub fn leaves(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, node)| node.children.is_empty())
            .map(|(index, _)| index)
    }

    pub fn leaf_count(&self) -> usize {
        self.leaves().count()
    }

    /// Node counts and depth of the tree
    pub fn stats(&self) -> TreeStats {
        let leaf_count = self.leaf_count();
        let node_count = self.nodes.len();

        let mut max_depth = 0;
        let mut stack = vec![(ROOT, 0usize)];
        while let Some((index, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            for child in self.nodes[index].children() {
                stack.push((child, depth + 1));
            }
        }

        TreeStats {
            text_len: self.text.len(),
            node_count,
            leaf_count,
            internal_count: node_count - 1 - leaf_count,
            max_depth,
        }
    }
}

impl ByteSuffixTree {
    /// Build a byte tree with a 256-slot array per node
    pub fn from_bytes(bytes: &[u8]) -> TreeResult<Self> {
        Self::build(bytes.iter().copied(), ArrayConfig::bytes())
    }
}

impl<M> Clone for SuffixTree<M>
where
    M: EdgeMap + Clone,
{
    fn clone(&self) -> Self {
        Self {
            text: self.text.clone(),
            nodes: self.nodes.clone(),
        }
    }
}

impl<M> std::fmt::Debug for SuffixTree<M>
where
    M: EdgeMap + std::fmt::Debug,
    M::Symbol: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuffixTree")
            .field("text", &self.text)
            .field("nodes", &self.nodes)
            .finish()
    }
}
